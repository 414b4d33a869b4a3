// Embedded reference datasets: the three standards shown in the Library and the
// comparison topics shown in Compare. Both tables are fixed at build time; the
// app never creates or mutates records.

mod filter;
mod types;

#[cfg(test)]
mod tests;

pub use filter::{filter_standards, filter_topics};
pub use types::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse embedded dataset {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("embedded dataset {0} is empty")]
    Empty(&'static str),
}

pub fn load_standards() -> Result<Vec<Standard>, DatasetError> {
    let name = "standards.json";
    let list: Vec<Standard> = serde_json::from_str(include_str!("standards.json"))
        .map_err(|source| DatasetError::Parse { name, source })?;
    if list.is_empty() {
        return Err(DatasetError::Empty(name));
    }
    Ok(list)
}

pub fn load_comparison_topics() -> Result<Vec<ComparisonTopic>, DatasetError> {
    let name = "comparison_topics.json";
    let list: Vec<ComparisonTopic> = serde_json::from_str(include_str!("comparison_topics.json"))
        .map_err(|source| DatasetError::Parse { name, source })?;
    if list.is_empty() {
        return Err(DatasetError::Empty(name));
    }
    Ok(list)
}

lazy_static::lazy_static! {
    pub static ref STANDARDS: Vec<Standard> =
        load_standards().expect("embedded standards dataset");
    pub static ref COMPARISON_TOPICS: Vec<ComparisonTopic> =
        load_comparison_topics().expect("embedded comparison topics dataset");
}
