use crate::types::CompareFilter;

use super::{ComparisonTopic, Standard};

/// Library search: keeps every standard the query matches, in table order.
pub fn filter_standards<'a>(standards: &'a [Standard], query: &str) -> Vec<&'a Standard> {
    standards.iter().filter(|s| s.matches(query)).collect()
}

/// Compare filter: keeps the topics the selected mode admits, in table order.
/// Medium-similarity topics are listed under `All` only.
pub fn filter_topics<'a>(
    topics: &'a [ComparisonTopic],
    filter: CompareFilter,
) -> Vec<&'a ComparisonTopic> {
    topics.iter().filter(|t| filter.admits(t.similarity)).collect()
}
