// Per-view selection state, extracted from app.rs to keep the update loop small.
// Both structs reset to defaults when their view is entered.

use crate::types::CompareFilter;

#[derive(Default)]
pub struct LibraryState {
    pub query: String,
}

#[derive(Default)]
pub struct CompareState {
    pub filter: CompareFilter,
}
