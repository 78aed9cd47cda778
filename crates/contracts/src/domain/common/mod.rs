use serde::{Deserialize, Serialize};

/// Outcome of one bulk file import.
///
/// `submitted_count` is the number of parameter sets executed, not the number
/// of rows the database actually changed. Ids that matched nothing are
/// collected in `not_found_ids` (deduplicated, file order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    pub submitted_count: usize,
    pub not_found_ids: Vec<String>,
}
