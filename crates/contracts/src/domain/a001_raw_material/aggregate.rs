use serde::{Deserialize, Serialize};

/// One row of the `raw_material` table.
///
/// Field names double as the JSON keys the API has always emitted, so they
/// follow the table's column names rather than Rust naming conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    pub rawmaterialid: String,
    pub rawmaterialname: String,
    pub rawmaterialprice: f64,
}
