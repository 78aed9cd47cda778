use chrono::{DateTime, Utc};

/// Parameter set for one product UPDATE, mapped from an uploaded CSV row.
///
/// `product_creationdate` is never taken from the file; the mapper stamps it
/// with the server clock at import time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub product_id: String,
    pub product_name: String,
    pub product_category: String,
    pub product_subcat: String,
    pub product_sp: f64,
    pub product_description: String,
    pub product_creationdate: DateTime<Utc>,
}
