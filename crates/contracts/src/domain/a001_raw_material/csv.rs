/// Parameter set for one raw-material price UPDATE, mapped from an uploaded
/// CSV row. The file's name column is carried in the upload but ignored here.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMaterialPriceUpdate {
    pub id: String,
    pub price: f64,
}
