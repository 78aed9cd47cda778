pub mod aggregate;
pub mod csv;

pub use aggregate::RawMaterial;
pub use csv::RawMaterialPriceUpdate;
