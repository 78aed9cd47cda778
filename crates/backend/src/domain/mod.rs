pub mod a001_raw_material;
pub mod a002_product;
pub mod a003_client;
