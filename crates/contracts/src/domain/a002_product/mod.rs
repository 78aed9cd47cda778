pub mod csv;

pub use csv::ProductUpdate;
