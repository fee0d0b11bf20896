pub mod data_source;
pub mod records;
pub mod tables;
