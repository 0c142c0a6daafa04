pub mod error;
pub mod export;
pub mod records;
pub mod stats;
