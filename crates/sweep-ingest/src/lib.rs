//! CSV ingestion for the sweep cleaning pipeline.

pub mod reader;

pub use reader::{parse_f64, read_table};
