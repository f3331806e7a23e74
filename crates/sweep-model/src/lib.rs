//! Data model for the sweep cleaning pipeline.

pub mod audit;
pub mod error;
pub mod table;

pub use audit::{Audit, StageOutcome};
pub use error::{LoadError, WriteError};
pub use table::{CellValue, Column, ColumnType, Table};
