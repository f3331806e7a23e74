//! Output stage for the sweep pipeline: the cleaned CSV and the report.

pub mod report;
pub mod writer;

pub use report::{REPORT_FILENAME, render_report, write_report};
pub use writer::{cleaned_output_path, format_numeric, write_cleaned};
