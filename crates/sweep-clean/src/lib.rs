//! Cleaning stages for the sweep pipeline.
//!
//! Each stage is a pure function over a [`sweep_model::Table`] that returns
//! its result together with a [`sweep_model::StageOutcome`] holding the notes
//! it contributes to the audit. Stages never raise errors; anything odd they
//! find is absorbed into notes.

pub mod dates;
pub mod dedupe;
pub mod impute;
pub mod normalize;

pub use dates::parse_date;
pub use dedupe::{DedupeResult, drop_duplicate_rows};
pub use impute::{ImputeResult, fill_missing};
pub use normalize::{DatePromotion, KeepReason, NormalizeResult, normalize, promote_dates};
