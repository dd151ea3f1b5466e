//! Display-string transforms for the Veneer page renderer.
//!
//! Upstream page data arrives as raw, inconsistently formatted strings:
//! byte counts, RFC3339 timestamps, time-series period codes, markdown with
//! malformed headings. Every function here turns one of those into a
//! display-ready string, deterministically, with no I/O and no shared state.
//!
//! Failure handling follows the renderer's degradation rules: date parsing
//! falls back to the input unchanged (logged), size parsing surfaces an
//! explicit error, and everything else is total.

mod date;
mod error;
mod markdown;
mod period;
mod seq;
mod size;
mod text;

pub use date::{date_format, date_format_yyyy_mm_dd};
pub use error::{Result, TextError};
pub use markdown::markdown;
pub use period::date_period_format;
pub use seq::{is_last, loop_range, not_last_item, subtract};
pub use size::human_size;
pub use text::{
    concatenate, legacy_dataset_download_uri, slugify, truncate_to_maximum_characters,
};
