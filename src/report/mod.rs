//! Report rendering: error summary, valid records, rejection diagnostics
//!
//! Renderers write to any `io::Write`; callers decide where the bytes go.

mod rejections;
mod summary;
mod valid_records;

pub use rejections::write_rejections;
pub use summary::{render_summary, write_summary, SummaryFormat};
pub use valid_records::write_valid_records;
