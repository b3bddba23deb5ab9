//! User records and their conversion from JSON input entries

mod errors;
#[allow(clippy::module_inception)]
mod record;

pub use errors::{RecordError, RecordResult};
pub use record::Record;
pub(crate) use record::json_type_name;
