//! Per-record schema: field names, tags, scalar types and declared defaults.

mod format;
mod types;

pub use format::format_field_defs;
pub use types::{DataTypeDef, FieldDef, FieldDefs};
