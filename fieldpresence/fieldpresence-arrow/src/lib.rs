//! Arrow columnar backend for `fieldpresence`.
//!
//! Records map to rows and fields map to nullable columns. An absent field is
//! a null slot, so a record's presence state is carried by the validity
//! bitmap:
//! - [`field_defs_to_arrow_schema`] converts a record schema to an Arrow
//!   `Schema`.
//! - [`records_to_record_batch`] and [`apply_row`] convert records to and from
//!   `RecordBatch` rows.
//! - [`ArrowBackend`] implements the `PresenceBackend` contract over Arrow IPC
//!   stream bytes, one record per stream.
//!
//! # Typical Flow
//! ```rust
//! use fieldpresence_arrow::{apply_row, records_to_record_batch};
//! use fieldpresence_core::{FieldPresence, presence_record};
//!
//! presence_record! {
//!     pub struct Sample {
//!         #[tag = 1]
//!         id: u64 = 0,
//!     }
//! }
//!
//! let mut a = Sample::new();
//! a.set_id(0);
//! let b = Sample::new();
//!
//! let batch = records_to_record_batch(a.field_defs(), [&a, &b]).unwrap();
//! assert_eq!(batch.column(0).null_count(), 1);
//!
//! let mut out = Sample::new();
//! apply_row(&batch, 0, &mut out).unwrap();
//! assert!(out.id_specified());
//! ```
pub mod error;
pub mod ipc;
pub mod record_convert;
pub mod schema_convert;

/// Re-export of [`error::ArrowBackendError`].
pub use error::ArrowBackendError;
/// Re-exports from [`ipc`].
pub use ipc::{ArrowBackend, apply_ipc_stream, record_to_ipc_stream};
/// Re-exports from [`record_convert`].
pub use record_convert::{apply_row, records_to_record_batch};
/// Re-export of [`schema_convert::field_defs_to_arrow_schema`].
pub use schema_convert::field_defs_to_arrow_schema;
