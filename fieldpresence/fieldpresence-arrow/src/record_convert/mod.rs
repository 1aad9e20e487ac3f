//! Conversion between presence-aware records and Arrow `RecordBatch` rows.
//!
//! One record is one row. A field the record does not want serialized is a
//! null slot; a non-null slot is an explicit value.

mod builder;
mod read;

use std::sync::Arc;

use arrow::{
    array::{Array, ArrayRef},
    record_batch::{RecordBatch, RecordBatchOptions},
};
use fieldpresence_core::{FieldDefs, FieldPresence, apply_updates};

use crate::{error::ArrowBackendError, schema_convert::field_defs_to_arrow_schema};

use builder::ColumnBuilder;

/// Convert records sharing the schema `field_defs` to a `RecordBatch`.
///
/// Columns follow [`field_defs_to_arrow_schema`]. Absent fields are written
/// as null. An empty `records` yields an empty batch with the full schema.
pub fn records_to_record_batch<'a, I, R>(
    field_defs: &FieldDefs,
    records: I,
) -> Result<RecordBatch, ArrowBackendError>
where
    I: IntoIterator<Item = &'a R>,
    R: FieldPresence + ?Sized + 'a,
{
    let records: Vec<&R> = records.into_iter().collect();
    let schema = Arc::new(field_defs_to_arrow_schema(field_defs));

    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(field_defs.len());
    for def in field_defs.iter() {
        let mut builder = ColumnBuilder::new(def.data_type, records.len());
        for record in &records {
            if record.should_serialize(&def.name)? {
                builder.append_value(&record.get_value(&def.name)?)?;
            } else {
                builder.append_null();
            }
        }
        arrays.push(builder.finish());
    }

    log::debug!(
        "built record batch of {} row(s) x {} column(s)",
        records.len(),
        arrays.len()
    );
    let options = RecordBatchOptions::new().with_row_count(Some(records.len()));
    Ok(RecordBatch::try_new_with_options(schema, arrays, &options)?)
}

/// Apply row `row` of `batch` to `record`.
///
/// Every non-null cell of a column named after a record field is set on the
/// record; null cells leave the field untouched. Columns the record does not
/// know are skipped with a warning. Nothing is written if any cell is
/// rejected.
pub fn apply_row(
    batch: &RecordBatch,
    row: usize,
    record: &mut dyn FieldPresence,
) -> Result<(), ArrowBackendError> {
    if row >= batch.num_rows() {
        return Err(ArrowBackendError::RowOutOfRange {
            row,
            num_rows: batch.num_rows(),
        });
    }

    let schema = batch.schema();
    let mut updates = Vec::new();
    for (field, column) in schema.fields().iter().zip(batch.columns()) {
        let name = field.name();
        if record.field_defs().get(name).is_none() {
            log::warn!(
                "skipping column '{name}' unknown to record '{}'",
                record.record_name()
            );
            continue;
        }
        if column.is_null(row) {
            continue;
        }
        updates.push((name.clone(), read::cell_value(name, column.as_ref(), row)?));
    }

    apply_updates(record, updates)?;
    Ok(())
}
