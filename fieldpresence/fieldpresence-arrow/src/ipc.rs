//! Arrow IPC stream encoding of a single record.

use std::io::Cursor;

use arrow::{
    error::ArrowError,
    ipc::{reader::StreamReader, writer::StreamWriter},
    record_batch::RecordBatch,
};
use fieldpresence_core::{BackendError, FieldPresence, PresenceBackend, WireFormat};

use crate::{apply_row, error::ArrowBackendError, records_to_record_batch};

/// Write `record` as an IPC stream holding one one-row batch.
pub fn record_to_ipc_stream(record: &dyn FieldPresence) -> Result<Vec<u8>, ArrowBackendError> {
    let batch = records_to_record_batch(record.field_defs(), [record])?;
    let mut buf = Vec::new();
    {
        let mut writer = StreamWriter::try_new(&mut buf, &batch.schema())?;
        writer.write(&batch)?;
        writer.finish()?;
    }
    Ok(buf)
}

/// Read an IPC stream holding exactly one row and apply it to `record`.
pub fn apply_ipc_stream(data: &[u8], record: &mut dyn FieldPresence) -> Result<(), ArrowBackendError> {
    let reader = StreamReader::try_new(Cursor::new(data), None)?;
    let batches = reader.collect::<Result<Vec<RecordBatch>, ArrowError>>()?;

    let num_rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    let batch = match batches.iter().find(|b| b.num_rows() > 0) {
        Some(batch) if num_rows == 1 => batch,
        _ => return Err(ArrowBackendError::RowCount(num_rows)),
    };
    apply_row(batch, 0, record)
}

/// [`PresenceBackend`] producing Arrow IPC stream bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowBackend;

impl ArrowBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PresenceBackend for ArrowBackend {
    fn format(&self) -> WireFormat {
        WireFormat::ArrowIpc
    }

    fn serialize(&self, record: &dyn FieldPresence) -> Result<Vec<u8>, BackendError> {
        record_to_ipc_stream(record).map_err(|e| e.into_encode(record.record_name()))
    }

    fn deserialize_into(
        &self,
        data: &[u8],
        record: &mut dyn FieldPresence,
    ) -> Result<(), BackendError> {
        apply_ipc_stream(data, record).map_err(|e| e.into_decode(record.record_name()))
    }
}
