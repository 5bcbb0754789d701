//! CSV persistence of the record store.
//!
//! Layout: a header row `hour1,...,hour8` followed by one row per day of the
//! month, first row = day 1. Empty fields are unset slots.

use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, RecordStore, SLOTS};
use crate::ui::messages::{error, warning};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn slot_header(idx: usize) -> String {
    format!("hour{}", idx + 1)
}

pub fn headers() -> [String; SLOTS] {
    std::array::from_fn(slot_header)
}

/// Column position of every slot in the file, looked up by header name.
fn slot_columns(header: &StringRecord) -> [Option<usize>; SLOTS] {
    std::array::from_fn(|slot| {
        let name = slot_header(slot);
        header.iter().position(|h| h.trim() == name)
    })
}

/// Decode CSV content into a store.
///
/// Decoding stops at the first malformed row; the rows read before it are
/// returned together with the error.
pub fn decode<R: Read>(input: R) -> (RecordStore, Option<AppError>) {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let columns = match rdr.headers() {
        Ok(h) => slot_columns(h),
        Err(e) => return (RecordStore::new(), Some(e.into())),
    };

    let mut store = RecordStore::new();
    for result in rdr.records() {
        match result {
            Ok(row) => {
                let fields = columns.map(|c| c.and_then(|i| row.get(i)).unwrap_or(""));
                store.push(DayRecord::from_fields(fields));
            }
            Err(e) => return (store, Some(e.into())),
        }
    }

    (store, None)
}

/// Encode a store as CSV bytes.
///
/// A row that fails to encode ends the output; the bytes produced so far are
/// returned together with the error.
pub fn encode(store: &RecordStore) -> (Vec<u8>, Option<AppError>) {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    let mut failure: Option<AppError> = None;

    if let Err(e) = wtr.write_record(headers()) {
        failure = Some(e.into());
    } else {
        for day in store.days() {
            if let Err(e) = wtr.write_record(day.to_fields()) {
                failure = Some(e.into());
                break;
            }
        }
    }

    match wtr.into_inner() {
        Ok(bytes) => (bytes, failure),
        Err(e) => (
            e.into_inner().get_ref().clone(),
            failure.or_else(|| Some(AppError::Other("failed to flush CSV output".into()))),
        ),
    }
}

/// Load the hours file.
///
/// Never fails: an unreadable file yields an empty store and a malformed one
/// the rows decoded before the problem. Both are reported as diagnostics.
pub fn load(path: &Path) -> RecordStore {
    let content = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warning(format!("Cannot read hours file {}: {}", path.display(), e));
            Vec::new()
        }
    };

    let (store, problem) = decode(content.as_slice());
    if let Some(e) = problem {
        error(format!("Malformed hours file {}: {}", path.display(), e));
    }
    store
}

/// Overwrite the hours file with the full store.
///
/// Encoding problems are reported and whatever was encoded is still written.
/// The parent directory is created when missing. A failed write is returned
/// as an error.
pub fn save(path: &Path, store: &RecordStore) -> AppResult<()> {
    let (bytes, problem) = encode(store);
    if let Some(e) = problem {
        error(format!("Failed to encode hours: {}", e));
    }

    let write_error = |source| AppError::HoursWrite {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    fs::write(path, bytes).map_err(write_error)
}
