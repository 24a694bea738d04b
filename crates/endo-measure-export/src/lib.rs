//! Append-only CSV export of endodontic measurement records.
//!
//! One `Measurements.csv` per image directory, `;`-separated, one row per
//! saved root. The column set varies per row with the observations and sites
//! actually recorded: a fresh file gets a header matching its first row, and
//! later rows are appended without rewriting the header. Readers must
//! tolerate ragged rows. This mirrors the historical export format and is
//! deliberately not "fixed" here, since a silent change would break existing
//! spreadsheets.

mod row;
mod store;

pub use row::MeasurementRow;
pub use store::{
    append_row, measurements_path, ExportError, StoreMode, DEFAULT_SEPARATOR,
    MEASUREMENTS_FILENAME,
};
