//! CSV export.
//!
//! - [`to_csv`] renders a table of string cells as CSV text.
//! - [`report_filename`] derives the download name for a report.
//! - [`download`] hands the text to a [`DownloadHost`], doing nothing when
//!   the host cannot receive files.
//!
//! Cells are quoted verbatim: an embedded `"` is written as-is, so cells
//! containing quotes do not survive a round trip through a CSV reader.

mod download;

use std::sync::OnceLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

pub use download::{download, DirectoryHost, Download, DownloadHost, MemoryHost, NoDownloadHost};

/// Content type attached to exported files.
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8;";

/// Render rows of cells as CSV text.
///
/// Every cell is wrapped in double quotes, cells are joined with `,` and
/// rows with `\n`. There is no trailing newline.
///
/// ```
/// use barangay::export::to_csv;
///
/// let csv = to_csv(&[["Name", "Age"], ["Juan", "35"]]);
/// assert_eq!(csv, "\"Name\",\"Age\"\n\"Juan\",\"35\"");
/// ```
#[must_use]
pub fn to_csv<R, C>(rows: &[R]) -> String
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|cell| format!("\"{}\"", cell.as_ref()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Derive the file name for a report exported on `date`.
///
/// Each run of whitespace in `report_name` becomes `_`, the result is
/// lowercased and suffixed with `_YYYY-MM-DD.csv`. Path separators also
/// become `_`, so the result is always a bare file name.
///
/// # Panics
///
/// Panics if the built-in whitespace pattern fails to compile.
#[must_use]
pub fn report_filename(report_name: &str, date: NaiveDate) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace =
        WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("Invalid regex pattern"));

    let stem = whitespace
        .replace_all(report_name, "_")
        .replace(&['/', '\\'][..], "_")
        .to_lowercase();
    format!("{stem}_{}.csv", date.format("%Y-%m-%d"))
}

/// [`report_filename`] for today's local date.
#[must_use]
pub fn report_filename_today(report_name: &str) -> String {
    report_filename(report_name, Local::now().date_naive())
}
