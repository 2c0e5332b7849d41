//! Report tables built from the live record stores.
//!
//! A report is a rectangular table of strings with the column names in the
//! first row, ready for [`to_csv`](crate::export::to_csv).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::export::{download, report_filename, to_csv, DownloadHost};
use crate::record::{AyudaRecord, AyudaStatus, Record, ResidentStatus};
use crate::store::{RecordStore, Registry};

/// Rows of a report, header first.
pub type ReportRows = Vec<Vec<String>>;

/// Age buckets used by the demographics report, inclusive bounds.
const AGE_GROUPS: [(&str, u32, u32); 4] = [
    ("0-18", 0, 18),
    ("19-35", 19, 35),
    ("36-60", 36, 60),
    ("60+", 61, u32::MAX),
];

/// The kinds of report that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// One row per registered resident.
    Residents,
    /// One row per ayuda distribution.
    Ayuda,
    /// Residents grouped by age bracket.
    Demographics,
    /// Headline counts across both stores.
    Summary,
}

impl ReportKind {
    /// Resolve a human-readable report name such as
    /// "Monthly Residents Report".
    ///
    /// The first of "residents", "ayuda" or "demographics" found in the
    /// lowercased name wins; anything else is a summary.
    #[must_use]
    pub fn from_report_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("residents") {
            Self::Residents
        } else if name.contains("ayuda") {
            Self::Ayuda
        } else if name.contains("demographics") {
            Self::Demographics
        } else {
            Self::Summary
        }
    }

    /// The selector value for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residents => "residents",
            Self::Ayuda => "ayuda",
            Self::Demographics => "demographics",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = Error;

    /// Parse a report type selector.
    ///
    /// An empty selector means no report type was picked.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ReportTypeRequired);
        }
        crate::record::parse_label(
            "report type",
            s,
            &[
                ("residents", Self::Residents),
                ("ayuda", Self::Ayuda),
                ("demographics", Self::Demographics),
                ("summary", Self::Summary),
                ("monthly", Self::Summary),
            ],
        )
    }
}

/// Inclusive date window applied to record creation dates.
///
/// An open end is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    /// Build a range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] if both ends are set and `from`
    /// is after `to`.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(Error::InvalidDateRange { from, to });
            }
        }
        Ok(Self { from, to })
    }

    /// A range without bounds.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Check if `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    fn select<'a, R: Record>(&self, store: &'a RecordStore<R>) -> Vec<&'a R> {
        store
            .iter()
            .filter(|record| self.contains(record.created_on()))
            .collect()
    }
}

/// Build the table for `kind` from the registry.
#[must_use]
pub fn build_rows(kind: ReportKind, registry: &Registry, range: DateRange) -> ReportRows {
    match kind {
        ReportKind::Residents => residents_rows(registry, range),
        ReportKind::Ayuda => ayuda_rows(registry, range),
        ReportKind::Demographics => demographics_rows(registry, range),
        ReportKind::Summary => summary_rows(registry, range),
    }
}

fn header(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| (*c).to_string()).collect()
}

fn residents_rows(registry: &Registry, range: DateRange) -> ReportRows {
    let mut rows = vec![header(&[
        "Name",
        "Age",
        "Address",
        "Phone",
        "Status",
        "Date Registered",
    ])];
    rows.extend(range.select(&registry.residents).into_iter().map(|r| {
        vec![
            r.name.clone(),
            r.age.to_string(),
            r.address.clone(),
            r.phone.clone(),
            r.status.to_string(),
            r.date_registered.format("%Y-%m-%d").to_string(),
        ]
    }));
    rows
}

fn ayuda_rows(registry: &Registry, range: DateRange) -> ReportRows {
    let mut rows = vec![header(&[
        "Recipient",
        "Type",
        "Amount",
        "Date Distributed",
        "Status",
        "Notes",
    ])];
    rows.extend(range.select(&registry.ayuda).into_iter().map(|r| {
        vec![
            r.recipient.clone(),
            r.kind.to_string(),
            r.amount.to_string(),
            r.date_distributed.format("%Y-%m-%d").to_string(),
            r.status.to_string(),
            r.notes.clone(),
        ]
    }));
    rows
}

fn demographics_rows(registry: &Registry, range: DateRange) -> ReportRows {
    let residents = range.select(&registry.residents);
    let total = residents.len();

    let mut rows = vec![header(&["Age Group", "Total", "Percentage"])];
    for (label, min, max) in AGE_GROUPS {
        let count = residents
            .iter()
            .filter(|r| (min..=max).contains(&r.age))
            .count();
        rows.push(vec![
            label.to_string(),
            count.to_string(),
            percentage(count, total),
        ]);
    }
    rows
}

fn summary_rows(registry: &Registry, range: DateRange) -> ReportRows {
    let residents = range.select(&registry.residents);
    let ayuda = range.select(&registry.ayuda);

    let total = residents.len();
    let active = residents
        .iter()
        .filter(|r| r.status == ResidentStatus::Active)
        .count();
    let (distributed, pending): (Vec<&AyudaRecord>, Vec<&AyudaRecord>) = ayuda
        .iter()
        .copied()
        .partition(|r| r.status == AyudaStatus::Distributed);
    let distributed_amount = total_amount(&distributed);
    let pending_amount = total_amount(&pending);

    vec![
        header(&["Category", "Count", "Amount", "Percentage"]),
        vec![
            "Total Residents".to_string(),
            total.to_string(),
            "-".to_string(),
            percentage(total, total),
        ],
        vec![
            "Active Residents".to_string(),
            active.to_string(),
            "-".to_string(),
            percentage(active, total),
        ],
        vec![
            "Ayuda Records".to_string(),
            ayuda.len().to_string(),
            format_peso(distributed_amount + pending_amount),
            "-".to_string(),
        ],
        vec![
            "Distributed Ayuda".to_string(),
            distributed.len().to_string(),
            format_peso(distributed_amount),
            percentage(distributed.len(), ayuda.len()),
        ],
        vec![
            "Pending Ayuda".to_string(),
            pending.len().to_string(),
            format_peso(pending_amount),
            percentage(pending.len(), ayuda.len()),
        ],
    ]
}

/// Sum of amounts, widened so that no combination of `u64` amounts overflows.
fn total_amount(records: &[&AyudaRecord]) -> u128 {
    records.iter().map(|r| u128::from(r.amount)).sum()
}

/// Whole-number percentage, rounded half up; `0%` for an empty total.
fn percentage(part: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{}%", (part * 100 + total / 2) / total)
}

/// Format an amount as pesos with thousands separators, e.g. `₱125,500`.
fn format_peso(amount: u128) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₱{grouped}")
}

/// Outcome of exporting a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// The report kind resolved from the name.
    pub kind: ReportKind,
    /// File name offered to the host.
    pub filename: String,
    /// Number of data rows, header excluded.
    pub rows: usize,
    /// Whether the host accepted the file.
    pub downloaded: bool,
}

/// Export the report called `report_name` as a CSV download.
///
/// The name picks the report kind (see [`ReportKind::from_report_name`])
/// and, together with `today`, the file name.
///
/// # Errors
///
/// Returns an error if the host supports downloads but fails to store the
/// file.
pub fn export_report<H: DownloadHost + ?Sized>(
    report_name: &str,
    registry: &Registry,
    range: DateRange,
    host: &mut H,
    today: NaiveDate,
) -> Result<ExportSummary> {
    let kind = ReportKind::from_report_name(report_name);
    export_report_as(kind, report_name, registry, range, host, today)
}

/// Export a report of an explicit `kind`, using `report_name` only for the
/// file name.
///
/// # Errors
///
/// Returns an error if the host supports downloads but fails to store the
/// file.
pub fn export_report_as<H: DownloadHost + ?Sized>(
    kind: ReportKind,
    report_name: &str,
    registry: &Registry,
    range: DateRange,
    host: &mut H,
    today: NaiveDate,
) -> Result<ExportSummary> {
    let rows = build_rows(kind, registry, range);
    let filename = report_filename(report_name, today);
    let csv = to_csv(&rows);

    let downloaded = download(&csv, &filename, host)?;
    info!(%kind, filename = %filename, downloaded, "Exported report");

    Ok(ExportSummary {
        kind,
        filename,
        rows: rows.len().saturating_sub(1),
        downloaded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{MemoryHost, NoDownloadHost};
    use crate::record::{AyudaDraft, AyudaType, ResidentDraft};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_from_report_name() {
        assert_eq!(
            ReportKind::from_report_name("Monthly Residents Report"),
            ReportKind::Residents
        );
        assert_eq!(
            ReportKind::from_report_name("Ayuda Distribution Report"),
            ReportKind::Ayuda
        );
        assert_eq!(
            ReportKind::from_report_name("DEMOGRAPHICS"),
            ReportKind::Demographics
        );
        assert_eq!(
            ReportKind::from_report_name("Quarterly Overview"),
            ReportKind::Summary
        );
        // Residents wins over ayuda when both appear.
        assert_eq!(
            ReportKind::from_report_name("Ayuda per Residents"),
            ReportKind::Residents
        );
    }

    #[test]
    fn test_kind_from_selector() {
        assert_eq!("ayuda".parse::<ReportKind>().unwrap(), ReportKind::Ayuda);
        assert_eq!(
            " Summary ".parse::<ReportKind>().unwrap(),
            ReportKind::Summary
        );
        assert!(matches!(
            "".parse::<ReportKind>().unwrap_err(),
            Error::ReportTypeRequired
        ));
        assert_eq!(
            "Monthly".parse::<ReportKind>().unwrap(),
            ReportKind::Summary
        );
        assert!(matches!(
            "weekly".parse::<ReportKind>().unwrap_err(),
            Error::UnknownValue { .. }
        ));
    }

    #[test]
    fn test_date_range_rejects_reversed_bounds() {
        let err = DateRange::new(Some(day(2024, 8, 1)), Some(day(2024, 7, 1))).unwrap_err();
        assert!(matches!(err, Error::InvalidDateRange { .. }));
        assert!(DateRange::new(Some(day(2024, 7, 1)), Some(day(2024, 7, 1))).is_ok());
    }

    #[test]
    fn test_date_range_contains_inclusive() {
        let range = DateRange::new(Some(day(2024, 7, 15)), Some(day(2024, 7, 18))).unwrap();
        assert!(range.contains(day(2024, 7, 15)));
        assert!(range.contains(day(2024, 7, 18)));
        assert!(!range.contains(day(2024, 7, 19)));

        let open = DateRange::new(None, Some(day(2024, 1, 1))).unwrap();
        assert!(open.contains(day(1999, 1, 1)));
        assert!(DateRange::all().contains(day(2099, 12, 31)));
    }

    #[test]
    fn test_residents_rows() {
        let registry = Registry::seeded().unwrap();
        let rows = build_rows(ReportKind::Residents, &registry, DateRange::all());

        assert_eq!(
            rows[0],
            vec!["Name", "Age", "Address", "Phone", "Status", "Date Registered"]
        );
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[1],
            vec![
                "Juan Dela Cruz",
                "35",
                "Block 1 Lot 5",
                "09123456789",
                "Active",
                "2024-01-15"
            ]
        );
    }

    #[test]
    fn test_ayuda_rows_filtered_by_range() {
        let registry = Registry::seeded().unwrap();
        let range = DateRange::new(Some(day(2024, 7, 18)), None).unwrap();
        let rows = build_rows(ReportKind::Ayuda, &registry, range);

        let recipients: Vec<&str> = rows[1..].iter().map(|r| r[0].as_str()).collect();
        assert_eq!(recipients, vec!["Juan Dela Cruz", "Maria Santos"]);
        assert_eq!(rows[2][1], "Medical Assistance");
        assert_eq!(rows[2][2], "3000");
    }

    #[test]
    fn test_demographics_rows() {
        let mut registry = Registry::new();
        for (name, age) in [("A", 10), ("B", 18), ("C", 30), ("D", 61)] {
            registry
                .residents
                .add_on(ResidentDraft::new(name, age, "Block 1", "0900"), day(2024, 1, 1))
                .unwrap();
        }

        let rows = build_rows(ReportKind::Demographics, &registry, DateRange::all());
        assert_eq!(rows[0], vec!["Age Group", "Total", "Percentage"]);
        assert_eq!(rows[1], vec!["0-18", "2", "50%"]);
        assert_eq!(rows[2], vec!["19-35", "1", "25%"]);
        assert_eq!(rows[3], vec!["36-60", "0", "0%"]);
        assert_eq!(rows[4], vec!["60+", "1", "25%"]);
    }

    #[test]
    fn test_demographics_empty_registry() {
        let rows = build_rows(ReportKind::Demographics, &Registry::new(), DateRange::all());
        assert_eq!(rows.len(), 5);
        assert!(rows[1..].iter().all(|r| r[1] == "0" && r[2] == "0%"));
    }

    #[test]
    fn test_summary_rows() {
        let mut registry = Registry::seeded().unwrap();
        registry
            .ayuda
            .add_on(
                AyudaDraft::new("Ana Rodriguez", AyudaType::FoodPackage, 120_000)
                    .with_status(AyudaStatus::Distributed),
                day(2024, 7, 22),
            )
            .unwrap();

        let rows = build_rows(ReportKind::Summary, &registry, DateRange::all());
        assert_eq!(rows[0], vec!["Category", "Count", "Amount", "Percentage"]);
        assert_eq!(rows[1], vec!["Total Residents", "3", "-", "100%"]);
        assert_eq!(rows[2], vec!["Active Residents", "2", "-", "67%"]);
        assert_eq!(rows[3], vec!["Ayuda Records", "4", "₱126,500", "-"]);
        assert_eq!(rows[4], vec!["Distributed Ayuda", "3", "₱124,500", "75%"]);
        assert_eq!(rows[5], vec!["Pending Ayuda", "1", "₱2,000", "25%"]);
    }

    #[test]
    fn test_summary_amounts_beyond_u64() {
        crate::logging::init_test_logging();
        let mut registry = Registry::seeded().unwrap();
        registry
            .ayuda
            .add_on(
                AyudaDraft::new("Ana Rodriguez", AyudaType::EmergencyRelief, u64::MAX)
                    .with_status(AyudaStatus::Distributed),
                day(2024, 7, 22),
            )
            .unwrap();

        let rows = build_rows(ReportKind::Summary, &registry, DateRange::all());
        assert_eq!(
            rows[3],
            vec!["Ayuda Records", "4", "₱18,446,744,073,709,558,115", "-"]
        );
        assert_eq!(
            rows[4],
            vec!["Distributed Ayuda", "3", "₱18,446,744,073,709,556,115", "75%"]
        );
    }

    #[test]
    fn test_format_peso() {
        assert_eq!(format_peso(0), "₱0");
        assert_eq!(format_peso(999), "₱999");
        assert_eq!(format_peso(1000), "₱1,000");
        assert_eq!(format_peso(125_500), "₱125,500");
        assert_eq!(format_peso(1_234_567), "₱1,234,567");
        assert_eq!(
            format_peso(u128::from(u64::MAX)),
            "₱18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(percentage(1, 3), "33%");
        assert_eq!(percentage(2, 3), "67%");
        assert_eq!(percentage(0, 0), "0%");
    }

    #[test]
    fn test_export_report_downloads_csv() {
        crate::logging::init_test_logging();
        let registry = Registry::seeded().unwrap();
        let mut host = MemoryHost::new();

        let summary = export_report(
            "Monthly Residents Report",
            &registry,
            DateRange::all(),
            &mut host,
            day(2024, 7, 25),
        )
        .unwrap();

        assert_eq!(summary.kind, ReportKind::Residents);
        assert_eq!(summary.filename, "monthly_residents_report_2024-07-25.csv");
        assert_eq!(summary.rows, 3);
        assert!(summary.downloaded);

        let file = &host.downloads[0];
        assert!(file
            .content
            .starts_with("\"Name\",\"Age\",\"Address\",\"Phone\",\"Status\",\"Date Registered\"\n"));
        assert_eq!(file.content.lines().count(), 4);
    }

    #[test]
    fn test_export_report_without_download_support() {
        let registry = Registry::seeded().unwrap();
        let summary = export_report(
            "Ayuda Distribution Report",
            &registry,
            DateRange::all(),
            &mut NoDownloadHost,
            day(2024, 7, 25),
        )
        .unwrap();

        assert_eq!(summary.kind, ReportKind::Ayuda);
        assert!(!summary.downloaded);
    }

    #[test]
    fn test_export_report_as_explicit_kind() {
        let registry = Registry::seeded().unwrap();
        let mut host = MemoryHost::new();

        let summary = export_report_as(
            ReportKind::Demographics,
            "Residents Age Breakdown",
            &registry,
            DateRange::all(),
            &mut host,
            day(2024, 7, 25),
        )
        .unwrap();

        assert_eq!(summary.kind, ReportKind::Demographics);
        assert_eq!(summary.filename, "residents_age_breakdown_2024-07-25.csv");
        assert_eq!(summary.rows, 4);
        assert!(host.downloads[0].content.starts_with("\"Age Group\""));
    }

    #[test]
    fn test_export_includes_newly_added_records() {
        let mut registry = Registry::seeded().unwrap();
        registry
            .residents
            .add_on(
                ResidentDraft::new("Carlos Mendoza", 29, "Block 4 Lot 3", "09556677889"),
                day(2024, 7, 25),
            )
            .unwrap();

        let mut host = MemoryHost::new();
        export_report(
            "Residents",
            &registry,
            DateRange::all(),
            &mut host,
            day(2024, 7, 25),
        )
        .unwrap();

        let second_line = host.downloads[0].content.lines().nth(1).unwrap();
        assert!(second_line.starts_with("\"Carlos Mendoza\""));
    }

    #[test]
    fn test_export_report_stays_inside_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("reports");
        let registry = Registry::seeded().unwrap();
        let mut host = crate::export::DirectoryHost::new(&reports);

        let summary = export_report(
            "../escaped",
            &registry,
            DateRange::all(),
            &mut host,
            day(2024, 1, 1),
        )
        .unwrap();

        assert_eq!(summary.filename, ".._escaped_2024-01-01.csv");
        assert!(reports.join(&summary.filename).is_file());
        assert!(!dir.path().join("escaped_2024-01-01.csv").exists());
    }
}
