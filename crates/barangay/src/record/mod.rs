//! Record kinds held by the in-memory stores.
//!
//! Every record kind comes with a draft type mirroring its creation form
//! (a record without id or creation date) and a closed set of searchable
//! fields. The generic [`RecordStore`](crate::store::RecordStore) only talks
//! to records through the [`Record`] and [`Draft`] traits.

mod ayuda;
mod resident;

use std::borrow::Cow;
use std::fmt::Debug;

use chrono::NaiveDate;

use crate::error::{Error, Result};

pub use ayuda::{AyudaDraft, AyudaField, AyudaRecord, AyudaStatus, AyudaType};
pub use resident::{Resident, ResidentDraft, ResidentField, ResidentStatus};

/// A record kind that can live in a [`RecordStore`](crate::store::RecordStore).
pub trait Record: Clone + Debug {
    /// Human-readable kind name used in errors and log events.
    const KIND: &'static str;

    /// The searchable fields of this record kind.
    type Field: Copy + Debug + PartialEq + 'static;

    /// The creation form for this record kind.
    type Draft: Draft<Record = Self>;

    /// Fields searched when the caller does not pick any.
    const DEFAULT_SEARCH_FIELDS: &'static [Self::Field];

    /// The store-assigned id.
    fn id(&self) -> u32;

    /// The date the record was created (registered or distributed).
    fn created_on(&self) -> NaiveDate;

    /// Text of the given field, as matched by search.
    fn field_text(&self, field: Self::Field) -> Cow<'_, str>;

    /// Name shown when acknowledging an action on this record.
    fn display_name(&self) -> &str;
}

/// A record without id, as filled in on a creation form.
pub trait Draft {
    /// The record this draft turns into.
    type Record: Record;

    /// Names of the required fields that are still empty, in form order.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Turn the draft into a record with the given id and creation date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] listing every missing required field.
    fn into_record(self, id: u32, created_on: NaiveDate) -> Result<Self::Record>;
}

/// Parse `value` against a table of `(label, variant)` pairs, ignoring case
/// and surrounding whitespace.
pub(crate) fn parse_label<T: Copy>(
    what: &'static str,
    value: &str,
    table: &[(&str, T)],
) -> Result<T> {
    let wanted = value.trim();
    table
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(wanted))
        .map(|(_, variant)| *variant)
        .ok_or_else(|| {
            let labels: Vec<&str> = table.iter().map(|(label, _)| *label).collect();
            Error::unknown_value(what, value, &labels)
        })
}
