//! In-memory record stores.
//!
//! A [`RecordStore`] keeps one kind of record in display order, newest
//! first. Records are only ever added; there is no update or delete.
//! Stores are plain values owned by whoever creates them, so every
//! session, test or command gets its own independent state.

pub mod seed;

use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::record::{AyudaRecord, Draft, Record, Resident};

/// Ordered, searchable collection of records of one kind.
///
/// Ids are unique within a store. New records get `len() + 1` as id and
/// are placed at the front, so iteration is reverse-chronological by
/// insertion rather than sorted by id.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a store holding `records` in the given display order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if two records share an id.
    pub fn from_records(records: Vec<R>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(Error::DuplicateId {
                    kind: R::KIND,
                    id: record.id(),
                });
            }
        }
        debug!(kind = R::KIND, count = records.len(), "Loaded records");
        Ok(Self { records })
    }

    /// Add a record created today.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a required field is empty; the
    /// store is not modified in that case.
    pub fn add(&mut self, draft: R::Draft) -> Result<&R> {
        self.add_on(draft, Local::now().date_naive())
    }

    /// Add a record with an explicit creation date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a required field is empty, or
    /// [`Error::DuplicateId`] if the next id is already taken (only possible
    /// for stores built with gaps in [`from_records`](Self::from_records)).
    /// The store is not modified in either case.
    pub fn add_on(&mut self, draft: R::Draft, created_on: NaiveDate) -> Result<&R> {
        let id = self.next_id();
        if self.get(id).is_some() {
            warn!(kind = R::KIND, id, "Next id already in use");
            return Err(Error::DuplicateId { kind: R::KIND, id });
        }
        let record = Draft::into_record(draft, id, created_on).map_err(|err| {
            warn!(kind = R::KIND, error = %err, "Rejected new record");
            err
        })?;

        self.records.insert(0, record);
        info!(kind = R::KIND, id, "Added record");
        Ok(&self.records[0])
    }

    /// Records where `term` occurs, ignoring case, in at least one of `fields`.
    ///
    /// An empty term matches every record. Results keep store order.
    #[must_use]
    pub fn search(&self, term: &str, fields: &[R::Field]) -> Vec<&R> {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return self.records.iter().collect();
        }

        self.records
            .iter()
            .filter(|record| {
                fields
                    .iter()
                    .any(|&field| record.field_text(field).to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Search the record kind's default fields.
    #[must_use]
    pub fn search_default(&self, term: &str) -> Vec<&R> {
        self.search(term, R::DEFAULT_SEARCH_FIELDS)
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Acknowledge a request to edit a record.
    ///
    /// Editing is not supported; this only produces the message shown to
    /// the user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] for an unknown id.
    pub fn acknowledge_edit(&self, id: u32) -> Result<String> {
        let record = self.require(id)?;
        info!(kind = R::KIND, id, "Edit requested");
        Ok(format!("Editing {}", record.display_name()))
    }

    /// Acknowledge a request to delete a record.
    ///
    /// Deleting is not supported; this only produces the confirmation
    /// prompt shown to the user and leaves the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] for an unknown id.
    pub fn acknowledge_delete(&self, id: u32) -> Result<String> {
        let record = self.require(id)?;
        info!(kind = R::KIND, id, "Delete requested");
        Ok(format!("Confirm deletion of {}?", record.display_name()))
    }

    /// Records in display order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Iterate records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&self) -> u32 {
        u32::try_from(self.records.len()).map_or(u32::MAX, |len| len.saturating_add(1))
    }

    fn require(&self, id: u32) -> Result<&R> {
        self.get(id)
            .ok_or(Error::RecordNotFound { kind: R::KIND, id })
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// The stores backing one session: residents and ayuda records.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Registered residents.
    pub residents: RecordStore<Resident>,
    /// Ayuda distributions.
    pub ayuda: RecordStore<AyudaRecord>,
}

impl Registry {
    /// Create a registry with empty stores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the sample residents and ayuda records.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample data contains duplicate ids.
    pub fn seeded() -> Result<Self> {
        Ok(Self {
            residents: RecordStore::from_records(seed::sample_residents())?,
            ayuda: RecordStore::from_records(seed::sample_ayuda())?,
        })
    }

    /// Create a registry according to the store configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if seeding fails.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        if config.seed_sample_data {
            Self::seeded()
        } else {
            Ok(Self::new())
        }
    }
}
