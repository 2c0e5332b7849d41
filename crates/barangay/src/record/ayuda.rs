//! Ayuda (assistance) distribution records.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{parse_label, Draft, Record};
use crate::error::{Error, Result};

/// Kind of assistance handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AyudaType {
    /// Groceries and food packs.
    #[serde(rename = "Food Package")]
    FoodPackage,
    /// Medicine or hospital bills.
    #[serde(rename = "Medical Assistance")]
    MedicalAssistance,
    /// School supplies and fees.
    #[serde(rename = "Education Allowance")]
    EducationAllowance,
    /// Disaster and emergency support.
    #[serde(rename = "Emergency Relief")]
    EmergencyRelief,
    /// Support for senior citizens.
    #[serde(rename = "Senior Citizen Aid")]
    SeniorCitizenAid,
}

impl AyudaType {
    /// All assistance types, in the order the form lists them.
    pub const ALL: [Self; 5] = [
        Self::FoodPackage,
        Self::MedicalAssistance,
        Self::EducationAllowance,
        Self::EmergencyRelief,
        Self::SeniorCitizenAid,
    ];

    const LABELS: &'static [(&'static str, Self)] = &[
        ("Food Package", Self::FoodPackage),
        ("Medical Assistance", Self::MedicalAssistance),
        ("Education Allowance", Self::EducationAllowance),
        ("Emergency Relief", Self::EmergencyRelief),
        ("Senior Citizen Aid", Self::SeniorCitizenAid),
    ];

    /// The label shown in tables and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FoodPackage => "Food Package",
            Self::MedicalAssistance => "Medical Assistance",
            Self::EducationAllowance => "Education Allowance",
            Self::EmergencyRelief => "Emergency Relief",
            Self::SeniorCitizenAid => "Senior Citizen Aid",
        }
    }
}

impl fmt::Display for AyudaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AyudaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_label("ayuda type", s, Self::LABELS)
    }
}

/// Distribution state of an ayuda record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AyudaStatus {
    /// Approved but not yet handed out.
    #[default]
    Pending,
    /// Handed out to the recipient.
    Distributed,
}

impl AyudaStatus {
    const LABELS: &'static [(&'static str, Self)] = &[
        ("Pending", Self::Pending),
        ("Distributed", Self::Distributed),
    ];

    /// The label shown in tables and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Distributed => "Distributed",
        }
    }
}

impl fmt::Display for AyudaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AyudaStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_label("ayuda status", s, Self::LABELS)
    }
}

/// A single assistance distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AyudaRecord {
    /// Store-assigned id, unique within its store.
    pub id: u32,
    /// Name of the receiving resident.
    pub recipient: String,
    /// Kind of assistance.
    #[serde(rename = "type")]
    pub kind: AyudaType,
    /// Amount in pesos.
    pub amount: u64,
    /// Date the record was created.
    pub date_distributed: NaiveDate,
    /// Distribution state.
    pub status: AyudaStatus,
    /// Free-form notes; empty when none were given.
    #[serde(default)]
    pub notes: String,
}

/// Searchable ayuda fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AyudaField {
    /// Recipient name.
    Recipient,
    /// Assistance type label.
    Type,
    /// Status label.
    Status,
    /// Notes.
    Notes,
}

impl Record for AyudaRecord {
    const KIND: &'static str = "ayuda record";

    type Field = AyudaField;
    type Draft = AyudaDraft;

    const DEFAULT_SEARCH_FIELDS: &'static [AyudaField] = &[AyudaField::Recipient, AyudaField::Type];

    fn id(&self) -> u32 {
        self.id
    }

    fn created_on(&self) -> NaiveDate {
        self.date_distributed
    }

    fn field_text(&self, field: AyudaField) -> Cow<'_, str> {
        match field {
            AyudaField::Recipient => Cow::Borrowed(&self.recipient),
            AyudaField::Type => Cow::Borrowed(self.kind.label()),
            AyudaField::Status => Cow::Borrowed(self.status.label()),
            AyudaField::Notes => Cow::Borrowed(&self.notes),
        }
    }

    fn display_name(&self) -> &str {
        &self.recipient
    }
}

/// The new-ayuda-record form.
///
/// Recipient, type and amount are required; status defaults to
/// [`AyudaStatus::Pending`] and notes may stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AyudaDraft {
    /// Name of the receiving resident.
    pub recipient: String,
    /// Kind of assistance; `None` when not selected.
    #[serde(rename = "type")]
    pub kind: Option<AyudaType>,
    /// Amount in pesos; `None` when left blank.
    pub amount: Option<u64>,
    /// Distribution state.
    pub status: AyudaStatus,
    /// Free-form notes.
    pub notes: String,
}

impl AyudaDraft {
    /// Create a fully filled-in draft with the default status and no notes.
    #[must_use]
    pub fn new(recipient: impl Into<String>, kind: AyudaType, amount: u64) -> Self {
        Self {
            recipient: recipient.into(),
            kind: Some(kind),
            amount: Some(amount),
            status: AyudaStatus::default(),
            notes: String::new(),
        }
    }

    /// Set the status.
    #[must_use]
    pub fn with_status(mut self, status: AyudaStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl Draft for AyudaDraft {
    type Record = AyudaRecord;

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.recipient.is_empty() {
            missing.push("recipient");
        }
        if self.kind.is_none() {
            missing.push("type");
        }
        if self.amount.is_none() {
            missing.push("amount");
        }
        missing
    }

    fn into_record(self, id: u32, created_on: NaiveDate) -> Result<AyudaRecord> {
        let missing = self.missing_fields();
        match (self.kind, self.amount) {
            (Some(kind), Some(amount)) if missing.is_empty() => Ok(AyudaRecord {
                id,
                recipient: self.recipient,
                kind,
                amount,
                date_distributed: created_on,
                status: self.status,
                notes: self.notes,
            }),
            _ => Err(Error::validation(AyudaRecord::KIND, missing)),
        }
    }
}
