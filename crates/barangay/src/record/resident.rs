//! Registered residents.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{parse_label, Draft, Record};
use crate::error::{Error, Result};

/// Residency status of a registered resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResidentStatus {
    /// Currently living in the barangay.
    #[default]
    Active,
    /// Moved out or otherwise no longer active.
    Inactive,
}

impl ResidentStatus {
    const LABELS: &'static [(&'static str, Self)] =
        &[("Active", Self::Active), ("Inactive", Self::Inactive)];

    /// The label shown in tables and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for ResidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResidentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_label("resident status", s, Self::LABELS)
    }
}

/// A registered resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    /// Store-assigned id, unique within its store.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Block and lot address.
    pub address: String,
    /// Contact number.
    pub phone: String,
    /// Residency status.
    pub status: ResidentStatus,
    /// Registration date.
    pub date_registered: NaiveDate,
}

/// Searchable resident fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidentField {
    /// Full name.
    Name,
    /// Address.
    Address,
    /// Phone number.
    Phone,
    /// Status label.
    Status,
}

impl Record for Resident {
    const KIND: &'static str = "resident";

    type Field = ResidentField;
    type Draft = ResidentDraft;

    const DEFAULT_SEARCH_FIELDS: &'static [ResidentField] =
        &[ResidentField::Name, ResidentField::Address];

    fn id(&self) -> u32 {
        self.id
    }

    fn created_on(&self) -> NaiveDate {
        self.date_registered
    }

    fn field_text(&self, field: ResidentField) -> Cow<'_, str> {
        match field {
            ResidentField::Name => Cow::Borrowed(&self.name),
            ResidentField::Address => Cow::Borrowed(&self.address),
            ResidentField::Phone => Cow::Borrowed(&self.phone),
            ResidentField::Status => Cow::Borrowed(self.status.label()),
        }
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// The add-resident form.
///
/// Name, age, address and phone are required; status defaults to
/// [`ResidentStatus::Active`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidentDraft {
    /// Full name.
    pub name: String,
    /// Age in years; `None` when left blank.
    pub age: Option<u32>,
    /// Block and lot address.
    pub address: String,
    /// Contact number.
    pub phone: String,
    /// Residency status.
    pub status: ResidentStatus,
}

impl ResidentDraft {
    /// Create a fully filled-in draft with the default status.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: Some(age),
            address: address.into(),
            phone: phone.into(),
            status: ResidentStatus::default(),
        }
    }

    /// Set the status.
    #[must_use]
    pub fn with_status(mut self, status: ResidentStatus) -> Self {
        self.status = status;
        self
    }
}

impl Draft for ResidentDraft {
    type Record = Resident;

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.address.is_empty() {
            missing.push("address");
        }
        if self.phone.is_empty() {
            missing.push("phone");
        }
        missing
    }

    fn into_record(self, id: u32, created_on: NaiveDate) -> Result<Resident> {
        let missing = self.missing_fields();
        match self.age {
            Some(age) if missing.is_empty() => Ok(Resident {
                id,
                name: self.name,
                age,
                address: self.address,
                phone: self.phone,
                status: self.status,
                date_registered: created_on,
            }),
            _ => Err(Error::validation(Resident::KIND, missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_display_and_parse() {
        assert_eq!(ResidentStatus::Active.to_string(), "Active");
        assert_eq!(ResidentStatus::Inactive.to_string(), "Inactive");
        assert_eq!(
            "inactive".parse::<ResidentStatus>().unwrap(),
            ResidentStatus::Inactive
        );
        assert!("moved".parse::<ResidentStatus>().is_err());
    }

    #[test]
    fn test_draft_missing_fields_in_form_order() {
        let draft = ResidentDraft::default();
        assert_eq!(
            draft.missing_fields(),
            vec!["name", "age", "address", "phone"]
        );

        let draft = ResidentDraft {
            name: "Juan".to_string(),
            phone: "09123456789".to_string(),
            ..ResidentDraft::default()
        };
        assert_eq!(draft.missing_fields(), vec!["age", "address"]);
    }

    #[test]
    fn test_whitespace_counts_as_filled_in() {
        let draft = ResidentDraft::new(" ", 0, "Block 1", "0912");
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_into_record() {
        let draft = ResidentDraft::new("Maria Santos", 28, "Block 2 Lot 10", "09987654321")
            .with_status(ResidentStatus::Inactive);
        let resident = draft.into_record(7, day(2024, 2, 20)).unwrap();

        assert_eq!(resident.id, 7);
        assert_eq!(resident.name, "Maria Santos");
        assert_eq!(resident.age, 28);
        assert_eq!(resident.status, ResidentStatus::Inactive);
        assert_eq!(resident.date_registered, day(2024, 2, 20));
    }

    #[test]
    fn test_into_record_rejects_missing_age() {
        let draft = ResidentDraft {
            age: None,
            ..ResidentDraft::new("Juan", 1, "Block 1", "0912")
        };
        let err = draft.into_record(1, day(2024, 1, 1)).unwrap_err();
        assert_eq!(err.missing_fields(), &["age"]);
    }

    #[test]
    fn test_field_text() {
        let resident = ResidentDraft::new("Juan Dela Cruz", 35, "Block 1 Lot 5", "09123456789")
            .into_record(1, day(2024, 1, 15))
            .unwrap();

        assert_eq!(resident.field_text(ResidentField::Name), "Juan Dela Cruz");
        assert_eq!(resident.field_text(ResidentField::Address), "Block 1 Lot 5");
        assert_eq!(resident.field_text(ResidentField::Phone), "09123456789");
        assert_eq!(resident.field_text(ResidentField::Status), "Active");
    }

    #[test]
    fn test_resident_serialization_uses_camel_case() {
        let resident = ResidentDraft::new("Juan Dela Cruz", 35, "Block 1 Lot 5", "09123456789")
            .into_record(1, day(2024, 1, 15))
            .unwrap();

        let json = serde_json::to_value(&resident).unwrap();
        assert_eq!(json["dateRegistered"], "2024-01-15");
        assert_eq!(json["status"], "Active");

        let decoded: Resident = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, resident);
    }
}
