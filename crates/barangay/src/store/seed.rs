//! Sample records a fresh session starts with.

use chrono::NaiveDate;

use crate::record::{AyudaRecord, AyudaStatus, AyudaType, Resident, ResidentStatus};

// Literal dates below are all valid calendar days.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn resident(
    id: u32,
    name: &str,
    age: u32,
    address: &str,
    phone: &str,
    status: ResidentStatus,
    date_registered: NaiveDate,
) -> Resident {
    Resident {
        id,
        name: name.to_string(),
        age,
        address: address.to_string(),
        phone: phone.to_string(),
        status,
        date_registered,
    }
}

fn ayuda(
    id: u32,
    recipient: &str,
    kind: AyudaType,
    amount: u64,
    date_distributed: NaiveDate,
    status: AyudaStatus,
    notes: &str,
) -> AyudaRecord {
    AyudaRecord {
        id,
        recipient: recipient.to_string(),
        kind,
        amount,
        date_distributed,
        status,
        notes: notes.to_string(),
    }
}

/// Sample residents, in display order.
#[must_use]
pub fn sample_residents() -> Vec<Resident> {
    vec![
        resident(
            1,
            "Juan Dela Cruz",
            35,
            "Block 1 Lot 5",
            "09123456789",
            ResidentStatus::Active,
            date(2024, 1, 15),
        ),
        resident(
            2,
            "Maria Santos",
            28,
            "Block 2 Lot 10",
            "09987654321",
            ResidentStatus::Active,
            date(2024, 2, 20),
        ),
        resident(
            3,
            "Pedro Garcia",
            42,
            "Block 3 Lot 8",
            "09456789123",
            ResidentStatus::Inactive,
            date(2023, 12, 10),
        ),
    ]
}

/// Sample ayuda records, in display order.
#[must_use]
pub fn sample_ayuda() -> Vec<AyudaRecord> {
    vec![
        ayuda(
            1,
            "Juan Dela Cruz",
            AyudaType::FoodPackage,
            1500,
            date(2024, 7, 20),
            AyudaStatus::Distributed,
            "Regular monthly assistance",
        ),
        ayuda(
            2,
            "Maria Santos",
            AyudaType::MedicalAssistance,
            3000,
            date(2024, 7, 18),
            AyudaStatus::Distributed,
            "Emergency medical aid",
        ),
        ayuda(
            3,
            "Pedro Garcia",
            AyudaType::EducationAllowance,
            2000,
            date(2024, 7, 15),
            AyudaStatus::Pending,
            "School supplies assistance",
        ),
    ]
}
