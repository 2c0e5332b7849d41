//! `barangay` - Record management for a barangay office
//!
//! This library holds the resident registry and ayuda distribution ledger
//! in explicit in-memory stores, and exports reports built from them as CSV.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod record;
pub mod report;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{
    AyudaDraft, AyudaField, AyudaRecord, AyudaStatus, AyudaType, Draft, Record, Resident,
    ResidentDraft, ResidentField, ResidentStatus,
};
pub use store::{RecordStore, Registry};
