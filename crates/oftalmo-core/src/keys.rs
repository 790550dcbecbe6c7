//! Object key conventions.
//!
//! Pure string functions. These define the canonical layout of records
//! inside the data directory.

use uuid::Uuid;

pub const PATIENTS_PREFIX: &str = "patients/";

pub const ATTENDANCES_PREFIX: &str = "attendances/";

pub fn patient(id: Uuid) -> String {
    format!("patients/{id}.json")
}

pub fn attendance(id: Uuid) -> String {
    format!("attendances/{id}.json")
}
