use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::age;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    /// Stored upper-cased so name search is case-insensitive.
    pub name: String,
    pub birth_date: Date,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl Patient {
    /// Age in whole years on `today`.
    pub fn age_on(&self, today: Date) -> i32 {
        age::age(self.birth_date, today)
    }
}

/// Intake form for a new patient, as submitted by the consultant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPatient {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl NewPatient {
    /// Trim and validate the form, producing a patient with a fresh id.
    ///
    /// Name and birth date are required; blank optional fields become `None`.
    pub fn into_patient(self) -> Result<Patient, CoreError> {
        let name = self.name.trim().to_uppercase();
        if name.is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        let raw_birth_date = self.birth_date.trim();
        if raw_birth_date.is_empty() {
            return Err(CoreError::MissingField("birth_date".to_string()));
        }
        let birth_date = age::parse_birth_date(raw_birth_date)?;

        Ok(Patient {
            id: Uuid::new_v4(),
            name,
            birth_date,
            phone: non_blank(self.phone),
            address: non_blank(self.address),
            created_at: jiff::Timestamp::now(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
