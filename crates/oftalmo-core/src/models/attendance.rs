use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A bibliography label paired with the guideline it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceLink {
    pub label: String,
    pub uri: String,
}

/// One submitted protocol evaluation for a patient.
///
/// The selections are stored as submitted; the derived fields are the
/// evaluator's output at the time of the visit and are never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Attendance {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub consultant: String,
    pub complaints: Vec<String>,
    pub history: Vec<String>,
    pub findings: Vec<String>,
    pub score: u8,
    pub exams: Vec<String>,
    pub justification: String,
    pub bibliography: Vec<String>,
    #[serde(default)]
    pub reference_links: Vec<ReferenceLink>,
    pub created_at: jiff::Timestamp,
}
