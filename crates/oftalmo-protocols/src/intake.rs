//! Fixed intake lists and the attendance they feed into.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use oftalmo_core::models::attendance::Attendance;
use oftalmo_core::models::patient::Patient;

use crate::catalog::ProtocolCatalog;
use crate::error::ProtocolError;

/// Every exam the printable report can list, in print order.
pub const GENERAL_EXAMS: &[&str] = &[
    "OCT de Mácula – AO",
    "OCT de Nervo Óptico – AO",
    "Retinografia Colorida – AO",
    "Gonioscopia – AO",
    "Campimetria – AO",
    "Curva Tensional Diária ou TSH – AO",
    "USG Ocular – AO",
    "Mapeamento de Retina – AO",
    "Paquimetria de Córnea – AO",
    "Ceratoscopia / Topografia – AO",
    "Microscopia Especular de Córnea – AO",
    "Teste de Shirmmer – AO",
];

/// Presenting complaints offered on the intake form.
pub const COMPLAINTS: &[&str] = &[
    "Dificuldade visual para longe",
    "Visão embaçada / flutuação",
    "Fotofobia / Lacremejamento",
    "Pós-operatório oftalmológico",
    "Dificuldade visual para perto",
    "Dor ocular / pressão ocular",
    "Trauma ocular recente",
];

/// Clinical history items offered on the intake form.
pub const HISTORY: &[&str] = &[
    "Uso de óculos ou lentes",
    "Glaucoma / hipertensão ocular",
    "Retinopatia / DMRI / uveíte",
    "Uso de corticoides / imunossupressores",
    "Acompanhamento periódico",
    "Doenças sistêmicas (DM, HAS)",
];

/// Exams from `general` that were not recommended, in `general`'s order.
pub fn other_exams<'a, S: AsRef<str>>(general: &[&'a str], recommended: &[S]) -> Vec<&'a str> {
    general
        .iter()
        .copied()
        .filter(|exam| !recommended.iter().any(|r| r.as_ref() == *exam))
        .collect()
}

/// The consultant's selections for one visit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Intake {
    #[serde(default)]
    pub complaints: Vec<String>,
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub findings: Vec<String>,
}

impl ProtocolCatalog {
    /// Evaluate `intake` for `patient` as of `today` and package the result
    /// as a new attendance. Selections are kept exactly as submitted.
    pub fn attend(
        &self,
        patient: &Patient,
        consultant: &str,
        intake: Intake,
        today: Date,
    ) -> Result<Attendance, ProtocolError> {
        let result = self.evaluate(patient.age_on(today), &intake.findings)?;

        Ok(Attendance {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            consultant: consultant.to_string(),
            complaints: intake.complaints,
            history: intake.history,
            findings: intake.findings,
            score: result.score,
            exams: result.exams,
            justification: result.justification,
            bibliography: result.bibliography,
            reference_links: result.reference_links,
            created_at: jiff::Timestamp::now(),
        })
    }
}
