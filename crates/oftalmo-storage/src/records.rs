//! Patient and attendance persistence.

use std::cmp::Reverse;
use std::path::Path;

use uuid::Uuid;

use oftalmo_core::keys;
use oftalmo_core::models::attendance::Attendance;
use oftalmo_core::models::patient::Patient;

use crate::error::StorageError;
use crate::state;

/// Maximum number of patients a search returns.
pub const SEARCH_LIMIT: usize = 50;

pub async fn save_patient(root: &Path, patient: &Patient) -> Result<(), StorageError> {
    state::save_json(root, &keys::patient(patient.id), patient).await?;
    tracing::info!(patient_id = %patient.id, "patient saved");
    Ok(())
}

pub async fn get_patient(root: &Path, id: Uuid) -> Result<Patient, StorageError> {
    state::load_json(root, &keys::patient(id)).await
}

pub async fn list_patients(root: &Path) -> Result<Vec<Patient>, StorageError> {
    state::load_all(root, keys::PATIENTS_PREFIX).await
}

/// Find patients whose name contains `query` (compared upper-cased) or
/// whose phone contains it verbatim. Newest first, at most
/// [`SEARCH_LIMIT`]. A blank query matches nothing.
pub async fn search_patients(root: &Path, query: &str) -> Result<Vec<Patient>, StorageError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let name_query = query.to_uppercase();

    let mut matches: Vec<Patient> = list_patients(root)
        .await?
        .into_iter()
        .filter(|p| {
            p.name.contains(&name_query)
                || p.phone.as_deref().is_some_and(|phone| phone.contains(query))
        })
        .collect();

    matches.sort_by_key(|p| Reverse(p.created_at));
    matches.truncate(SEARCH_LIMIT);
    Ok(matches)
}

pub async fn save_attendance(root: &Path, attendance: &Attendance) -> Result<(), StorageError> {
    state::save_json(root, &keys::attendance(attendance.id), attendance).await?;
    tracing::info!(
        attendance_id = %attendance.id,
        patient_id = %attendance.patient_id,
        score = attendance.score,
        "attendance saved"
    );
    Ok(())
}

pub async fn get_attendance(root: &Path, id: Uuid) -> Result<Attendance, StorageError> {
    state::load_json(root, &keys::attendance(id)).await
}

/// Every attendance recorded for `patient_id`, newest first.
pub async fn list_attendances_for_patient(
    root: &Path,
    patient_id: Uuid,
) -> Result<Vec<Attendance>, StorageError> {
    let mut attendances: Vec<Attendance> =
        state::load_all::<Attendance>(root, keys::ATTENDANCES_PREFIX)
            .await?
            .into_iter()
            .filter(|a| a.patient_id == patient_id)
            .collect();
    attendances.sort_by_key(|a| Reverse(a.created_at));
    Ok(attendances)
}
