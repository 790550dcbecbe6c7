use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use oftalmo_core::age;
use oftalmo_core::models::attendance::Attendance;
use oftalmo_core::models::patient::{NewPatient, Patient};
use oftalmo_protocols::{Intake, catalog};
use oftalmo_storage::records;

use crate::error::ApiError;
use crate::middleware::audit::AuditEvent;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct PatientDetail {
    #[serde(flatten)]
    patient: Patient,
    age: i32,
}

/// Search by name or phone. An empty query returns an empty list.
pub async fn search_patients(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = records::search_patients(&state.data_dir, &params.q).await?;
    Ok(Json(patients))
}

pub async fn create_patient(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(new_patient): Json<NewPatient>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let patient = new_patient.into_patient()?;
    records::save_patient(&state.data_dir, &patient).await?;
    AuditEvent::new("create", "patient", patient.id, &user.username).emit();
    Ok((StatusCode::CREATED, Json(patient)))
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PatientDetail>, ApiError> {
    let patient = records::get_patient(&state.data_dir, id).await?;
    let age = patient.age_on(age::today());
    Ok(Json(PatientDetail { patient, age }))
}

/// Evaluate the submitted intake for this patient and store the attendance.
pub async fn create_attendance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(intake): Json<Intake>,
) -> Result<(StatusCode, Json<Attendance>), ApiError> {
    let patient = records::get_patient(&state.data_dir, id).await?;
    let attendance = catalog().attend(&patient, &user.username, intake, age::today())?;
    records::save_attendance(&state.data_dir, &attendance).await?;
    AuditEvent::new("create", "attendance", attendance.id, &user.username).emit();
    Ok((StatusCode::CREATED, Json(attendance)))
}

pub async fn list_attendances(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Attendance>>, ApiError> {
    // 404 for an unknown patient rather than an empty list.
    records::get_patient(&state.data_dir, id).await?;
    let attendances = records::list_attendances_for_patient(&state.data_dir, id).await?;
    Ok(Json(attendances))
}
