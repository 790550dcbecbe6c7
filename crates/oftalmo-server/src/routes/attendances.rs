use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use uuid::Uuid;

use oftalmo_core::models::attendance::Attendance;
use oftalmo_export::render::{ReportContext, render_report};
use oftalmo_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Attendance>, ApiError> {
    let attendance = records::get_attendance(&state.data_dir, id).await?;
    Ok(Json(attendance))
}

/// Printable HTML report for one attendance.
pub async fn print_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
    let attendance = records::get_attendance(&state.data_dir, id).await?;
    let patient = records::get_patient(&state.data_dir, attendance.patient_id).await?;

    let report = ReportContext::new(&patient, &attendance, &state.tz);
    Ok(Html(render_report(&report)?))
}
