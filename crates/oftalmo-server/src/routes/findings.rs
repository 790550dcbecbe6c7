use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use oftalmo_protocols::intake::{COMPLAINTS, GENERAL_EXAMS, HISTORY};
use oftalmo_protocols::{FindingRule, catalog};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct FindingDetail {
    name: String,
    #[serde(flatten)]
    rule: FindingRule,
}

#[derive(Serialize)]
pub struct IntakeLists {
    complaints: &'static [&'static str],
    history: &'static [&'static str],
    general_exams: &'static [&'static str],
}

/// Selectable finding names, sorted.
pub async fn list_findings() -> Json<Vec<&'static str>> {
    Json(catalog().all_finding_names())
}

pub async fn get_finding(Path(name): Path<String>) -> Result<Json<FindingDetail>, ApiError> {
    let rule = catalog()
        .lookup(&name)
        .ok_or_else(|| ApiError::NotFound(format!("finding not found: {name}")))?;

    Ok(Json(FindingDetail {
        name,
        rule: rule.clone(),
    }))
}

pub async fn intake_lists() -> Json<IntakeLists> {
    Json(IntakeLists {
        complaints: COMPLAINTS,
        history: HISTORY,
        general_exams: GENERAL_EXAMS,
    })
}
