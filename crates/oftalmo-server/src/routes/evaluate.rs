use axum::Json;
use serde::Deserialize;

use oftalmo_core::age;
use oftalmo_protocols::{EvaluationResult, evaluate};

use crate::error::ApiError;

/// Either an age or a `YYYY-MM-DD` birth date; the birth date wins when
/// both are given.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub findings: Vec<String>,
}

/// Stateless evaluation; nothing is persisted.
pub async fn evaluate_findings(
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluationResult>, ApiError> {
    let age = match (&req.birth_date, req.age) {
        (Some(birth_date), _) => age::age_from_str(birth_date.trim(), age::today())?,
        (None, Some(age)) => age,
        (None, None) => {
            return Err(ApiError::BadRequest(
                "either age or birth_date is required".to_string(),
            ));
        }
    };

    let result = evaluate(age, &req.findings)?;
    Ok(Json(result))
}
