use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use oftalmo_core::models::attendance::ReferenceLink;

use crate::catalog::{ProtocolCatalog, catalog};
use crate::error::ProtocolError;

/// Patients older than this get [`SENIOR_BASELINE`] added to their score.
pub const SENIOR_AGE: i32 = 60;

pub const SENIOR_BASELINE: u32 = 2;

/// Upper bound on the reported score.
pub const MAX_SCORE: u32 = 10;

/// Recommendation bundle derived from an age and a set of findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationResult {
    /// Risk score in `0..=10`.
    pub score: u8,
    /// Unique exam names, sorted.
    pub exams: Vec<String>,
    pub justification: String,
    /// Unique bibliography labels, sorted.
    pub bibliography: Vec<String>,
    /// One link per matched finding, in selection order. Not de-duplicated.
    pub reference_links: Vec<ReferenceLink>,
}

/// Score baseline contributed by age alone.
pub fn age_baseline(age: i32) -> u32 {
    if age > SENIOR_AGE { SENIOR_BASELINE } else { 0 }
}

/// Evaluate `findings` against the built-in catalog.
pub fn evaluate<I, S>(age: i32, findings: I) -> Result<EvaluationResult, ProtocolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    catalog().evaluate(age, findings)
}

impl ProtocolCatalog {
    /// Evaluate `findings` against this catalog.
    ///
    /// Findings the catalog does not know are skipped, so selections stored
    /// under older catalogs still evaluate.
    pub fn evaluate<I, S>(&self, age: i32, findings: I) -> Result<EvaluationResult, ProtocolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if age < 0 {
            return Err(ProtocolError::InvalidAge(age));
        }

        let mut running_score = age_baseline(age);
        let mut exams = BTreeSet::new();
        let mut bibliography = BTreeSet::new();
        let mut justification_parts = Vec::new();
        let mut reference_links = Vec::new();

        for finding in findings {
            let finding = finding.as_ref();
            let Some(rule) = self.lookup(finding) else {
                tracing::debug!(finding, "skipping unknown finding");
                continue;
            };

            exams.extend(rule.exams.iter().cloned());
            bibliography.insert(rule.bibliography_source.clone());
            justification_parts.push(rule.justification.as_str());
            reference_links.push(ReferenceLink {
                label: rule.bibliography_source.clone(),
                uri: rule.reference_link.clone(),
            });
            running_score = running_score.saturating_add(rule.weight);
        }

        let score = running_score.min(MAX_SCORE) as u8;

        Ok(EvaluationResult {
            score,
            exams: exams.into_iter().collect(),
            justification: justification_parts.join(" ").trim().to_string(),
            bibliography: bibliography.into_iter().collect(),
            reference_links,
        })
    }
}
