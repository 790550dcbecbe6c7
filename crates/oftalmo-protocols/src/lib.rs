//! oftalmo-protocols
//!
//! Ophthalmology screening protocols. Pure data and pure functions: maps a
//! patient's age and selected clinical findings to a risk score, the exams
//! to request, a justification, and the guidelines behind them.

pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod intake;

pub use catalog::{CatalogEntry, FindingRule, ProtocolCatalog, catalog};
pub use evaluate::{EvaluationResult, evaluate};
pub use intake::{Intake, other_exams};
