//! oftalmo-export
//!
//! Printable attendance report, rendered to HTML from an embedded Tera
//! template.

pub mod error;
pub mod render;
