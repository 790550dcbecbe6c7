//! oftalmo-core
//!
//! Pure domain types, age calculation, and record key conventions.
//! No I/O: this is the shared vocabulary of the OftalmoPrev system.

pub mod age;
pub mod error;
pub mod keys;
pub mod models;
