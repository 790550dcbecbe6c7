//! oftalmo-storage
//!
//! JSON records on the local filesystem. One file per object, addressed by
//! the keys in `oftalmo_core::keys`.

pub mod error;
pub mod objects;
pub mod records;
pub mod state;
