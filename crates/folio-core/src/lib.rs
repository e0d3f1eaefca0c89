//! # folio-core
//!
//! Core crate for Folio. Contains the unified error system, configuration
//! schemas, typed identifiers, presentation sorting types, and the traits
//! that the other crates implement.
//!
//! This crate has **no** internal dependencies on other Folio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
