//! Core type definitions used across the Folio workspace.

pub mod id;
pub mod sorting;

pub use id::*;
pub use sorting::{NameOrder, SortDirection};
