//! # folio-entity
//!
//! Domain entities for Folio: the flat folder records exchanged with the
//! remote authority, the nested tree value built from them, and the pure
//! algorithms that search and edit that tree.

pub mod folder;
pub mod leaf;
