//! # folio-remote
//!
//! The boundary between Folio and the remote folder authority. Defines the
//! [`FolderRepository`] persistence contract and its implementations: an
//! HTTP client for the document repository API and an in-process authority
//! used for offline work and tests.

pub mod connection;
pub mod repositories;

pub use connection::connect;
pub use repositories::{FolderRepository, HttpFolderRepository, MemoryFolderRepository};
