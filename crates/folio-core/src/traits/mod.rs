//! Core traits defined in `folio-core` and implemented by other crates.

pub mod confirmation;

pub use confirmation::{AutoConfirm, Confirmation};
