//! Leaf item references.

pub mod model;

pub use model::LeafItem;
