//! Destination folder picking for filing an item.

pub mod destination;

pub use destination::{DestinationPicker, DestinationResolver};
