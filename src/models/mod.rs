//! Data models for the color and material catalogs.
//!
//! This module contains the core data structures used throughout the
//! application. Models are designed to be independent of UI and business
//! logic.

pub mod catalog;
pub mod color;
pub mod material;

// Re-export all model types
pub use catalog::Catalog;
pub use color::{Channels, ColorEntry, ColorValue, DerivedKind, SemanticRole, SOURCE_NAMESPACE};
pub use material::{
    CardPosition, MaterialBoard, MaterialEntry, MaterialLevel, CARD_HEIGHT, CARD_WIDTH,
};
