//! The fixed color catalog shown in the palette grid.
//!
//! The 18 system colors are embedded as JSON and loaded once at startup.
//! Entries are never created, destroyed, or reordered at runtime.

use anyhow::{Context, Result};
use serde::Deserialize;
use uuid::Uuid;

use super::{Channels, ColorEntry, ColorValue, SemanticRole};

/// On-disk form of one catalog entry.
///
/// Fixed colors carry an 8-bit `rgb` triple; semantic colors carry a `role`
/// tag instead. Exactly one of the two must be present.
#[derive(Debug, Clone, Deserialize)]
struct RawColor {
    name: String,
    rgb: Option<[u8; 3]>,
    role: Option<SemanticRole>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawCatalog {
    colors: Vec<RawColor>,
}

/// The fixed, ordered catalog of named colors.
#[derive(Debug, Clone)]
pub struct Catalog {
    colors: Vec<ColorEntry>,
}

impl Catalog {
    /// Loads the catalog from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the embedded data is malformed — a packaging
    /// defect, not a runtime condition.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/catalog.json");
        let raw: RawCatalog =
            serde_json::from_str(json_data).context("Failed to parse embedded color catalog")?;

        let mut colors = Vec::with_capacity(raw.colors.len());
        for entry in raw.colors {
            let value = match (entry.rgb, entry.role) {
                (Some([r, g, b]), None) => ColorValue::Fixed(Channels::from_rgb8(r, g, b)),
                (None, Some(role)) => ColorValue::Semantic(role),
                _ => anyhow::bail!(
                    "Catalog entry '{}' must have exactly one of rgb/role",
                    entry.name
                ),
            };
            colors.push(ColorEntry::new(entry.name, value));
        }

        if colors.is_empty() {
            anyhow::bail!("Color catalog is empty");
        }

        Ok(Self { colors })
    }

    /// Read-only view of all entries in display order.
    #[must_use]
    pub fn colors(&self) -> &[ColorEntry] {
        &self.colors
    }

    /// Get an entry by index.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<&ColorEntry> {
        self.colors.get(index)
    }

    /// Get an entry by identity.
    #[must_use]
    pub fn color_by_id(&self, id: Uuid) -> Option<&ColorEntry> {
        self.colors.iter().find(|c| c.id == id)
    }

    /// Index of an entry by identity.
    #[must_use]
    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.colors.iter().position(|c| c.id == id)
    }

    /// Number of entries.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Number of grid columns for display.
    #[must_use]
    pub const fn columns(&self) -> usize {
        4
    }

    /// Number of grid rows for display.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.colors.len().div_ceil(self.columns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DerivedKind;

    #[test]
    fn test_load_catalog() {
        let catalog = Catalog::load().expect("Failed to load catalog");
        assert_eq!(catalog.color_count(), 18);
    }

    #[test]
    fn test_catalog_order_and_values() {
        let catalog = Catalog::load().expect("Failed to load catalog");

        let blue = catalog.color_at(0).expect("Blue should exist");
        assert_eq!(blue.name, "Blue");
        assert_eq!(blue.derived_string(DerivedKind::Hex), "#007AFF");

        let red = catalog.color_at(3).expect("Red should exist");
        assert_eq!(red.name, "Red");
        assert_eq!(red.source_identifier(), "Color.red");

        // The last three entries are the semantic colors
        let names: Vec<_> = catalog.colors()[15..]
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Primary", "Secondary", "Accent"]);
    }

    #[test]
    fn test_semantic_entries_have_no_components() {
        let catalog = Catalog::load().expect("Failed to load catalog");
        for entry in &catalog.colors()[15..] {
            assert!(entry.value.components().is_none(), "{}", entry.name);
            assert_eq!(entry.derived_string(DerivedKind::Hex), "#000000");
        }
    }

    #[test]
    fn test_ids_unique() {
        let catalog = Catalog::load().expect("Failed to load catalog");
        for (i, a) in catalog.colors().iter().enumerate() {
            for b in &catalog.colors()[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_lookup_by_id_roundtrip() {
        let catalog = Catalog::load().expect("Failed to load catalog");
        let teal = catalog.color_at(14).unwrap();
        assert_eq!(catalog.color_by_id(teal.id).unwrap().name, "Teal");
        assert_eq!(catalog.index_of(teal.id), Some(14));
    }

    #[test]
    fn test_grid_layout() {
        let catalog = Catalog::load().expect("Failed to load catalog");
        assert_eq!(catalog.columns(), 4);
        assert_eq!(catalog.rows(), 5); // 18 colors in 4 columns
    }
}
