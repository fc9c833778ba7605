//! Color channel handling with hex and RGBA string derivation.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

/// Namespace token prefixed to lower-cased color names when producing a
/// copyable source identifier (e.g. `Color.blue`).
pub const SOURCE_NAMESPACE: &str = "Color.";

/// Normalized RGBA color components.
///
/// Each channel is a float in [0, 1]. This is the value type the derived
/// representations (hex string, RGBA string) are computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channels {
    /// Red component (0.0-1.0)
    pub red: f32,
    /// Green component (0.0-1.0)
    pub green: f32,
    /// Blue component (0.0-1.0)
    pub blue: f32,
    /// Alpha component (0.0-1.0)
    pub alpha: f32,
}

impl Channels {
    /// Creates channels from raw floats, clamping each into [0, 1].
    #[must_use]
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Creates fully opaque channels from 8-bit RGB values.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::models::Channels;
    ///
    /// let blue = Channels::from_rgb8(0, 122, 255);
    /// assert_eq!(blue.hex(), "#007AFF");
    /// ```
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            red: f32::from(r) / 255.0,
            green: f32::from(g) / 255.0,
            blue: f32::from(b) / 255.0,
            alpha: 1.0,
        }
    }

    /// Converts one normalized channel to an 8-bit value.
    ///
    /// Rounds to the nearest integer and clamps to [0, 255].
    #[must_use]
    pub fn to_byte(channel: f32) -> u8 {
        (channel * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// Formats the color as an uppercase `#RRGGBB` hex string.
    ///
    /// Alpha is dropped; each channel is `round(c * 255)` clamped to [0, 255].
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::models::Channels;
    ///
    /// let blue = Channels::new(0.0, 0.478, 1.0, 1.0);
    /// assert_eq!(blue.hex(), "#007AFF");
    /// ```
    #[must_use]
    pub fn hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            Self::to_byte(self.red),
            Self::to_byte(self.green),
            Self::to_byte(self.blue)
        )
    }

    /// Formats the four channels with exactly two decimal digits each,
    /// ordered red, green, blue, alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::models::Channels;
    ///
    /// let blue = Channels::new(0.0, 0.478, 1.0, 1.0);
    /// assert_eq!(blue.rgba_string(), "0.00, 0.48, 1.00, 1.00");
    /// ```
    #[must_use]
    pub fn rgba_string(&self) -> String {
        format!(
            "{:.2}, {:.2}, {:.2}, {:.2}",
            self.red, self.green, self.blue, self.alpha
        )
    }

    /// Source-over composite of `self` onto an opaque background color.
    ///
    /// Used to render translucent material fills against the backdrop.
    #[must_use]
    pub fn over(&self, background: Self) -> Self {
        let a = self.alpha;
        Self {
            red: self.red * a + background.red * (1.0 - a),
            green: self.green * a + background.green * (1.0 - a),
            blue: self.blue * a + background.blue * (1.0 - a),
            alpha: 1.0,
        }
    }

    /// Linear interpolation between two colors, `t` clamped to [0, 1].
    #[must_use]
    pub fn lerp(&self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            red: self.red + (other.red - self.red) * t,
            green: self.green + (other.green - self.green) * t,
            blue: self.blue + (other.blue - self.blue) * t,
            alpha: self.alpha + (other.alpha - self.alpha) * t,
        }
    }

    /// Returns a copy with the given alpha, clamped to [0, 1].
    #[must_use]
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Converts to a Ratatui color for terminal rendering. Alpha is ignored;
    /// composite with [`Channels::over`] first if translucency matters.
    #[must_use]
    pub fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(
            Self::to_byte(self.red),
            Self::to_byte(self.green),
            Self::to_byte(self.blue),
        )
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// A host-theme-dependent color identity with no fixed channel values.
///
/// The terminal environment cannot resolve these to concrete components;
/// derivation falls back to the defaulting policy in [`ColorValue::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticRole {
    /// Foreground content color of the active theme
    Primary,
    /// Secondary label color of the active theme
    Secondary,
    /// Accent/tint color of the active theme
    Accent,
}

/// The color value carried by a catalog entry: either fixed channels or a
/// semantic role that needs resolution against the host theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    /// Concrete normalized channels
    Fixed(Channels),
    /// Theme-dependent color with no fixed channels
    Semantic(SemanticRole),
}

impl ColorValue {
    /// Attempts to resolve raw channel components.
    ///
    /// Returns `None` for semantic colors: the terminal has no fixed RGBA for
    /// them until a theme is applied, and themed values are not part of the
    /// derived representations.
    #[must_use]
    pub const fn components(&self) -> Option<Channels> {
        match self {
            Self::Fixed(channels) => Some(*channels),
            Self::Semantic(_) => None,
        }
    }

    /// Resolves to concrete channels, defaulting missing components.
    ///
    /// When [`ColorValue::components`] cannot produce channels, each color
    /// channel defaults to 0 and alpha defaults to 1. This keeps hex and RGBA
    /// output deterministic for semantic entries.
    #[must_use]
    pub fn resolve(&self) -> Channels {
        self.components().unwrap_or(Channels {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            alpha: 1.0,
        })
    }
}

/// The derived string representations a color can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedKind {
    /// `#RRGGBB` hex string
    Hex,
    /// Comma-separated normalized RGBA string
    Rgba,
    /// `Color.<name>` source identifier
    SourceIdentifier,
}

/// A named color in the fixed catalog.
///
/// Immutable after construction; identity is stable for the lifetime of the
/// catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// Stable unique identity
    pub id: Uuid,
    /// Display name (e.g. "Blue")
    pub name: String,
    /// The color value
    pub value: ColorValue,
}

impl ColorEntry {
    /// Creates a new catalog entry with a fresh identity.
    #[must_use]
    pub fn new(name: impl Into<String>, value: ColorValue) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            value,
        }
    }

    /// The copyable source identifier: lower-cased display name behind the
    /// fixed namespace token.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::models::{Channels, ColorEntry, ColorValue};
    ///
    /// let red = ColorEntry::new("Red", ColorValue::Fixed(Channels::from_rgb8(255, 59, 48)));
    /// assert_eq!(red.source_identifier(), "Color.red");
    /// ```
    #[must_use]
    pub fn source_identifier(&self) -> String {
        format!("{SOURCE_NAMESPACE}{}", self.name.to_lowercase())
    }

    /// The derived string of the requested kind.
    #[must_use]
    pub fn derived_string(&self, kind: DerivedKind) -> String {
        match kind {
            DerivedKind::Hex => self.value.resolve().hex(),
            DerivedKind::Rgba => self.value.resolve().rgba_string(),
            DerivedKind::SourceIdentifier => self.source_identifier(),
        }
    }
}
