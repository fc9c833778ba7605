//! Translucency material catalog and draggable card placement.

use uuid::Uuid;

use super::Channels;

/// The five ordered translucency levels, thinnest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MaterialLevel {
    /// Barely-there wash
    UltraThin,
    /// Light frosting
    Thin,
    /// The default material
    Regular,
    /// Heavy frosting
    Thick,
    /// Nearly opaque
    UltraThick,
}

impl MaterialLevel {
    /// All levels in catalog order.
    pub const ALL: [Self; 5] = [
        Self::UltraThin,
        Self::Thin,
        Self::Regular,
        Self::Thick,
        Self::UltraThick,
    ];

    /// Display name of the level.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::UltraThin => "Ultra Thin Material",
            Self::Thin => "Thin Material",
            Self::Regular => "Regular Material",
            Self::Thick => "Thick Material",
            Self::UltraThick => "Ultra Thick Material",
        }
    }

    /// Fill opacity used when compositing the card over the backdrop.
    ///
    /// Strictly increasing with thickness.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        match self {
            Self::UltraThin => 0.20,
            Self::Thin => 0.35,
            Self::Regular => 0.50,
            Self::Thick => 0.65,
            Self::UltraThick => 0.80,
        }
    }
}

/// A card's placement on the board, in cell coordinates relative to the
/// board origin. Only meaningful for drag placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardPosition {
    /// Column offset from the board's left edge
    pub x: u16,
    /// Row offset from the board's top edge
    pub y: u16,
}

impl CardPosition {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A named material card in the fixed catalog.
///
/// Everything except `position` is immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialEntry {
    /// Stable unique identity
    pub id: Uuid,
    /// Translucency level
    pub level: MaterialLevel,
    /// Display name
    pub name: String,
    /// Current drag placement
    pub position: CardPosition,
}

/// The fixed five-card material board.
///
/// Cards are never added or removed; only positions change, via
/// [`MaterialBoard::move_card`].
#[derive(Debug, Clone)]
pub struct MaterialBoard {
    cards: Vec<MaterialEntry>,
}

/// Card footprint in cells, used for layout and hit-testing.
pub const CARD_WIDTH: u16 = 24;
/// Card footprint in cells, used for layout and hit-testing.
pub const CARD_HEIGHT: u16 = 5;

/// Cell gap between cards in the default grid placement.
const CARD_GUTTER: u16 = 2;

impl MaterialBoard {
    /// Builds the board with one card per level, laid out as a grid of
    /// `columns` cards per row.
    #[must_use]
    pub fn new(columns: u16) -> Self {
        let columns = columns.max(1);
        let cards = MaterialLevel::ALL
            .iter()
            .enumerate()
            .map(|(i, &level)| {
                let i = i as u16;
                let col = i % columns;
                let row = i / columns;
                MaterialEntry {
                    id: Uuid::new_v4(),
                    level,
                    name: level.display_name().to_string(),
                    position: CardPosition::new(
                        col * (CARD_WIDTH + CARD_GUTTER) + 1,
                        row * (CARD_HEIGHT + 1) + 1,
                    ),
                }
            })
            .collect();
        Self { cards }
    }

    /// Read-only view of all cards in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[MaterialEntry] {
        &self.cards
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Index of the topmost card covering the given board-relative point.
    ///
    /// Later catalog entries draw on top, so the search runs back to front.
    #[must_use]
    pub fn card_at(&self, x: u16, y: u16) -> Option<usize> {
        self.cards.iter().enumerate().rev().find_map(|(i, card)| {
            let hit = x >= card.position.x
                && x < card.position.x + CARD_WIDTH
                && y >= card.position.y
                && y < card.position.y + CARD_HEIGHT;
            hit.then_some(i)
        })
    }

    /// Moves one card to a new position. All other cards are untouched.
    pub fn move_card(&mut self, index: usize, position: CardPosition) {
        if let Some(card) = self.cards.get_mut(index) {
            card.position = position;
        }
    }

    /// The translucent fill of a card composited over an opaque background
    /// sample, with the given tint.
    #[must_use]
    pub fn composite_fill(level: MaterialLevel, tint: Channels, background: Channels) -> Channels {
        tint.with_alpha(level.opacity()).over(background)
    }
}

impl Default for MaterialBoard {
    fn default() -> Self {
        Self::new(2)
    }
}
