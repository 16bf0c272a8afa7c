//! Card types and the per-card pull/flip cycle.

use std::fmt;

use crate::config::ASSET_NUMBER_PLACEHOLDER;

/// Stable 1-based global card index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl CardId {
    pub fn index(self) -> u32 {
        self.0
    }

    /// Image number of the front face
    pub fn front_number(self) -> u32 {
        self.0.saturating_mul(2).saturating_sub(1)
    }

    /// Image number of the back face
    pub fn back_number(self) -> u32 {
        self.0.saturating_mul(2)
    }

    /// Fragment used in deep links, without the leading `#`
    pub fn fragment(self) -> String {
        format!("card-{}", self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque retrievable image reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Expand an asset pattern for image number `n`
    pub fn numbered(pattern: &str, n: u32) -> Self {
        Self(pattern.replace(ASSET_NUMBER_PLACEHOLDER, &n.to_string()))
    }

    pub fn uri(&self) -> &str {
        &self.0
    }

    /// Last path segment, used as the shared file name
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Interaction state of one card.
///
/// `Flipped` is only reachable through `Pulled`, so a flipped card is always
/// pulled as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Stacked,
    Pulled,
    Flipped,
}

impl CardState {
    pub fn is_pulled(self) -> bool {
        matches!(self, CardState::Pulled | CardState::Flipped)
    }

    pub fn is_flipped(self) -> bool {
        matches!(self, CardState::Flipped)
    }

    /// State after a body click, ignoring other cards
    pub fn next(self) -> Self {
        match self {
            CardState::Stacked => CardState::Pulled,
            CardState::Pulled => CardState::Flipped,
            CardState::Flipped => CardState::Stacked,
        }
    }
}

/// Outbound channel picked on a card's share control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareChannel {
    Chat,
    Email,
}

impl fmt::Display for ShareChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareChannel::Chat => f.write_str("chat"),
            ShareChannel::Email => f.write_str("email"),
        }
    }
}

/// Part of a card that received a click.
///
/// Share controls consume their clicks; only `Body` drives the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRegion {
    Body,
    Share(ShareChannel),
}

/// A single flippable card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub column: String,
    /// 1-based position inside its column
    pub position: u32,
    pub front: AssetRef,
    pub back: AssetRef,
    pub state: CardState,
}

impl Card {
    pub fn new(id: CardId, column: &str, position: u32, asset_pattern: &str) -> Self {
        Self {
            id,
            column: column.to_string(),
            position,
            front: AssetRef::numbered(asset_pattern, id.front_number()),
            back: AssetRef::numbered(asset_pattern, id.back_number()),
            state: CardState::Stacked,
        }
    }

    pub fn front_description(&self) -> String {
        format!("{} {} Front", self.column, self.position)
    }

    pub fn back_description(&self) -> String {
        format!("{} {} Back", self.column, self.position)
    }

    /// Display label: the front description without its "Front" suffix
    pub fn label(&self) -> String {
        strip_front_suffix(&self.front_description()).to_string()
    }

    /// DOM-style element id, doubling as the deep-link fragment
    pub fn element_id(&self) -> String {
        self.id.fragment()
    }

    pub fn is_pulled(&self) -> bool {
        self.state.is_pulled()
    }

    pub fn is_flipped(&self) -> bool {
        self.state.is_flipped()
    }

    pub(crate) fn reset(&mut self) {
        self.state = CardState::Stacked;
    }
}

/// Strip a trailing "Front" word and the whitespace before it
pub fn strip_front_suffix(description: &str) -> &str {
    match description.strip_suffix("Front") {
        Some(rest) => rest.trim_end(),
        None => description,
    }
}
