//! Gallery controller.
//!
//! Owns every card and enforces that at most one card is out of its stack
//! at a time. All transitions go through [`Gallery::dispatch`].

use crate::card::{Card, CardId, CardRegion, CardState, ShareChannel};
use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult};

/// A named column of cards
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cards: Vec<CardId>,
}

/// Request produced when a share control is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareRequest {
    pub card: CardId,
    pub channel: ShareChannel,
}

/// Result of routing a click to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Interactions are not wired yet, nothing happened
    Ignored,
    /// The card body was clicked and the card moved to this state
    Transitioned(CardState),
    /// A share control consumed the click
    Share(ShareRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    columns: Vec<Column>,
    cards: Vec<Card>,
    interactive: bool,
}

impl Gallery {
    /// Build cards for every column, numbering them contiguously in roster order.
    pub fn from_roster(roster: &[String], cards_per_column: u32, asset_pattern: &str) -> Self {
        let mut columns = Vec::with_capacity(roster.len());
        let mut cards = Vec::with_capacity(roster.len() * cards_per_column as usize);
        let mut next = 1;

        for name in roster {
            let mut ids = Vec::with_capacity(cards_per_column as usize);
            for position in 1..=cards_per_column {
                let id = CardId(next);
                next += 1;
                cards.push(Card::new(id, name, position, asset_pattern));
                ids.push(id);
            }
            columns.push(Column {
                name: name.clone(),
                cards: ids,
            });
        }

        tracing::debug!(columns = columns.len(), cards = cards.len(), "Gallery built");

        Self {
            columns,
            cards,
            interactive: false,
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::from_roster(&config.roster, config.cards_per_column, &config.asset_pattern)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        let slot = (id.0 as usize).checked_sub(1)?;
        self.cards.get(slot)
    }

    fn card_mut(&mut self, id: CardId) -> GalleryResult<&mut Card> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|slot| self.cards.get_mut(slot))
            .ok_or(GalleryError::UnknownCard(id.0))
    }

    pub fn cards_in<'a>(&'a self, column: &'a Column) -> impl Iterator<Item = &'a Card> + 'a {
        column.cards.iter().filter_map(move |id| self.card(*id))
    }

    /// Card currently out of the stack, if any
    pub fn open_card_id(&self) -> Option<CardId> {
        self.cards.iter().find(|c| c.is_pulled()).map(|c| c.id)
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Enable click handling. Returns false if already attached.
    pub fn attach_interactions(&mut self) -> bool {
        if self.interactive {
            return false;
        }
        self.interactive = true;
        tracing::info!(cards = self.cards.len(), "Card interactions attached");
        true
    }

    /// Return every card except `keep` to the stack, clearing pull and flip.
    pub fn close_all_except(&mut self, keep: CardId) {
        for card in self.cards.iter_mut().filter(|c| c.id != keep) {
            card.reset();
        }
    }

    /// Route a click on `region` of card `id`.
    pub fn dispatch(&mut self, id: CardId, region: CardRegion) -> GalleryResult<Dispatch> {
        if !self.interactive {
            return Ok(Dispatch::Ignored);
        }
        match region {
            CardRegion::Share(channel) => {
                // Existence check only; the card's state is left alone.
                self.card_mut(id)?;
                Ok(Dispatch::Share(ShareRequest { card: id, channel }))
            }
            CardRegion::Body => self.click(id).map(Dispatch::Transitioned),
        }
    }

    /// Advance card `id` one step through stacked → pulled → flipped → stacked.
    pub fn click(&mut self, id: CardId) -> GalleryResult<CardState> {
        let current = self.card_mut(id)?.state;
        if current == CardState::Stacked {
            self.close_all_except(id);
        }
        let card = self.card_mut(id)?;
        card.state = current.next();
        tracing::debug!(card = %id, from = ?current, to = ?card.state, "Card transition");
        Ok(card.state)
    }

    /// Pull card `id` out directly, closing any other open card.
    pub fn open_card(&mut self, id: CardId) -> GalleryResult<()> {
        self.card_mut(id)?;
        self.close_all_except(id);
        let card = self.card_mut(id)?;
        if card.state == CardState::Stacked {
            card.state = CardState::Pulled;
        }
        Ok(())
    }

    /// Resolve a deep-link fragment such as `#card-4` to a card of this gallery.
    pub fn card_from_fragment(&self, fragment: &str) -> Option<CardId> {
        let index = fragment
            .trim_start_matches('#')
            .strip_prefix("card-")?
            .parse::<u32>()
            .ok()?;
        self.card(CardId(index)).map(|c| c.id)
    }
}
