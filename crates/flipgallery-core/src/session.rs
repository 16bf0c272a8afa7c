//! Gate and gallery bound together for one app run.

use crate::card::{CardId, CardRegion};
use crate::config::GalleryConfig;
use crate::error::GalleryResult;
use crate::gallery::{Dispatch, Gallery};
use crate::gate::{Gate, UnlockResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub gate: Gate,
    pub gallery: Gallery,
    /// Card to pull out once interactions are wired (from a `#card-<n>` link)
    initial_card: Option<CardId>,
}

impl Session {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            gate: Gate::new(config.secret.clone()),
            gallery: Gallery::from_config(config),
            initial_card: None,
        }
    }

    /// Remember a deep-link fragment to open after unlock. Unknown cards are ignored.
    pub fn with_deep_link(mut self, fragment: &str) -> Self {
        self.initial_card = self.gallery.card_from_fragment(fragment);
        if self.initial_card.is_none() {
            tracing::warn!(fragment, "Deep link does not name a card, ignoring");
        }
        self
    }

    /// Try `candidate` against the gate and wire interactions on the first success.
    pub fn unlock(&mut self, candidate: &str) -> UnlockResult {
        let result = self.gate.attempt_unlock(candidate);
        self.after_attempt(&result);
        result
    }

    /// Submit the overlay form.
    pub fn submit(&mut self) -> UnlockResult {
        let result = self.gate.submit();
        self.after_attempt(&result);
        result
    }

    fn after_attempt(&mut self, result: &UnlockResult) {
        if let UnlockResult::Success { first_unlock: true } = result {
            self.wire();
        }
    }

    fn wire(&mut self) {
        if !self.gallery.attach_interactions() {
            return;
        }
        if let Some(id) = self.initial_card.take() {
            if let Err(e) = self.gallery.open_card(id) {
                tracing::warn!("Failed to open deep-linked card: {}", e);
            }
        }
    }

    pub fn dispatch(&mut self, id: CardId, region: CardRegion) -> GalleryResult<Dispatch> {
        self.gallery.dispatch(id, region)
    }
}
