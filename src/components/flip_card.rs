//! Flip Card
//!
//! One card of the gallery. Clicking the body steps it through
//! stacked → pulled → flipped → stacked; the share controls sit in their
//! own region and never step the card.

use dioxus::prelude::*;
use flipgallery_core::{Card, CardRegion};

use crate::components::{CardFace, ShareControls};
use crate::context::use_session;

#[component]
pub fn FlipCard(card: Card) -> Element {
    let mut session = use_session();
    let id = card.id;

    let container_class = if card.is_pulled() {
        "card-container is-pulled"
    } else {
        "card-container"
    };
    let inner_class = if card.is_flipped() {
        "card-inner is-flipped"
    } else {
        "card-inner"
    };

    rsx! {
        div {
            id: "{card.element_id()}",
            class: "{container_class}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if let Err(e) = session.write().dispatch(id, CardRegion::Body) {
                    tracing::warn!("Card click failed: {}", e);
                }
            },

            div { class: "{inner_class}",
                div { class: "card-face card-face--front",
                    CardFace { asset: card.front.clone(), alt: card.front_description() }
                }
                div { class: "card-face card-face--back",
                    CardFace { asset: card.back.clone(), alt: card.back_description() }
                }
            }

            ShareControls { card: card.clone() }
        }
    }
}
