//! Gallery View
//!
//! Main content: one column per roster entry, each a stack of flip cards.

use dioxus::prelude::*;
use flipgallery_core::Card;

use crate::components::FlipCard;
use crate::context::use_session;

#[component]
pub fn GalleryView() -> Element {
    let session = use_session();

    let (unlocked, columns) = {
        let s = session.read();
        let columns: Vec<(String, Vec<Card>)> = s
            .gallery
            .columns()
            .iter()
            .map(|column| {
                let cards = s.gallery.cards_in(column).cloned().collect();
                (column.name.clone(), cards)
            })
            .collect();
        (s.gate.is_unlocked(), columns)
    };

    let class = if unlocked {
        "main-content"
    } else {
        "main-content main-content--hidden"
    };

    rsx! {
        main { id: "main-content", class: "{class}",
            div { class: "gallery-grid",
                for (name, cards) in columns {
                    GalleryColumn { key: "{name}", name: name.clone(), cards: cards }
                }
            }
        }
    }
}

/// A named column mounting its cards in order
#[component]
pub fn GalleryColumn(
    /// Column name from the roster
    name: String,
    /// Cards of this column, top of the stack first
    cards: Vec<Card>,
) -> Element {
    rsx! {
        section { class: "gallery-column",
            h3 { class: "gallery-column__title", "{name}" }
            div { class: "card-stack",
                for card in cards {
                    FlipCard { key: "{card.id}", card: card.clone() }
                }
            }
        }
    }
}
