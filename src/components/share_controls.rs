//! Share Controls
//!
//! Chat and email buttons under a card. Their clicks are consumed here and
//! routed to the share coordinator.

use dioxus::prelude::*;
use flipgallery_core::{Card, CardRegion, Dispatch, Session, ShareChannel, ShareOutcome};

use crate::context::use_session;

fn start_share(mut session: Signal<Session>, card: &Card, channel: ShareChannel) {
    let request = match session.write().dispatch(card.id, CardRegion::Share(channel)) {
        Ok(Dispatch::Share(request)) => request,
        Ok(_) => return,
        Err(e) => {
            tracing::warn!("Share click failed: {}", e);
            return;
        }
    };

    let Some(coordinator) = crate::get_coordinator() else {
        tracing::error!("Share coordinator not initialized");
        return;
    };

    let card = card.clone();
    spawn(async move {
        match coordinator.share(&card, request.channel).await {
            ShareOutcome::Failed(reason) => {
                tracing::warn!(card = %card.id, "Share did not complete: {}", reason);
            }
            outcome => {
                tracing::debug!(card = %card.id, ?outcome, "Share finished");
            }
        }
    });
}

#[component]
pub fn ShareControls(card: Card) -> Element {
    let session = use_session();
    let chat_card = card.clone();
    let email_card = card.clone();

    rsx! {
        div {
            class: "share-controls",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),

            button {
                class: "share-btn share-btn--chat",
                title: "Share via chat",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    start_share(session, &chat_card, ShareChannel::Chat);
                },
                "Chat"
            }
            button {
                class: "share-btn share-btn--email",
                title: "Share via email",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    start_share(session, &email_card, ShareChannel::Email);
                },
                "Email"
            }
        }
    }
}
