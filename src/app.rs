use dioxus::prelude::*;
use flipgallery_core::Session;

use crate::components::{GalleryView, PasswordOverlay};
use crate::context::get_settings;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the session, then renders the overlay on top
/// of the gallery. The gallery stays hidden until the gate unlocks.
#[component]
pub fn App() -> Element {
    let session: Signal<Session> = use_signal(|| {
        let settings = get_settings();
        let session = Session::new(&settings.config);
        match settings.deep_link.as_deref() {
            Some(fragment) => session.with_deep_link(fragment),
            None => session,
        }
    });

    use_context_provider(|| session);

    rsx! {
        style { {GLOBAL_STYLES} }
        PasswordOverlay {}
        GalleryView {}
    }
}
