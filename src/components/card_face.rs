//! Card Face
//!
//! Loads one card image from the asset directory and shows it as a data URI.

use base64::Engine;
use dioxus::prelude::*;
use flipgallery_core::share::asset::content_type_for;
use flipgallery_core::{AssetRef, AssetSource};

use crate::context::asset_source;

#[component]
pub fn CardFace(
    /// Image to load
    asset: AssetRef,
    /// Image description
    alt: String,
) -> Element {
    let mut image_data = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    // Load image on mount
    use_effect(move || {
        let asset = asset.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);

            match asset_source().fetch(&asset).await {
                Ok(data) => {
                    let encoded = base64::engine::general_purpose::STANDARD.encode(&data);
                    let mime = content_type_for(asset.file_name());
                    image_data.set(Some(format!("data:{};base64,{}", mime, encoded)));
                }
                Err(e) => {
                    tracing::debug!("Card image unavailable: {}", e);
                    error.set(Some(asset.uri().to_string()));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        if loading() {
            div { class: "card-face__loading", "Loading..." }
        } else if let Some(uri) = error() {
            div { class: "card-face__missing", title: "{uri}", "{alt}" }
        } else if let Some(src) = image_data() {
            img { class: "card-face__img", src: "{src}", alt: "{alt}", draggable: false }
        }
    }
}
