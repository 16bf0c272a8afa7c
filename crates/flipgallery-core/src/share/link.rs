//! Text-link fallback: message text, deep links and channel URLs.

use url::{form_urlencoded, Url};

use crate::card::{Card, CardId};
use crate::error::{GalleryResult, ShareError};

/// Where an outbound link is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// New window or tab, leaving the gallery in place
    NewContext,
    /// Navigate the current context (mail handlers hand off and return)
    SameContext,
}

/// Opens outbound URLs in the hosting runtime
pub trait LinkOpener {
    fn open(&self, url: &Url, target: LinkTarget) -> Result<(), ShareError>;
}

/// Percent-encode a query component, spaces as `%20`.
///
/// Form encoding writes spaces as `+`, which mail clients show literally.
/// A literal `+` is already escaped to `%2B`, so swapping is safe.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// `page_url` with its fragment replaced by `#card-<index>`
pub fn deep_link(page_url: &Url, card: CardId) -> Url {
    let mut link = page_url.clone();
    link.set_fragment(Some(&card.fragment()));
    link
}

/// Plain-text share message: preamble, label, deep link
pub fn fallback_message(preamble: &str, card: &Card, link: &Url) -> String {
    format!("{}\n{}\n{}", preamble, card.label(), link)
}

/// Base of every mail link
pub const MAILTO_BASE: &str = "mailto:";

/// `<base>?<existing query>&text=<message>`; parameters already on the base are kept
pub fn chat_url(base: &Url, message: &str) -> Url {
    let mut url = base.clone();
    url.set_fragment(None);
    let text = format!("text={}", encode_component(message));
    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{}&{}", existing, text),
        _ => text,
    };
    url.set_query(Some(&query));
    url
}

/// Parse [`MAILTO_BASE`] once so building mail links cannot fail later
pub fn mail_base() -> GalleryResult<Url> {
    Ok(Url::parse(MAILTO_BASE)?)
}

/// `mailto:?subject=<subject>&body=<message>`
pub fn mail_url(base: &Url, subject: &str, message: &str) -> Url {
    let mut url = base.clone();
    url.set_query(Some(&format!(
        "subject={}&body={}",
        encode_component(subject),
        encode_component(message)
    )));
    url
}
