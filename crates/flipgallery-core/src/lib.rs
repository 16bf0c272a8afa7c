//! Flip Gallery Core Library
//!
//! Interaction logic for a password-gated gallery of flip cards.
//!
//! ## Overview
//!
//! - **Gate**: exact-match password check that unlocks the gallery once
//! - **Gallery**: columns of cards cycling stacked → pulled → flipped, with
//!   at most one card out of its stack
//! - **Share**: native file sharing when the runtime supports it, otherwise
//!   a chat or mail deep link back to the card
//!
//! ## Quick Start
//!
//! ```ignore
//! use flipgallery_core::{CardId, CardRegion, GalleryConfig, Session};
//!
//! let config = GalleryConfig::default();
//! let mut session = Session::new(&config);
//!
//! session.unlock("123");
//! session.dispatch(CardId(1), CardRegion::Body)?; // pulled
//! session.dispatch(CardId(1), CardRegion::Body)?; // flipped
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod gallery;
pub mod gate;
pub mod logging;
pub mod session;
pub mod share;

// Re-exports
pub use card::{AssetRef, Card, CardId, CardRegion, CardState, ShareChannel};
pub use config::{GalleryConfig, NativeShareMode, ShareAssetPolicy, ShareConfig};
pub use error::{GalleryError, GalleryResult, ShareError};
pub use gallery::{Column, Dispatch, Gallery, ShareRequest};
pub use gate::{Gate, GateState, UnlockResult, INCORRECT_PASSWORD_MESSAGE};
pub use session::Session;
pub use share::{
    AssetSource, FsAssetSource, LinkOpener, LinkTarget, NativeShare, NoNativeShare,
    ShareCoordinator, ShareOutcome, SharePayload, SharedFile,
};
