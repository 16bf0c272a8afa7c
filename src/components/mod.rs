//! UI Components for Flip Gallery.

mod card_face;
mod flip_card;
mod gallery_view;
mod password_overlay;
mod share_controls;

pub use card_face::CardFace;
pub use flip_card::FlipCard;
pub use gallery_view::GalleryView;
pub use password_overlay::PasswordOverlay;
pub use share_controls::ShareControls;
