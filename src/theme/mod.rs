//! Visual theme for Flip Gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
