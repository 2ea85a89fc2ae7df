//! Deterministic, toggle-driven card rendering
//!
//! Pure translation of (profile record, visibility toggles, milestone text)
//! into an ordered sequence of visual blocks. No I/O and no hidden state:
//! the same inputs always produce the same layout, which the SPA and the
//! rasterization service both consume as JSON.

mod blocks;
mod format;
mod render;
mod toggles;

pub use blocks::{CardBlock, CardLayout, WebsiteLink};
pub use render::{render_card, upgrade_avatar_url};
pub use toggles::CardToggles;
