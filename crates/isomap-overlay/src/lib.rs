//! Per-pixel overlays drawn on top of rendered block images: lighting shade,
//! highlighted areas (slime chunks, mob spawn spots) and biome tint.
//!
//! Each block image of a tile passes through [`OverlayRenderMode::draw_overlay`]
//! for every active overlay. The overlay decides whether the whole block or
//! only its visible faces get a color, resolves that color from world data,
//! and writes it with the configured [`TintStrategy`].

mod error;
mod face;
mod factory;
mod mode;
pub mod overlays;
pub mod pixel;
mod tint;
mod tinting;

pub use error::OverlayError;
pub use face::{Face, Region, face_at};
pub use factory::{create_overlay, create_overlays};
pub use isomap_config::TintStrategy;
pub use mode::{OverlayKind, OverlayRenderMode};
pub use tint::{OverlayRenderer, apply_flat_tint, luminance_neutral_offset};
pub use tinting::{BlockColor, DrawContext, OverlayMode, TintingOverlay};
