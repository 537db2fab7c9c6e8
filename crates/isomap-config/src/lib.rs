//! Render configuration for isomap.
//!
//! Holds the already-parsed world, map and overlay sections that the overlay
//! core consumes. Sections persist as RON files and are checked for internal
//! consistency by [`RenderConfig::validate`] before any rendering starts.

mod config;
mod error;

pub use config::{
    DebugConfig, Dimension, MapSection, OverlaySection, OverlayType, RenderConfig, TintStrategy,
    WorldSection,
};
pub use error::ConfigError;
