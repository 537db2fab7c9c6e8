//! Overlay setup errors.

/// Errors raised while assembling the overlays of a map.
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    /// The map lists an overlay name with no configuration section.
    #[error("unknown overlay '{name}': no overlay section with that name")]
    UnknownOverlay { name: String },
}
