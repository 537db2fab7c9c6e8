//! Configuration error types.

/// Errors that can occur when loading, saving, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// A map lists an overlay that has no overlay section.
    #[error("map '{map}' references unknown overlay '{overlay}'")]
    MissingOverlaySection { map: String, overlay: String },

    /// A map references a world that has no world section.
    #[error("map '{map}' references unknown world '{world}'")]
    UnknownWorld { map: String, world: String },

    /// A rotation index outside `0..4`.
    #[error("map '{map}' has invalid rotation {rotation} (expected 0-3)")]
    InvalidRotation { map: String, rotation: u8 },

    /// Block texture size that is zero or odd.
    #[error("map '{map}' has invalid texture size {size} (expected a positive even number)")]
    InvalidTextureSize { map: String, size: u32 },
}
