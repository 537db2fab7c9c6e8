//! Configuration sections with sensible defaults and RON persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// World dimension. The End has no sky light data and is lit artificially.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Dimension {
    #[default]
    Overworld,
    Nether,
    End,
}

/// Closed set of overlay kinds the renderer knows how to build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OverlayType {
    /// Day or night lighting shade.
    Lighting,
    /// Chunks where slimes spawn.
    Slime,
    /// Positions where hostile mobs can spawn.
    Spawn,
    /// Smoothed biome color of biome-tinted blocks.
    Biome,
}

/// How an overlay color is written onto overlay pixels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TintStrategy {
    /// Overwrite pixels with the color.
    #[default]
    FlatFill,
    /// Add a luminance-neutral offset derived from the color.
    LuminanceOffset,
    /// Alpha-blend the color over the existing pixels.
    AlphaBlend,
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Top-level render configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// World sections by name.
    pub worlds: HashMap<String, WorldSection>,
    /// Maps in render order.
    pub maps: Vec<MapSection>,
    /// Overlay sections by name. Defaults to the built-in overlays.
    pub overlays: HashMap<String, OverlaySection>,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// A world to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldSection {
    /// Display name of the world.
    pub name: String,
    /// Directory the world data was loaded from.
    pub input_dir: PathBuf,
    /// Dimension the world data belongs to.
    pub dimension: Dimension,
    /// World generation seed, as read from the world's level data.
    pub seed: i64,
}

/// A map rendered from one world.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapSection {
    /// Map name.
    pub name: String,
    /// Name of the world section this map renders.
    pub world: String,
    /// Rotations to render (0-3, quarter turns).
    pub rotations: Vec<u8>,
    /// Block texture size in pixels. Block images are twice as large.
    pub texture_size: u32,
    /// Strength of lighting shade (0.0 - 1.0).
    pub lighting_intensity: f64,
    /// Strength of lighting shade on water (0.0 - 1.0).
    pub lighting_water_intensity: f64,
    /// Overlay names, in compositing order.
    pub overlays: Vec<String>,
}

/// One overlay definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlaySection {
    /// Identifier used in tile paths. Filled from the table key if empty.
    pub id: String,
    /// Display name. Filled from the id if empty.
    pub name: String,
    /// Overlay kind.
    pub overlay_type: OverlayType,
    /// Day variant for lighting and spawn overlays.
    pub day: bool,
    /// Pixel tint strategy.
    pub tint: TintStrategy,
    /// Alpha of highlight colors (slime, spawn, biome).
    pub opacity: u8,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            worlds: HashMap::new(),
            maps: Vec::new(),
            overlays: OverlaySection::builtin(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            name: String::new(),
            input_dir: PathBuf::new(),
            dimension: Dimension::Overworld,
            seed: 0,
        }
    }
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            name: String::new(),
            world: String::new(),
            rotations: vec![0],
            texture_size: 12,
            lighting_intensity: 1.0,
            lighting_water_intensity: 0.85,
            overlays: Vec::new(),
        }
    }
}

impl Default for OverlaySection {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            overlay_type: OverlayType::Lighting,
            day: true,
            tint: TintStrategy::FlatFill,
            opacity: 85,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl OverlaySection {
    /// Creates an overlay section with default parameters.
    pub fn new(id: &str, name: &str, overlay_type: OverlayType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            overlay_type,
            ..Self::default()
        }
    }

    /// Sets the day flag.
    pub fn with_day(mut self, day: bool) -> Self {
        self.day = day;
        self
    }

    /// The overlays available without any configuration.
    pub fn builtin() -> HashMap<String, OverlaySection> {
        [
            OverlaySection::new("day", "Day", OverlayType::Lighting),
            OverlaySection::new("night", "Night", OverlayType::Lighting).with_day(false),
            OverlaySection::new("slime", "Slime chunks", OverlayType::Slime),
            OverlaySection::new("spawnday", "Spawnable blocks (day)", OverlayType::Spawn),
            OverlaySection::new("spawnnight", "Spawnable blocks (night)", OverlayType::Spawn)
                .with_day(false),
            OverlaySection::new("biome", "Biomes", OverlayType::Biome),
        ]
        .into_iter()
        .map(|section| (section.id.clone(), section))
        .collect()
    }
}

// --- Load / Save / Validate ---

impl RenderConfig {
    /// Parses a config from RON text and fills in missing overlay ids and names.
    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: RenderConfig = ron::from_str(contents).map_err(ConfigError::ParseError)?;
        config.fill_overlay_ids();
        Ok(config)
    }

    /// Loads a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config = Self::from_ron_str(&contents)?;
        log::info!("Loaded render config from {}", path.display());
        Ok(config)
    }

    /// Writes the config as pretty RON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Checks that every map references a known world, valid rotations, a usable
    /// texture size and overlay names that have sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for map in &self.maps {
            if !self.worlds.contains_key(&map.world) {
                return Err(ConfigError::UnknownWorld {
                    map: map.name.clone(),
                    world: map.world.clone(),
                });
            }
            if let Some(&rotation) = map.rotations.iter().find(|&&r| r > 3) {
                return Err(ConfigError::InvalidRotation {
                    map: map.name.clone(),
                    rotation,
                });
            }
            if map.texture_size == 0 || map.texture_size % 2 != 0 {
                return Err(ConfigError::InvalidTextureSize {
                    map: map.name.clone(),
                    size: map.texture_size,
                });
            }
            if let Some(overlay) = map
                .overlays
                .iter()
                .find(|name| !self.overlays.contains_key(*name))
            {
                return Err(ConfigError::MissingOverlaySection {
                    map: map.name.clone(),
                    overlay: overlay.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns the world section a map renders, if present.
    pub fn world_of(&self, map: &MapSection) -> Option<&WorldSection> {
        self.worlds.get(&map.world)
    }

    fn fill_overlay_ids(&mut self) {
        for (key, section) in self.overlays.iter_mut() {
            if section.id.is_empty() {
                section.id = key.clone();
            }
            if section.name.is_empty() {
                section.name = section.id.clone();
            }
        }
    }
}
