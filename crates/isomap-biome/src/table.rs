//! The table of known biomes and block classification.

use crate::Biome;

/// Known biomes, indexed by id. Ids newer than this table fall back to
/// [`DEFAULT_BIOME`].
pub static BIOMES: [Biome; 23] = [
    Biome::new(0, 0.5, 0.5),   // Ocean
    Biome::new(1, 0.8, 0.4),   // Plains
    Biome::new(2, 2.0, 0.0),   // Desert
    Biome::new(3, 0.2, 0.3),   // Extreme Hills
    Biome::new(4, 0.7, 0.8),   // Forest
    Biome::new(5, 0.05, 0.8),  // Taiga
    Biome::with_extra_color(6, 0.8, 0.9, [205, 128, 255]), // Swampland
    Biome::new(7, 0.5, 0.5),   // River
    Biome::new(8, 2.0, 0.0),   // Hell
    Biome::new(9, 0.5, 0.5),   // Sky
    Biome::new(10, 0.0, 0.5),  // Frozen Ocean
    Biome::new(11, 0.0, 0.5),  // Frozen River
    Biome::new(12, 0.0, 0.5),  // Ice Plains
    Biome::new(13, 0.0, 0.5),  // Ice Mountains
    Biome::new(14, 0.9, 1.0),  // Mushroom Island
    Biome::new(15, 0.9, 1.0),  // Mushroom Island Shore
    Biome::new(16, 0.8, 0.4),  // Beach
    Biome::new(17, 2.0, 0.0),  // Desert Hills
    Biome::new(18, 0.7, 0.8),  // Forest Hills
    Biome::new(19, 0.05, 0.8), // Taiga Hills
    Biome::new(20, 0.2, 0.3),  // Extreme Hills Edge
    Biome::new(21, 2.0, 0.45), // Jungle
    Biome::new(22, 2.0, 0.25), // Jungle Hills
];

/// Id of the biome unknown ids resolve to (Jungle, which renders neutrally).
pub const DEFAULT_BIOME: u8 = 21;

/// Returns the known biome with the given id, or the default biome.
pub fn lookup(id: u8) -> Biome {
    BIOMES
        .iter()
        .find(|biome| biome.id() == id)
        .copied()
        .unwrap_or(BIOMES[DEFAULT_BIOME as usize])
}

/// Returns `true` for blocks whose texture is tinted with the biome color:
/// grass, leaves, tall grass, vines, lily pads, acacia/dark oak leaves and
/// double plants.
pub fn is_biome_block(id: u16, _data: u16) -> bool {
    matches!(id, 2 | 18 | 31 | 106 | 111 | 161 | 175)
}
