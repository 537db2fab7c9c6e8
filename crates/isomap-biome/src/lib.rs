//! Biome model: the known-biome table, climate-gradient color lookup, and
//! neighborhood averaging for smooth biome edges.
//!
//! Biome colors are read from a 2D gradient indexed by temperature and
//! rainfall. Only the triangle where `rainfall <= temperature` is meaningful,
//! so rainfall is scaled by temperature before the lookup.

mod biome;
mod gradient;
mod table;

pub use biome::Biome;
pub use gradient::{GRADIENT_SIZE, default_foliage_gradient, default_grass_gradient};
pub use table::{BIOMES, DEFAULT_BIOME, is_biome_block, lookup};
