//! The concrete overlays. Each one resolves a color per block; the shared
//! [`TintingOverlay`](crate::TintingOverlay) decides where the color goes.

mod biome;
mod custom;
mod java_random;
mod lighting;
mod slime;
mod spawn;

pub use biome::BiomeOverlay;
pub use custom::{ColorFn, CustomOverlay};
pub use java_random::JavaRandom;
pub use lighting::LightingOverlay;
pub use slime::{SlimeOverlay, is_slime_chunk};
pub use spawn::SpawnOverlay;
