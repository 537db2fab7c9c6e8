//! Colors biome-tinted blocks with their smoothed biome color.

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use isomap_biome::{Biome, GRADIENT_SIZE, default_grass_gradient, is_biome_block, lookup};
use isomap_world::{BlockPos, GET_BIOME};

use crate::pixel;
use crate::tinting::{BlockColor, DrawContext};

/// Horizontal neighborhood averaged for one block. The block itself comes first.
const NEIGHBORHOOD: [(i32, i32); 9] = [
    (0, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Clone, Debug)]
pub struct BiomeOverlay {
    gradient: Arc<RgbaImage>,
    flip_xy: bool,
    opacity: u8,
}

impl BiomeOverlay {
    pub fn new(gradient: Arc<RgbaImage>, flip_xy: bool, opacity: u8) -> Self {
        if gradient.width() != gradient.height() {
            tracing::warn!(
                width = gradient.width(),
                height = gradient.height(),
                "biome gradient is not square"
            );
        }
        Self {
            gradient,
            flip_xy,
            opacity,
        }
    }

    /// Uses the built-in grass gradient.
    pub fn with_default_gradient(opacity: u8) -> Self {
        Self::new(Arc::new(default_grass_gradient(GRADIENT_SIZE)), false, opacity)
    }

    pub fn gradient(&self) -> &RgbaImage {
        &self.gradient
    }

    /// Averages the biomes of the 3×3 columns around `pos`.
    pub fn smoothed_biome(&self, ctx: &DrawContext<'_>, pos: BlockPos) -> Option<Biome> {
        let samples = NEIGHBORHOOD.map(|(dx, dz)| {
            let block = ctx.world.get_block(pos + BlockPos::new(dx, dz, 0), GET_BIOME);
            lookup(block.biome)
        });
        Biome::smooth(&samples)
    }
}

impl BlockColor for BiomeOverlay {
    fn block_color(&self, ctx: &DrawContext<'_>, pos: BlockPos, id: u16, data: u16) -> Rgba<u8> {
        if !is_biome_block(id, data) {
            return pixel::TRANSPARENT;
        }
        let Some(biome) = self.smoothed_biome(ctx, pos) else {
            return pixel::TRANSPARENT;
        };
        let [r, g, b] = biome.get_color(&self.gradient, self.flip_xy).0;
        Rgba([r, g, b, self.opacity])
    }
}
