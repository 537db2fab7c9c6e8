//! Highlights positions where hostile mobs can spawn.

use image::Rgba;
use isomap_world::{BlockPos, DIR_BOTTOM, GET_DATA, GET_ID, GET_LIGHT};

use crate::pixel;
use crate::tinting::{BlockColor, DrawContext};

/// Mobs spawn below this light level.
const SPAWN_LIGHT_LIMIT: u8 = 8;
const SPAWN_RGB: [u8; 3] = [255, 0, 0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnOverlay {
    day: bool,
    color: Rgba<u8>,
}

impl SpawnOverlay {
    pub fn new(day: bool, opacity: u8) -> Self {
        let [r, g, b] = SPAWN_RGB;
        Self {
            day,
            color: Rgba([r, g, b, opacity]),
        }
    }

    pub fn is_day(&self) -> bool {
        self.day
    }

    /// A mob fits into a fully transparent block standing on an opaque one,
    /// as long as it is dark enough. Sky light only counts by day.
    pub fn is_spawnable(&self, ctx: &DrawContext<'_>, pos: BlockPos, id: u16, data: u16) -> bool {
        if !ctx.images.is_block_free_space(id, data) {
            return false;
        }
        let below = ctx.world.get_block(pos + DIR_BOTTOM, GET_ID | GET_DATA);
        if ctx.images.is_block_transparent(below.id, below.data) {
            return false;
        }
        let light = ctx.world.get_block(pos, GET_LIGHT);
        let level = if self.day {
            light.block_light.max(light.sky_light)
        } else {
            light.block_light
        };
        level < SPAWN_LIGHT_LIMIT
    }
}

impl BlockColor for SpawnOverlay {
    fn block_color(&self, ctx: &DrawContext<'_>, pos: BlockPos, id: u16, data: u16) -> Rgba<u8> {
        if self.is_spawnable(ctx, pos, id, data) {
            self.color
        } else {
            pixel::TRANSPARENT
        }
    }
}
