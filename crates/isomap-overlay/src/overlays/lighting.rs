//! Day and night lighting shade.

use image::Rgba;
use isomap_world::{Block, BlockPos, GET_LIGHT};

use crate::tinting::{BlockColor, DrawContext};

/// Maximum light level of either channel.
const MAX_LIGHT: u8 = 15;
/// Sky light lost at night.
const NIGHT_SKY_DIMMING: u8 = 11;
/// Fraction of light kept per level below the maximum.
const FALLOFF: f64 = 0.8;

/// Shades faces black according to the light reaching them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingOverlay {
    day: bool,
    intensity: f64,
    water_intensity: f64,
    /// Worlds without sky light data (the End) are treated as fully sunlit.
    simulate_sun: bool,
}

impl LightingOverlay {
    pub fn new(day: bool, intensity: f64, water_intensity: f64, simulate_sun: bool) -> Self {
        Self {
            day,
            intensity,
            water_intensity,
            simulate_sun,
        }
    }

    pub fn is_day(&self) -> bool {
        self.day
    }

    /// Effective light level of a block for this time of day.
    pub fn light_level(&self, block: &Block) -> u8 {
        let sky = if self.simulate_sun { MAX_LIGHT } else { block.sky_light.min(MAX_LIGHT) };
        let sky = if self.day { sky } else { sky.saturating_sub(NIGHT_SKY_DIMMING) };
        block.block_light.min(MAX_LIGHT).max(sky)
    }

    /// Shade alpha for `light`. Fully lit gives 0.
    pub fn shade_alpha(light: u8, intensity: f64) -> u8 {
        let darkness = 1.0 - FALLOFF.powi(i32::from(MAX_LIGHT - light.min(MAX_LIGHT)));
        (255.0 * darkness * intensity).round().clamp(0.0, 255.0) as u8
    }
}

fn is_water(id: u16) -> bool {
    matches!(id, 8 | 9)
}

impl BlockColor for LightingOverlay {
    fn block_color(&self, ctx: &DrawContext<'_>, pos: BlockPos, id: u16, _data: u16) -> Rgba<u8> {
        let block = ctx.world.get_block(pos, GET_LIGHT);
        let intensity = if is_water(id) { self.water_intensity } else { self.intensity };
        Rgba([0, 0, 0, Self::shade_alpha(self.light_level(&block), intensity)])
    }
}
