//! Writing overlay colors onto block image pixels.

use image::{Pixel, Rgba, RgbaImage};
use isomap_config::TintStrategy;

use crate::face::{Face, Region};
use crate::pixel;

/// Attenuation of the luminance-neutral offset. 3 looks similar to alpha 85.
const RECOLOR_ATTENUATION: i32 = 3;

/// Overwrites every pixel of `image` with `color`.
pub fn apply_flat_tint(image: &mut RgbaImage, color: Rgba<u8>) {
    for pixel in image.pixels_mut() {
        *pixel = color;
    }
}

/// Computes a per-channel offset that shifts pixels toward the hue of `color`
/// while keeping their luminance roughly unchanged.
///
/// Luminance uses the weights 10, 3, 1 for red, green and blue. Green was
/// meant to weigh most; the transposed weights are kept because existing maps
/// were rendered with them.
pub fn luminance_neutral_offset(color: Rgba<u8>) -> (i32, i32, i32) {
    let [r, g, b, _] = color.0.map(i32::from);
    let luminance = (10 * r + 3 * g + b) / 14;
    (
        (r - luminance) / RECOLOR_ATTENUATION,
        (g - luminance) / RECOLOR_ATTENUATION,
        (b - luminance) / RECOLOR_ATTENUATION,
    )
}

/// Applies overlay colors to block images with a fixed [`TintStrategy`].
///
/// Flat fill overwrites the region of the overlay image. The other two
/// strategies start from the rendered block image: each pixel the block
/// covers is recolored or blended and written to the overlay, so the empty
/// corners of a block image stay empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayRenderer {
    strategy: TintStrategy,
}

impl OverlayRenderer {
    pub fn new(strategy: TintStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> TintStrategy {
        self.strategy
    }

    /// Selects luminance-neutral recoloring (`true`) or alpha blending (`false`).
    pub fn set_high_contrast(&mut self, high_contrast: bool) {
        self.strategy = if high_contrast {
            TintStrategy::LuminanceOffset
        } else {
            TintStrategy::AlphaBlend
        };
    }

    /// Tints every pixel of the block image.
    pub fn tint_block(&self, block: &RgbaImage, overlay: &mut RgbaImage, color: Rgba<u8>) {
        self.tint_region(block, overlay, color, Region::Whole);
    }

    /// Tints the top face.
    pub fn tint_top(&self, block: &RgbaImage, overlay: &mut RgbaImage, color: Rgba<u8>) {
        self.tint_region(block, overlay, color, Region::Face(Face::Top));
    }

    /// Tints the left (west) face.
    pub fn tint_left(&self, block: &RgbaImage, overlay: &mut RgbaImage, color: Rgba<u8>) {
        self.tint_region(block, overlay, color, Region::Face(Face::Left));
    }

    /// Tints the right (south) face.
    pub fn tint_right(&self, block: &RgbaImage, overlay: &mut RgbaImage, color: Rgba<u8>) {
        self.tint_region(block, overlay, color, Region::Face(Face::Right));
    }

    /// Writes the tinted pixels of `region` into `overlay`. `block` is only read.
    pub fn tint_region(
        &self,
        block: &RgbaImage,
        overlay: &mut RgbaImage,
        color: Rgba<u8>,
        region: Region,
    ) {
        if self.strategy == TintStrategy::FlatFill && region == Region::Whole {
            apply_flat_tint(overlay, color);
            return;
        }

        let size = overlay.width();
        let offset = luminance_neutral_offset(color);
        for (x, y, pixel) in overlay.enumerate_pixels_mut() {
            if !region.contains(size, x, y) {
                continue;
            }
            if self.strategy == TintStrategy::FlatFill {
                *pixel = color;
                continue;
            }
            let base = match block.get_pixel_checked(x, y) {
                Some(base) if !pixel::is_empty(*base) => *base,
                _ => continue,
            };
            *pixel = match self.strategy {
                TintStrategy::LuminanceOffset => pixel::add_clamp(base, offset),
                TintStrategy::AlphaBlend => {
                    let mut blended = base;
                    blended.blend(&color);
                    blended
                }
                TintStrategy::FlatFill => color,
            };
        }
    }
}
