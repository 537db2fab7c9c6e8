//! Built-in climate gradients.
//!
//! The renderer normally uses the grass and foliage color textures shipped with
//! the game. These procedural stand-ins have the same layout (temperature falls
//! along x, scaled rainfall falls along y, valid area is the triangle
//! `y >= x`) so biome tinting works without any texture files.

use image::{Rgba, RgbaImage};

/// Side length of the built-in gradients.
pub const GRADIENT_SIZE: u32 = 256;

/// Corner colors of a gradient triangle.
struct Corners {
    /// Hot and wet (top left).
    hot_wet: [f32; 3],
    /// Hot and dry (bottom left).
    hot_dry: [f32; 3],
    /// Cold (bottom right).
    cold: [f32; 3],
}

const GRASS: Corners = Corners {
    hot_wet: [71.0, 205.0, 51.0],
    hot_dry: [191.0, 183.0, 85.0],
    cold: [128.0, 180.0, 151.0],
};

const FOLIAGE: Corners = Corners {
    hot_wet: [26.0, 191.0, 0.0],
    hot_dry: [174.0, 164.0, 42.0],
    cold: [96.0, 161.0, 123.0],
};

/// Generates a grass color gradient of `size × size` pixels.
pub fn default_grass_gradient(size: u32) -> RgbaImage {
    triangle_gradient(size, &GRASS)
}

/// Generates a foliage color gradient of `size × size` pixels.
pub fn default_foliage_gradient(size: u32) -> RgbaImage {
    triangle_gradient(size, &FOLIAGE)
}

/// Barycentric interpolation of the three corners over the valid triangle.
/// Pixels above the diagonal repeat the diagonal color.
fn triangle_gradient(size: u32, corners: &Corners) -> RgbaImage {
    let max = size.saturating_sub(1).max(1) as f32;
    RgbaImage::from_fn(size, size, |x, y| {
        let u = x as f32 / max;
        let v = (y as f32 / max).max(u);

        let w_cold = u;
        let w_hot_wet = 1.0 - v;
        let w_hot_dry = v - u;

        let mut rgb = [0u8; 3];
        for (c, out) in rgb.iter_mut().enumerate() {
            let value = corners.cold[c] * w_cold
                + corners.hot_wet[c] * w_hot_wet
                + corners.hot_dry[c] * w_hot_dry;
            *out = value.round().clamp(0.0, 255.0) as u8;
        }
        Rgba([rgb[0], rgb[1], rgb[2], 255])
    })
}
