//! RGBA pixel helpers.

use image::Rgba;

/// The fully transparent color. An overlay returning it leaves pixels alone.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Returns `true` if the color marks "no tint here".
pub fn is_absent(color: Rgba<u8>) -> bool {
    color.0[3] == 0
}

/// Returns `true` if every channel, alpha included, is zero.
pub fn is_empty(pixel: Rgba<u8>) -> bool {
    pixel.0 == [0, 0, 0, 0]
}

/// Adds a signed offset to the color channels, clamping to `0..=255`.
/// Alpha is kept.
pub fn add_clamp(pixel: Rgba<u8>, (dr, dg, db): (i32, i32, i32)) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    let add = |c: u8, d: i32| (c as i32 + d).clamp(0, 255) as u8;
    Rgba([add(r, dr), add(g, dg), add(b, db), a])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_only_checks_alpha() {
        assert!(is_absent(TRANSPARENT));
        assert!(is_absent(Rgba([255, 0, 0, 0])));
        assert!(!is_absent(Rgba([0, 0, 0, 1])));
    }

    #[test]
    fn test_add_clamp_saturates() {
        let pixel = Rgba([250, 10, 128, 200]);
        assert_eq!(add_clamp(pixel, (24, -60, -60)), Rgba([255, 0, 68, 200]));
    }
}
