//! Highlights chunks in which slimes spawn.

use image::Rgba;
use isomap_world::{BlockPos, ChunkPos};

use super::java_random::JavaRandom;
use crate::pixel;
use crate::tinting::{BlockColor, DrawContext};

const SLIME_RGB: [u8; 3] = [60, 200, 30];

/// Returns `true` if slimes spawn in `chunk` of a world with `seed`.
///
/// Intermediate products wrap like 32-bit Java ints before they are widened.
pub fn is_slime_chunk(seed: i64, chunk: ChunkPos) -> bool {
    let (x, z) = (chunk.x, chunk.z);
    let chunk_seed = seed
        .wrapping_add(x.wrapping_mul(x).wrapping_mul(0x4c_1906) as i64)
        .wrapping_add(x.wrapping_mul(0x5a_c0db) as i64)
        .wrapping_add((z.wrapping_mul(z) as i64).wrapping_mul(0x43_07a7))
        .wrapping_add(z.wrapping_mul(0x5_f24f) as i64)
        ^ 0x3ad8_025f;
    JavaRandom::new(chunk_seed).next_int_bounded(10) == 0
}

/// Tints every block of a slime chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlimeOverlay {
    seed: i64,
    rotation: u8,
    color: Rgba<u8>,
}

impl SlimeOverlay {
    /// `rotation` is the map rotation positions arrive in.
    pub fn new(seed: i64, rotation: u8, opacity: u8) -> Self {
        let [r, g, b] = SLIME_RGB;
        Self {
            seed,
            rotation: rotation % 4,
            color: Rgba([r, g, b, opacity]),
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }
}

impl BlockColor for SlimeOverlay {
    fn block_color(&self, _ctx: &DrawContext<'_>, pos: BlockPos, _id: u16, _data: u16) -> Rgba<u8> {
        let chunk = pos.unrotate(self.rotation).chunk();
        if is_slime_chunk(self.seed, chunk) {
            self.color
        } else {
            pixel::TRANSPARENT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomap_world::{BlockTypeRegistry, SparseWorld};

    #[test]
    fn test_slime_chunks_of_seed_zero() {
        let found: Vec<(i32, i32)> = (-4..=4)
            .flat_map(|x| (-4..=4).map(move |z| (x, z)))
            .filter(|&(x, z)| is_slime_chunk(0, ChunkPos::new(x, z)))
            .collect();
        assert_eq!(found, vec![(-2, 0), (1, -3), (2, -3), (2, 2), (2, 4), (4, 2)]);
    }

    #[test]
    fn test_seed_changes_layout() {
        let found: Vec<(i32, i32)> = (-4..=4)
            .flat_map(|x| (-4..=4).map(move |z| (x, z)))
            .filter(|&(x, z)| is_slime_chunk(123_456_789, ChunkPos::new(x, z)))
            .collect();
        assert_eq!(found, vec![(-3, -2), (0, 1), (2, 0)]);
    }

    #[test]
    fn test_far_chunks_wrap_like_java() {
        assert!(is_slime_chunk(0, ChunkPos::new(100_000, -100_000)));
        assert!(!is_slime_chunk(-5, ChunkPos::new(46_341, 46_341)));
    }

    #[test]
    fn test_block_color_in_and_out_of_slime_chunk() {
        let world = SparseWorld::new();
        let registry = BlockTypeRegistry::new();
        let ctx = DrawContext::new(&world, &registry);
        let overlay = SlimeOverlay::new(0, 0, 85);

        // chunk (2, 2)
        let inside = BlockPos::new(32, 47, 12);
        assert_eq!(overlay.block_color(&ctx, inside, 1, 0), Rgba([60, 200, 30, 85]));
        // chunk (0, 0)
        let outside = BlockPos::new(3, 3, 12);
        assert_eq!(overlay.block_color(&ctx, outside, 1, 0), pixel::TRANSPARENT);
    }

    #[test]
    fn test_rotated_positions_map_back_to_world_chunks() {
        let world = SparseWorld::new();
        let registry = BlockTypeRegistry::new();
        let ctx = DrawContext::new(&world, &registry);
        // world chunk (-2, 0)
        let world_pos = BlockPos::new(-20, 5, 70);
        for rotation in 0..4 {
            let overlay = SlimeOverlay::new(0, rotation, 85);
            let rotated = world_pos.rotate(rotation);
            assert!(
                !pixel::is_absent(overlay.block_color(&ctx, rotated, 1, 0)),
                "rotation {rotation}",
            );
        }
    }
}
