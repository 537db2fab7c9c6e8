//! Query traits implemented by the world loader and the block image atlas,
//! plus [`SparseWorld`], an in-memory world for embedders and tests.

use rustc_hash::FxHashMap;

use crate::block::Block;
use crate::pos::BlockPos;

/// Read access to loaded world data.
///
/// Implementations are shared by every render worker and must tolerate
/// concurrent calls in any order.
pub trait WorldQuery: Sync {
    /// Returns the block at `pos`. Only the fields selected by `fields` (a mask of
    /// the `GET_*` bits) are guaranteed to be filled.
    fn get_block(&self, pos: BlockPos, fields: u8) -> Block;
}

/// Block image atlas capabilities the overlays depend on.
pub trait BlockImages: Sync {
    /// Returns `true` if the block image for `(id, data)` lets the blocks behind
    /// it show through.
    fn is_block_transparent(&self, id: u16, data: u16) -> bool;

    /// Returns `true` if nothing solid occupies `(id, data)`, so an entity
    /// could stand inside it. Glass, leaves and water are transparent but
    /// not free space.
    fn is_block_free_space(&self, id: u16, data: u16) -> bool;
}

/// A hash-map backed world. Positions never set read as air lit by
/// `ambient_sky_light`.
#[derive(Clone, Debug)]
pub struct SparseWorld {
    blocks: FxHashMap<BlockPos, Block>,
    ambient_sky_light: u8,
}

impl SparseWorld {
    /// Creates an empty world under open sky.
    pub fn new() -> Self {
        Self::with_ambient_sky_light(15)
    }

    pub fn with_ambient_sky_light(level: u8) -> Self {
        Self {
            blocks: FxHashMap::default(),
            ambient_sky_light: level.min(15),
        }
    }

    pub fn set(&mut self, pos: BlockPos, block: Block) {
        self.blocks.insert(pos, block);
    }

    /// Fills the horizontal square `[x0, x1] × [z0, z1]` at height `y`.
    pub fn fill_layer(&mut self, x0: i32, z0: i32, x1: i32, z1: i32, y: i32, block: Block) {
        for x in x0..=x1 {
            for z in z0..=z1 {
                self.blocks.insert(BlockPos::new(x, z, y), block);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for SparseWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldQuery for SparseWorld {
    fn get_block(&self, pos: BlockPos, fields: u8) -> Block {
        match self.blocks.get(&pos) {
            Some(block) => block.select(fields),
            None => Block::default()
                .with_light(0, self.ambient_sky_light)
                .select(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{GET_ALL, GET_ID, GET_SKY_LIGHT};

    #[test]
    fn test_unset_position_reads_as_lit_air() {
        let world = SparseWorld::new();
        let block = world.get_block(BlockPos::new(0, 0, 64), GET_ALL);
        assert!(block.is_air());
        assert_eq!(block.sky_light, 15);
    }

    #[test]
    fn test_set_and_get() {
        let mut world = SparseWorld::with_ambient_sky_light(0);
        let pos = BlockPos::new(3, -4, 10);
        world.set(pos, Block::new(2, 0).with_biome(4));
        assert_eq!(world.get_block(pos, GET_ID).id, 2);
        assert_eq!(world.get_block(pos, GET_ID).biome, 0);
        assert_eq!(world.get_block(BlockPos::new(0, 0, 0), GET_SKY_LIGHT).sky_light, 0);
    }

    #[test]
    fn test_fill_layer_covers_square() {
        let mut world = SparseWorld::new();
        world.fill_layer(-1, -1, 1, 1, 63, Block::new(1, 0));
        assert_eq!(world.len(), 9);
        assert_eq!(world.get_block(BlockPos::new(1, -1, 63), GET_ID).id, 1);
        assert!(world.get_block(BlockPos::new(2, 0, 63), GET_ID).is_air());
    }
}
