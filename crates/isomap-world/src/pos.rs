//! Block and chunk coordinates.
//!
//! Coordinates follow the Minecraft convention: `y` points up, north is `-z`,
//! south is `+z`, west is `-x` and east is `+x`. A map rotation turns the world
//! in 90° steps around the `y` axis before tiles are laid out.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use glam::IVec3;

/// Side length of a chunk column in blocks.
pub const CHUNK_WIDTH: i32 = 16;

/// Position of a single block in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub z: i32,
    pub y: i32,
}

/// One block up.
pub const DIR_TOP: BlockPos = BlockPos::new(0, 0, 1);
/// One block down.
pub const DIR_BOTTOM: BlockPos = BlockPos::new(0, 0, -1);
/// One block north (`-z`).
pub const DIR_NORTH: BlockPos = BlockPos::new(0, -1, 0);
/// One block south (`+z`).
pub const DIR_SOUTH: BlockPos = BlockPos::new(0, 1, 0);
/// One block east (`+x`).
pub const DIR_EAST: BlockPos = BlockPos::new(1, 0, 0);
/// One block west (`-x`).
pub const DIR_WEST: BlockPos = BlockPos::new(-1, 0, 0);

impl BlockPos {
    /// Creates a position from `(x, z, y)`, the order used by tile layout code.
    pub const fn new(x: i32, z: i32, y: i32) -> Self {
        Self { x, z, y }
    }

    /// Rotates the position `count` quarter turns around the `y` axis.
    ///
    /// Each step maps `(x, z)` to `(-z, x)`. Rotating by `count` and then by
    /// `4 - count` yields the original position.
    pub fn rotate(self, count: u8) -> Self {
        let mut pos = self;
        for _ in 0..count % 4 {
            pos = BlockPos::new(-pos.z, pos.x, pos.y);
        }
        pos
    }

    /// Undoes [`BlockPos::rotate`] with the same `count`.
    pub fn unrotate(self, count: u8) -> Self {
        self.rotate((4 - count % 4) % 4)
    }

    /// Returns the chunk column containing this block.
    pub fn chunk(self) -> ChunkPos {
        ChunkPos {
            x: self.x.div_euclid(CHUNK_WIDTH),
            z: self.z.div_euclid(CHUNK_WIDTH),
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.x, self.z, self.y)
    }
}

impl From<IVec3> for BlockPos {
    fn from(v: IVec3) -> BlockPos {
        BlockPos::new(v.x, v.z, v.y)
    }
}

impl From<BlockPos> for IVec3 {
    fn from(pos: BlockPos) -> IVec3 {
        IVec3::new(pos.x, pos.y, pos.z)
    }
}

impl Add<BlockPos> for BlockPos {
    type Output = BlockPos;

    fn add(self, rhs: BlockPos) -> Self::Output {
        BlockPos::new(self.x + rhs.x, self.z + rhs.z, self.y + rhs.y)
    }
}

impl Sub<BlockPos> for BlockPos {
    type Output = BlockPos;

    fn sub(self, rhs: BlockPos) -> Self::Output {
        BlockPos::new(self.x - rhs.x, self.z - rhs.z, self.y - rhs.y)
    }
}

impl Neg for BlockPos {
    type Output = BlockPos;

    fn neg(self) -> Self::Output {
        BlockPos::new(-self.x, -self.z, -self.y)
    }
}

/// Horizontal position of a 16×16 chunk column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}
