//! World primitives consumed by the overlay core: block positions, block records
//! with selectable fields, and the narrow query traits the renderer implements.

pub mod block;
pub mod pos;
pub mod query;
pub mod registry;

pub use block::{
    AIR, Block, GET_ALL, GET_BIOME, GET_BLOCK_LIGHT, GET_DATA, GET_ID, GET_LIGHT, GET_SKY_LIGHT,
};
pub use pos::{
    BlockPos, CHUNK_WIDTH, ChunkPos, DIR_BOTTOM, DIR_EAST, DIR_NORTH, DIR_SOUTH, DIR_TOP, DIR_WEST,
};
pub use query::{BlockImages, SparseWorld, WorldQuery};
pub use registry::{BlockTypeDef, BlockTypeRegistry, RegistryError, Transparency};
