//! Block records returned by world queries.
//!
//! A query names the fields it needs with a bitmask; fields that were not
//! requested may be left at their default values by the world implementation.

/// Field bit: block id.
pub const GET_ID: u8 = 0b0000_0001;
/// Field bit: block data value.
pub const GET_DATA: u8 = 0b0000_0010;
/// Field bit: biome id of the column.
pub const GET_BIOME: u8 = 0b0000_0100;
/// Field bit: emitted block light level.
pub const GET_BLOCK_LIGHT: u8 = 0b0000_1000;
/// Field bit: sky light level.
pub const GET_SKY_LIGHT: u8 = 0b0001_0000;

/// Both light channels.
pub const GET_LIGHT: u8 = GET_BLOCK_LIGHT | GET_SKY_LIGHT;
/// Every field.
pub const GET_ALL: u8 = GET_ID | GET_DATA | GET_BIOME | GET_LIGHT;

/// Block id of air. Positions outside loaded chunks read as air.
pub const AIR: u16 = 0;

/// A block as seen by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub id: u16,
    pub data: u16,
    pub biome: u8,
    /// Block light level (0–15).
    pub block_light: u8,
    /// Sky light level (0–15).
    pub sky_light: u8,
}

impl Block {
    /// Creates a block with the given id and data and no light.
    pub const fn new(id: u16, data: u16) -> Self {
        Self {
            id,
            data,
            biome: 0,
            block_light: 0,
            sky_light: 0,
        }
    }

    pub fn with_biome(mut self, biome: u8) -> Self {
        self.biome = biome;
        self
    }

    pub fn with_light(mut self, block_light: u8, sky_light: u8) -> Self {
        debug_assert!(block_light <= 15 && sky_light <= 15);
        self.block_light = block_light;
        self.sky_light = sky_light;
        self
    }

    /// Returns `true` for air.
    pub fn is_air(&self) -> bool {
        self.id == AIR
    }

    /// Copies only the fields selected by `fields` into a fresh block.
    pub fn select(&self, fields: u8) -> Block {
        let mut out = Block::default();
        if fields & GET_ID != 0 {
            out.id = self.id;
        }
        if fields & GET_DATA != 0 {
            out.data = self.data;
        }
        if fields & GET_BIOME != 0 {
            out.biome = self.biome;
        }
        if fields & GET_BLOCK_LIGHT != 0 {
            out.block_light = self.block_light;
        }
        if fields & GET_SKY_LIGHT != 0 {
            out.sky_light = self.sky_light;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_masks_unrequested_fields() {
        let block = Block::new(2, 1).with_biome(6).with_light(4, 15);
        let selected = block.select(GET_ID | GET_DATA);
        assert_eq!(selected, Block::new(2, 1));

        let light = block.select(GET_LIGHT);
        assert_eq!(light.block_light, 4);
        assert_eq!(light.sky_light, 15);
        assert_eq!(light.id, 0);
    }

    #[test]
    fn test_select_all_is_identity() {
        let block = Block::new(18, 3).with_biome(21).with_light(7, 9);
        assert_eq!(block.select(GET_ALL), block);
    }

    #[test]
    fn test_default_block_is_air() {
        assert!(Block::default().is_air());
        assert!(!Block::new(1, 0).is_air());
    }
}
