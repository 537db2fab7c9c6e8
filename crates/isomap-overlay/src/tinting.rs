//! Per-block and per-face tinting dispatch shared by every overlay.

use image::{Rgba, RgbaImage};
use isomap_world::{
    BlockImages, BlockPos, DIR_SOUTH, DIR_TOP, DIR_WEST, GET_DATA, GET_ID, WorldQuery,
};

use crate::face::{Face, Region};
use crate::pixel;
use crate::tint::OverlayRenderer;

/// Granularity of an overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayMode {
    /// One color covers the whole block image.
    PerBlock,
    /// Top, left and right faces each take the color of the neighbor they face.
    PerFace,
}

/// The collaborators an overlay reads while drawing one block.
#[derive(Clone, Copy)]
pub struct DrawContext<'a> {
    pub world: &'a dyn WorldQuery,
    pub images: &'a dyn BlockImages,
}

impl<'a> DrawContext<'a> {
    pub fn new(world: &'a dyn WorldQuery, images: &'a dyn BlockImages) -> Self {
        Self { world, images }
    }
}

/// Resolves the overlay color of a block. Alpha 0 means "leave it alone".
pub trait BlockColor {
    fn block_color(&self, ctx: &DrawContext<'_>, pos: BlockPos, id: u16, data: u16) -> Rgba<u8>;
}

impl<F> BlockColor for F
where
    F: Fn(&DrawContext<'_>, BlockPos, u16, u16) -> Rgba<u8>,
{
    fn block_color(&self, ctx: &DrawContext<'_>, pos: BlockPos, id: u16, data: u16) -> Rgba<u8> {
        self(ctx, pos, id, data)
    }
}

/// Faces visible in the isometric projection and the neighbor each one faces.
const VISIBLE_FACES: [(BlockPos, Face); 3] = [
    (DIR_TOP, Face::Top),
    (DIR_WEST, Face::Left),
    (DIR_SOUTH, Face::Right),
];

/// Decides which pixels of a block image to tint and writes the colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TintingOverlay {
    mode: OverlayMode,
    renderer: OverlayRenderer,
}

impl TintingOverlay {
    pub fn new(mode: OverlayMode, renderer: OverlayRenderer) -> Self {
        Self { mode, renderer }
    }

    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    pub fn renderer(&self) -> OverlayRenderer {
        self.renderer
    }

    /// Tints `overlay` for the block `(id, data)` at `pos`.
    ///
    /// Transparent blocks are always tinted as a whole, even in
    /// [`OverlayMode::PerFace`]. For opaque blocks in that mode each visible
    /// face takes the color of the neighbor in front of it. `block` is the
    /// rendered block image: the luminance and blend strategies tint only the
    /// pixels it covers and start from its colors. It is never modified.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_overlay<C: BlockColor + ?Sized>(
        &self,
        colors: &C,
        ctx: &DrawContext<'_>,
        block: &RgbaImage,
        overlay: &mut RgbaImage,
        pos: BlockPos,
        id: u16,
        data: u16,
    ) {
        if self.mode == OverlayMode::PerBlock || ctx.images.is_block_transparent(id, data) {
            let color = colors.block_color(ctx, pos, id, data);
            if !pixel::is_absent(color) {
                self.renderer.tint_block(block, overlay, color);
            }
            return;
        }

        for (dir, face) in VISIBLE_FACES {
            let neighbor_pos = pos + dir;
            let neighbor = ctx.world.get_block(neighbor_pos, GET_ID | GET_DATA);
            let color = colors.block_color(ctx, neighbor_pos, neighbor.id, neighbor.data);
            if pixel::is_absent(color) {
                continue;
            }
            self.renderer.tint_region(block, overlay, color, Region::Face(face));
        }
    }
}
