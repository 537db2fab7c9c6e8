//! Overlays driven by a caller-supplied color function.

use std::fmt;
use std::sync::Arc;

use image::Rgba;
use isomap_world::{BlockPos, WorldQuery};

use crate::tinting::{BlockColor, DrawContext, OverlayMode};

/// Color function of a custom overlay: `(pos, id, data, world) -> color`.
pub type ColorFn = dyn Fn(BlockPos, u16, u16, &dyn WorldQuery) -> Rgba<u8> + Send + Sync;

/// An overlay whose colors come from embedder code.
#[derive(Clone)]
pub struct CustomOverlay {
    mode: OverlayMode,
    color: Arc<ColorFn>,
}

impl CustomOverlay {
    pub fn new<F>(mode: OverlayMode, color: F) -> Self
    where
        F: Fn(BlockPos, u16, u16, &dyn WorldQuery) -> Rgba<u8> + Send + Sync + 'static,
    {
        Self {
            mode,
            color: Arc::new(color),
        }
    }

    pub fn mode(&self) -> OverlayMode {
        self.mode
    }
}

impl fmt::Debug for CustomOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomOverlay")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl BlockColor for CustomOverlay {
    fn block_color(&self, ctx: &DrawContext<'_>, pos: BlockPos, id: u16, data: u16) -> Rgba<u8> {
        (self.color)(pos, id, data, ctx.world)
    }
}
