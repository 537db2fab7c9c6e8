//! Render modes: one configured overlay ready to draw.

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use isomap_config::OverlayType;
use isomap_world::{BlockPos, WorldQuery};

use crate::overlays::{BiomeOverlay, CustomOverlay, LightingOverlay, SlimeOverlay, SpawnOverlay};
use crate::tint::OverlayRenderer;
use crate::tinting::{BlockColor, DrawContext, OverlayMode, TintingOverlay};

/// The closed set of overlay variants.
#[derive(Clone, Debug)]
pub enum OverlayKind {
    Lighting(LightingOverlay),
    Slime(SlimeOverlay),
    Spawn(SpawnOverlay),
    Biome(BiomeOverlay),
    Custom(CustomOverlay),
}

impl OverlayKind {
    /// Tinting granularity of the variant.
    pub fn mode(&self) -> OverlayMode {
        match self {
            OverlayKind::Lighting(_) | OverlayKind::Spawn(_) => OverlayMode::PerFace,
            OverlayKind::Slime(_) | OverlayKind::Biome(_) => OverlayMode::PerBlock,
            OverlayKind::Custom(custom) => custom.mode(),
        }
    }

    /// The configuration tag this variant is built from. Custom overlays have none.
    pub fn overlay_type(&self) -> Option<OverlayType> {
        match self {
            OverlayKind::Lighting(_) => Some(OverlayType::Lighting),
            OverlayKind::Slime(_) => Some(OverlayType::Slime),
            OverlayKind::Spawn(_) => Some(OverlayType::Spawn),
            OverlayKind::Biome(_) => Some(OverlayType::Biome),
            OverlayKind::Custom(_) => None,
        }
    }
}

impl BlockColor for OverlayKind {
    fn block_color(&self, ctx: &DrawContext<'_>, pos: BlockPos, id: u16, data: u16) -> Rgba<u8> {
        match self {
            OverlayKind::Lighting(overlay) => overlay.block_color(ctx, pos, id, data),
            OverlayKind::Slime(overlay) => overlay.block_color(ctx, pos, id, data),
            OverlayKind::Spawn(overlay) => overlay.block_color(ctx, pos, id, data),
            OverlayKind::Biome(overlay) => overlay.block_color(ctx, pos, id, data),
            OverlayKind::Custom(overlay) => overlay.block_color(ctx, pos, id, data),
        }
    }
}

/// A configured overlay. Immutable once built; clones share their strings
/// and gradient data.
#[derive(Clone, Debug)]
pub struct OverlayRenderMode {
    id: Arc<str>,
    name: Arc<str>,
    tinting: TintingOverlay,
    kind: OverlayKind,
}

static_assertions::assert_impl_all!(OverlayRenderMode: Send, Sync);

impl OverlayRenderMode {
    pub fn new(id: &str, name: &str, kind: OverlayKind, renderer: OverlayRenderer) -> Self {
        Self {
            id: Arc::from(id),
            name: Arc::from(name),
            tinting: TintingOverlay::new(kind.mode(), renderer),
            kind,
        }
    }

    /// Builds a render mode around a color function supplied by the embedder.
    pub fn custom<F>(
        id: &str,
        name: &str,
        mode: OverlayMode,
        renderer: OverlayRenderer,
        color: F,
    ) -> Self
    where
        F: Fn(BlockPos, u16, u16, &dyn WorldQuery) -> Rgba<u8> + Send + Sync + 'static,
    {
        Self::new(id, name, OverlayKind::Custom(CustomOverlay::new(mode, color)), renderer)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> OverlayMode {
        self.tinting.mode()
    }

    pub fn renderer(&self) -> OverlayRenderer {
        self.tinting.renderer()
    }

    pub fn kind(&self) -> &OverlayKind {
        &self.kind
    }

    /// Tints `overlay` for the block `(id, data)` at `pos`. Called once per
    /// block of a tile, concurrently across tiles.
    pub fn draw_overlay(
        &self,
        ctx: &DrawContext<'_>,
        block: &RgbaImage,
        overlay: &mut RgbaImage,
        pos: BlockPos,
        id: u16,
        data: u16,
    ) {
        self.tinting.draw_overlay(&self.kind, ctx, block, overlay, pos, id, data);
    }
}
