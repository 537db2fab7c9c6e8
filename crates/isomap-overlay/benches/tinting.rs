use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::RgbaImage;
use isomap_overlay::overlays::{LightingOverlay, SlimeOverlay};
use isomap_overlay::*;
use isomap_world::{Block, BlockPos, BlockTypeRegistry, SparseWorld};

const BLOCK_SIZE: u32 = 24;

fn sample_world() -> SparseWorld {
    let mut world = SparseWorld::with_ambient_sky_light(0);
    world.fill_layer(-16, -16, 16, 16, 63, Block::new(1, 0));
    world.fill_layer(-16, -16, 16, 16, 64, Block::new(0, 0).with_light(3, 15));
    world
}

fn bench_per_block(c: &mut Criterion) {
    let world = sample_world();
    let registry = BlockTypeRegistry::with_classic_blocks();
    let ctx = DrawContext::new(&world, &registry);
    let mode = OverlayRenderMode::new(
        "slime",
        "Slime chunks",
        OverlayKind::Slime(SlimeOverlay::new(0, 0, 85)),
        OverlayRenderer::default(),
    );
    let block = RgbaImage::new(BLOCK_SIZE, BLOCK_SIZE);
    let mut overlay = RgbaImage::new(BLOCK_SIZE, BLOCK_SIZE);
    // chunk (2, 2) is a slime chunk for seed 0
    let pos = black_box(BlockPos::new(40, 40, 63));
    c.bench_function("draw_overlay_per_block", |bencher| {
        bencher.iter(|| mode.draw_overlay(&ctx, &block, &mut overlay, pos, 1, 0))
    });
}

fn bench_per_face(c: &mut Criterion) {
    let world = sample_world();
    let registry = BlockTypeRegistry::with_classic_blocks();
    let ctx = DrawContext::new(&world, &registry);
    let mode = OverlayRenderMode::new(
        "night",
        "Night",
        OverlayKind::Lighting(LightingOverlay::new(false, 1.0, 0.85, false)),
        OverlayRenderer::default(),
    );
    let block = RgbaImage::new(BLOCK_SIZE, BLOCK_SIZE);
    let mut overlay = RgbaImage::new(BLOCK_SIZE, BLOCK_SIZE);
    let pos = black_box(BlockPos::new(0, 0, 63));
    c.bench_function("draw_overlay_per_face", |bencher| {
        bencher.iter(|| mode.draw_overlay(&ctx, &block, &mut overlay, pos, 1, 0))
    });
}

fn bench_strategies(c: &mut Criterion) {
    let color = black_box(image::Rgba([255, 0, 0, 85]));
    for strategy in [
        TintStrategy::FlatFill,
        TintStrategy::LuminanceOffset,
        TintStrategy::AlphaBlend,
    ] {
        let renderer = OverlayRenderer::new(strategy);
        let gray = image::Rgba([90, 90, 90, 255]);
        let block = RgbaImage::from_pixel(BLOCK_SIZE, BLOCK_SIZE, gray);
        let mut overlay = RgbaImage::new(BLOCK_SIZE, BLOCK_SIZE);
        c.bench_function(&format!("tint_top_{strategy:?}"), |bencher| {
            bencher.iter(|| renderer.tint_top(&block, &mut overlay, color))
        });
    }
}

fn bench_luminance_offset(c: &mut Criterion) {
    let color = black_box(image::Rgba([60, 200, 30, 85]));
    c.bench_function("luminance_neutral_offset", |bencher| {
        bencher.iter(|| black_box(luminance_neutral_offset(color)))
    });
}

criterion_group!(
    benches,
    bench_per_block,
    bench_per_face,
    bench_strategies,
    bench_luminance_offset
);
criterion_main!(benches);
