//! Headless Demo - Sprite Batching Without a GPU
//!
//! Draws a small scene through a backend that logs every call instead of
//! rendering, then prints the batch statistics for each sort mode.
//!
//! Run with:
//!   cargo run -p spritebatch-render --example headless
//!
//! Set `RUST_LOG=trace` to also see per-flush summaries from the batcher.

use spritebatch_core::{
    Config, ProfilingMode,
    math::{Mat4, Vec2},
    profiling::{new_frame, profile_scope},
};
use spritebatch_render::{
    BatchDescriptor, BlendMode, Color, Effect, IndexedDraw, Rect, RenderBackend, RenderState,
    SortMode, Sprite, SpriteBatch, SpriteFlip, Texture, Viewport,
};

/// Prints what a real device would be asked to do.
struct LoggingBackend {
    viewport: Viewport,
}

impl RenderBackend for LoggingBackend {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn apply_render_state(&mut self, state: &RenderState) {
        tracing::info!(
            blend = ?state.blend,
            depth = ?state.depth,
            raster = ?state.raster,
            sampler = ?state.sampler,
            "apply render state"
        );
    }

    fn set_transform(&mut self, matrix: Mat4) {
        tracing::debug!(?matrix, "set transform");
    }

    fn apply_shader_pass(&mut self, effect: &Effect, pass: u32) {
        tracing::info!(effect = effect.name(), pass, "apply shader pass");
    }

    fn bind_texture(&mut self, texture: Texture) {
        tracing::info!(texture = texture.id().0, "bind texture");
    }

    fn draw_indexed_triangles(&mut self, draw: IndexedDraw<'_>) {
        tracing::info!(
            vertex_offset = draw.vertex_offset,
            vertex_count = draw.vertex_count,
            primitives = draw.primitive_count,
            "draw indexed"
        );
    }
}

fn main() {
    spritebatch_core::init(&Config::default().with_profiling(ProfilingMode::Scopes));

    let tiles = Texture::new(256, 256);
    let player = Texture::new(32, 48);
    let particle = Texture::new(8, 8);
    let glow = Effect::new(spritebatch_render::EffectId(1), "glow", 2);

    let mut batch = SpriteBatch::new(LoggingBackend {
        viewport: Viewport::from_size(1280.0, 720.0),
    });

    for mode in [SortMode::Deferred, SortMode::Texture, SortMode::BackToFront] {
        profile_scope!("frame");
        batch.reset_stats();

        batch
            .begin(BatchDescriptor::new().sort_mode(mode))
            .expect("batch is idle");
        for i in 0..4 {
            let x = i as f32 * 64.0;
            batch
                .draw(
                    &Sprite::at(tiles, Vec2::new(x, 600.0))
                        .source(Rect::new(64.0 * i as f32, 0.0, 64.0, 64.0))
                        .depth(0.9),
                )
                .expect("valid tile");
            batch
                .draw(
                    &Sprite::at(player, Vec2::new(x + 16.0, 552.0))
                        .origin(Vec2::new(16.0, 24.0))
                        .flip(if i % 2 == 0 { SpriteFlip::empty() } else { SpriteFlip::HORIZONTAL })
                        .depth(0.5),
                )
                .expect("valid player");
        }
        batch.end().expect("batch is active");

        batch
            .begin(
                BatchDescriptor::new()
                    .sort_mode(mode)
                    .blend(BlendMode::Additive)
                    .effect(glow.clone()),
            )
            .expect("batch is idle");
        for i in 0..16 {
            let angle = i as f32 * std::f32::consts::TAU / 16.0;
            batch
                .draw_rect(
                    particle,
                    Rect::new(640.0 + angle.cos() * 100.0, 360.0 + angle.sin() * 100.0, 12.0, 12.0),
                    Color::rgba(1.0, 0.6, 0.2, 0.8),
                )
                .expect("valid particle");
        }
        batch.end().expect("batch is active");

        let stats = batch.stats();
        println!(
            "{mode:?}: {} sprites, {} draw calls, {} flushes",
            stats.sprite_count, stats.draw_calls, stats.flushes
        );
        new_frame();
    }
}
