//! Benchmarks for sprite submission and flushing

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Mat4;
use spritebatch_render::{
    BatchDescriptor, Effect, IndexedDraw, RenderBackend, RenderState, SortMode, SpriteBatch,
    SpriteBatchConfig, Texture, Viewport,
};
use spritebatch_test_utils::fixtures;

/// Backend that only counts draws, so the benchmark measures batching.
#[derive(Default)]
struct NullBackend {
    draws: u64,
}

impl RenderBackend for NullBackend {
    fn viewport(&self) -> Viewport {
        Viewport::from_size(1920.0, 1080.0)
    }

    fn apply_render_state(&mut self, _state: &RenderState) {}

    fn set_transform(&mut self, _matrix: Mat4) {}

    fn apply_shader_pass(&mut self, _effect: &Effect, _pass: u32) {}

    fn bind_texture(&mut self, _texture: Texture) {}

    fn draw_indexed_triangles(&mut self, draw: IndexedDraw<'_>) {
        black_box(draw.vertex_range());
        self.draws += 1;
    }
}

fn bench_sort_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_modes");
    let textures = fixtures::textures(8, 32);
    let count = 10_000;
    let sprites = fixtures::sprite_grid(&textures, count, 100);
    group.throughput(Throughput::Elements(count as u64));

    for mode in [
        SortMode::Deferred,
        SortMode::Texture,
        SortMode::FrontToBack,
        SortMode::BackToFront,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{mode:?}")),
            &mode,
            |b, &mode| {
                let mut batch = SpriteBatch::with_config(
                    NullBackend::default(),
                    SpriteBatchConfig {
                        initial_capacity: count,
                    },
                );
                b.iter(|| {
                    batch
                        .begin(BatchDescriptor::new().sort_mode(mode))
                        .unwrap();
                    for sprite in &sprites {
                        batch.draw(sprite).unwrap();
                    }
                    batch.end().unwrap();
                    black_box(batch.backend().draws)
                });
            },
        );
    }

    group.finish();
}

fn bench_sprite_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprite_count");
    let textures = fixtures::textures(4, 16);

    for count in [100, 1_000, 10_000, 50_000] {
        let sprites = fixtures::sprite_grid(&textures, count, 250);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &sprites, |b, sprites| {
            let mut batch = SpriteBatch::new(NullBackend::default());
            b.iter(|| {
                batch
                    .begin(BatchDescriptor::new().sort_mode(SortMode::Texture))
                    .unwrap();
                for sprite in sprites {
                    batch.draw(sprite).unwrap();
                }
                batch.end().unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort_modes, bench_sprite_count);
criterion_main!(benches);
