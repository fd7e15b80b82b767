//! Sorting, chunking and run coalescing for queued quads.
//!
//! A flush turns the active quad list into as few backend draw calls as the
//! sort order allows: one per maximal run of quads sharing a texture, times
//! the number of effect passes. Runs never cross a chunk boundary; a chunk is
//! at most [`MAX_BATCH_SIZE`] quads so its indices fit in 16 bits.

use ahash::AHashMap;
use spritebatch_core::profiling::{profile_function, profile_scope};

use crate::{
    backend::{IndexedDraw, RenderBackend},
    effect::Effect,
    index_table::{IndexTable, MAX_BATCH_SIZE, VERTICES_PER_QUAD},
    pool::ItemPool,
    quad::{Quad, Vertex},
    sort::{self, SortMode},
    texture::{Texture, TextureId},
};

/// Counters accumulated across flushes until [`Batcher::reset_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Quads drawn.
    pub sprite_count: u64,
    /// Backend draw calls issued, counting each effect pass separately.
    pub draw_calls: u64,
    /// Non-empty flushes.
    pub flushes: u64,
}

/// Queues quads and flushes them to a [`RenderBackend`].
#[derive(Debug, Default)]
pub struct Batcher {
    pool: ItemPool,
    index_table: IndexTable,
    /// Vertex scratch for the chunk being flushed.
    vertices: Vec<Vertex>,
    /// Scratch for texture sorting.
    texture_ranks: AHashMap<TextureId, u32>,
    stats: BatchStats,
}

impl Batcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `quads` quads per flush.
    pub fn with_capacity(quads: usize) -> Self {
        let chunk = quads.min(MAX_BATCH_SIZE);
        Self {
            pool: ItemPool::with_capacity(quads),
            index_table: IndexTable::with_capacity(chunk),
            vertices: Vec::with_capacity(chunk * VERTICES_PER_QUAD),
            texture_ranks: AHashMap::new(),
            stats: BatchStats::default(),
        }
    }

    /// Queue a quad for the next flush.
    pub fn submit(&mut self, quad: Quad) {
        *self.pool.acquire() = quad;
    }

    /// Queue a new, reset quad and return it for filling in place.
    pub fn acquire(&mut self) -> &mut Quad {
        self.pool.acquire()
    }

    /// Number of quads waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.pool.len_active()
    }

    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }

    pub fn index_table(&self) -> &IndexTable {
        &self.index_table
    }

    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = BatchStats::default();
    }

    /// Sort, partition and draw every queued quad, then recycle them.
    ///
    /// Does nothing, and touches no backend state, when no quads are queued.
    /// Returns the number of backend draw calls issued.
    pub fn flush<B>(&mut self, sort_mode: SortMode, effect: Option<&Effect>, backend: &mut B) -> u64
    where
        B: RenderBackend + ?Sized,
    {
        profile_function!();
        if self.pool.is_empty() {
            return 0;
        }

        sort::sort_active(&mut self.pool, sort_mode, &mut self.texture_ranks);

        let sprite_count = self.pool.len_active();
        let mut draw_calls = 0;
        let mut chunks = 0;

        for chunk in self.pool.active().chunks(MAX_BATCH_SIZE) {
            profile_scope!("flush_chunk");
            chunks += 1;
            self.index_table.ensure_capacity(chunk.len());
            self.vertices.clear();

            let mut current: Option<Texture> = None;
            let mut run_start = 0;

            for &slot in chunk {
                let quad = self.pool.get(slot);
                if current.map(|texture| texture.id()) != Some(quad.texture.id()) {
                    if let Some(texture) = current {
                        draw_calls += draw_run(
                            backend,
                            effect,
                            texture,
                            &self.vertices,
                            run_start,
                            self.index_table.indices(),
                        );
                    }
                    run_start = self.vertices.len();
                    current = Some(quad.texture);
                }
                self.vertices.extend_from_slice(&quad.vertices);
            }

            if let Some(texture) = current {
                draw_calls += draw_run(
                    backend,
                    effect,
                    texture,
                    &self.vertices,
                    run_start,
                    self.index_table.indices(),
                );
            }
        }

        self.pool.release_all();

        self.stats.sprite_count += sprite_count as u64;
        self.stats.draw_calls += draw_calls;
        self.stats.flushes += 1;

        tracing::trace!(
            sprites = sprite_count,
            draw_calls,
            chunks,
            ?sort_mode,
            "Flushed sprite batch"
        );

        draw_calls
    }
}

/// Draw `vertices[run_start..]` with `texture`. Empty runs draw nothing.
fn draw_run<B>(
    backend: &mut B,
    effect: Option<&Effect>,
    texture: Texture,
    vertices: &[Vertex],
    run_start: usize,
    indices: &[u16],
) -> u64
where
    B: RenderBackend + ?Sized,
{
    let vertex_count = vertices.len() - run_start;
    if vertex_count == 0 {
        return 0;
    }

    let draw = IndexedDraw {
        vertices,
        vertex_offset: run_start,
        vertex_count,
        indices,
        index_offset: 0,
        primitive_count: vertex_count / VERTICES_PER_QUAD * 2,
    };

    match effect {
        None => {
            backend.bind_texture(texture);
            backend.draw_indexed_triangles(draw);
            1
        }
        Some(effect) => {
            for pass in 0..effect.pass_count() {
                backend.apply_shader_pass(effect, pass);
                // Applying a pass may have replaced the bound texture.
                backend.bind_texture(texture);
                backend.draw_indexed_triangles(draw);
            }
            effect.pass_count() as u64
        }
    }
}
