//! The begin/draw/end session callers interact with.

use glam::{Mat4, Vec2};
use spritebatch_core::{
    Color,
    geometry::Rect,
    profiling::{profile_function, profile_scope},
};

use crate::{
    backend::RenderBackend,
    batcher::{BatchStats, Batcher},
    blend::BlendMode,
    depth::DepthMode,
    effect::Effect,
    error::{BatchError, BatchResult},
    raster::RasterMode,
    render_state::RenderState,
    sampler::SamplerMode,
    sort::SortMode,
    sprite::Sprite,
    texture::Texture,
};

/// Construction options for a [`SpriteBatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteBatchConfig {
    /// Quads pre-allocated in the pool, vertex scratch and index table.
    pub initial_capacity: usize,
}

impl Default for SpriteBatchConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 256,
        }
    }
}

/// Options for one `begin`/`end` pair.
///
/// Unset render-state fields fall back to [`RenderState::default`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchDescriptor {
    pub sort_mode: SortMode,
    pub blend: Option<BlendMode>,
    pub depth: Option<DepthMode>,
    pub raster: Option<RasterMode>,
    pub sampler: Option<SamplerMode>,
    pub effect: Option<Effect>,
    /// Applied before the viewport projection.
    pub transform: Option<Mat4>,
}

impl BatchDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    pub fn blend(mut self, blend: BlendMode) -> Self {
        self.blend = Some(blend);
        self
    }

    pub fn depth(mut self, depth: DepthMode) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn raster(mut self, raster: RasterMode) -> Self {
        self.raster = Some(raster);
        self
    }

    pub fn sampler(mut self, sampler: SamplerMode) -> Self {
        self.sampler = Some(sampler);
        self
    }

    pub fn effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn transform(mut self, transform: Mat4) -> Self {
        self.transform = Some(transform);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchState {
    Idle,
    Active,
}

/// Collects sprites between [`begin`](Self::begin) and [`end`](Self::end)
/// and hands them to a [`RenderBackend`] in as few draw calls as the sort
/// mode allows.
///
/// # Example
///
/// ```ignore
/// let mut batch = SpriteBatch::new(backend);
///
/// batch.begin(BatchDescriptor::new().sort_mode(SortMode::Texture))?;
/// batch.draw_at(player, Vec2::new(32.0, 32.0), Color::WHITE)?;
/// batch.draw(&Sprite::at(tiles, Vec2::ZERO).source(grass).depth(0.9))?;
/// batch.end()?;
/// ```
#[derive(Debug)]
pub struct SpriteBatch<B: RenderBackend> {
    backend: B,
    batcher: Batcher,
    state: BatchState,
    sort_mode: SortMode,
    render_state: RenderState,
    effect: Option<Effect>,
    transform: Mat4,
}

impl<B: RenderBackend> SpriteBatch<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, SpriteBatchConfig::default())
    }

    pub fn with_config(backend: B, config: SpriteBatchConfig) -> Self {
        tracing::debug!(
            initial_capacity = config.initial_capacity,
            "Creating sprite batch"
        );
        Self {
            backend,
            batcher: Batcher::with_capacity(config.initial_capacity),
            state: BatchState::Idle,
            sort_mode: SortMode::default(),
            render_state: RenderState::default(),
            effect: None,
            transform: Mat4::IDENTITY,
        }
    }

    /// Start collecting sprites.
    ///
    /// In [`SortMode::Immediate`] the render state is applied here; every
    /// other mode applies it at [`end`](Self::end).
    pub fn begin(&mut self, descriptor: BatchDescriptor) -> BatchResult<()> {
        if self.state == BatchState::Active {
            tracing::warn!("SpriteBatch::begin called while a batch is already active");
            return Err(BatchError::BeginWithoutEnd);
        }
        if let Some(effect) = &descriptor.effect
            && effect.pass_count() == 0
        {
            return Err(BatchError::EffectWithoutPasses {
                name: effect.name().to_owned(),
            });
        }

        let BatchDescriptor {
            sort_mode,
            blend,
            depth,
            raster,
            sampler,
            effect,
            transform,
        } = descriptor;

        self.sort_mode = sort_mode;
        self.render_state = RenderState::resolve(blend, depth, raster, sampler);
        self.effect = effect;
        self.transform = transform.unwrap_or(Mat4::IDENTITY);
        self.state = BatchState::Active;

        if self.sort_mode == SortMode::Immediate {
            self.apply_render_state();
        }
        Ok(())
    }

    /// Queue one sprite. Flushes straight away in [`SortMode::Immediate`].
    pub fn draw(&mut self, sprite: &Sprite) -> BatchResult<()> {
        profile_function!();
        if self.state != BatchState::Active {
            tracing::warn!("SpriteBatch::draw called outside begin/end");
            return Err(BatchError::DrawWithoutBegin);
        }
        sprite.validate()?;

        self.batcher
            .acquire()
            .set(sprite.texture, sprite.depth, sprite.vertices());

        if self.sort_mode == SortMode::Immediate {
            self.flush(false);
        }
        Ok(())
    }

    /// Draw a whole texture with its top-left corner at `position`.
    pub fn draw_at(&mut self, texture: Texture, position: Vec2, color: Color) -> BatchResult<()> {
        self.draw(&Sprite::at(texture, position).color(color))
    }

    /// Draw a whole texture stretched over `destination`.
    pub fn draw_rect(
        &mut self,
        texture: Texture,
        destination: Rect<f32>,
        color: Color,
    ) -> BatchResult<()> {
        self.draw(&Sprite::stretched(texture, destination).color(color))
    }

    /// Flush everything queued since [`begin`](Self::begin) and return to idle.
    pub fn end(&mut self) -> BatchResult<()> {
        if self.state != BatchState::Active {
            tracing::warn!("SpriteBatch::end called without a matching begin");
            return Err(BatchError::EndWithoutBegin);
        }

        self.flush(self.sort_mode != SortMode::Immediate);
        self.state = BatchState::Idle;
        self.effect = None;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.state == BatchState::Active
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Render state resolved by the last [`begin`](Self::begin).
    pub fn render_state(&self) -> &RenderState {
        &self.render_state
    }

    pub fn stats(&self) -> BatchStats {
        self.batcher.stats()
    }

    pub fn reset_stats(&mut self) {
        self.batcher.reset_stats();
    }

    /// Sprites queued and not yet flushed.
    pub fn pending(&self) -> usize {
        self.batcher.pending()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn apply_render_state(&mut self) {
        profile_scope!("apply_render_state");
        self.backend.apply_render_state(&self.render_state);
        let projection = self.backend.viewport().projection();
        self.backend.set_transform(projection * self.transform);
    }

    fn flush(&mut self, apply_state: bool) {
        if apply_state {
            self.apply_render_state();
        }
        self.batcher
            .flush(self.sort_mode, self.effect.as_ref(), &mut self.backend);
    }
}
