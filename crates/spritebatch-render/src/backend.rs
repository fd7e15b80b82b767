//! The `RenderBackend` trait: everything the batcher needs from a graphics device.

use glam::Mat4;

use crate::{effect::Effect, quad::Vertex, render_state::RenderState, texture::Texture};

/// The render target area the default sprite projection maps onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A viewport at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Orthographic projection mapping pixels (origin top-left, y down) to
    /// clip space. Sprite depth `0..=1` maps to clip depth `0..=1`.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width, self.height, 0.0, 0.0, -1.0)
    }
}

/// Arguments for one indexed draw call.
///
/// `indices` are relative to `vertex_offset`: index `0` addresses
/// `vertices[vertex_offset]`.
#[derive(Debug, Clone, Copy)]
pub struct IndexedDraw<'a> {
    pub vertices: &'a [Vertex],
    pub vertex_offset: usize,
    pub vertex_count: usize,
    pub indices: &'a [u16],
    pub index_offset: usize,
    /// Two triangles per quad: `vertex_count / 4 * 2`.
    pub primitive_count: usize,
}

impl IndexedDraw<'_> {
    /// The vertices this draw covers.
    pub fn vertex_range(&self) -> &[Vertex] {
        &self.vertices[self.vertex_offset..self.vertex_offset + self.vertex_count]
    }

    /// The indices this draw consumes.
    pub fn index_range(&self) -> &[u16] {
        &self.indices[self.index_offset..self.index_offset + self.primitive_count * 3]
    }
}

/// Graphics device operations used by [`SpriteBatch`](crate::SpriteBatch).
///
/// The batch calls these synchronously from `begin`, `draw` and `end`, on the
/// caller's thread. Implementations own every GPU resource; the batch only
/// passes handles and CPU-side vertex data.
///
/// Call order for each run of same-texture quads:
///
/// ```text
/// without an effect:  bind_texture, draw_indexed_triangles
/// with P passes:      (apply_shader_pass(p), bind_texture, draw_indexed_triangles) x P
/// ```
pub trait RenderBackend {
    /// The viewport the default projection is built from.
    fn viewport(&self) -> Viewport;

    /// Set blend, depth, rasterizer and sampler state for subsequent draws.
    fn apply_render_state(&mut self, state: &RenderState);

    /// Set the combined projection and caller transform for subsequent draws.
    fn set_transform(&mut self, matrix: Mat4);

    /// Apply one pass of a custom effect. May clobber texture bindings.
    fn apply_shader_pass(&mut self, effect: &Effect, pass: u32);

    /// Bind the texture sampled by subsequent draws.
    fn bind_texture(&mut self, texture: Texture);

    /// Issue one indexed triangle-list draw.
    ///
    /// `draw.vertex_count` never exceeds `MAX_BATCH_SIZE * 4` and
    /// `draw.indices` always holds at least `primitive_count * 3` entries.
    fn draw_indexed_triangles(&mut self, draw: IndexedDraw<'_>);
}

impl<B: RenderBackend + ?Sized> RenderBackend for &mut B {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn apply_render_state(&mut self, state: &RenderState) {
        (**self).apply_render_state(state)
    }

    fn set_transform(&mut self, matrix: Mat4) {
        (**self).set_transform(matrix)
    }

    fn apply_shader_pass(&mut self, effect: &Effect, pass: u32) {
        (**self).apply_shader_pass(effect, pass)
    }

    fn bind_texture(&mut self, texture: Texture) {
        (**self).bind_texture(texture)
    }

    fn draw_indexed_triangles(&mut self, draw: IndexedDraw<'_>) {
        (**self).draw_indexed_triangles(draw)
    }
}

impl<B: RenderBackend + ?Sized> RenderBackend for Box<B> {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn apply_render_state(&mut self, state: &RenderState) {
        (**self).apply_render_state(state)
    }

    fn set_transform(&mut self, matrix: Mat4) {
        (**self).set_transform(matrix)
    }

    fn apply_shader_pass(&mut self, effect: &Effect, pass: u32) {
        (**self).apply_shader_pass(effect, pass)
    }

    fn bind_texture(&mut self, texture: Texture) {
        (**self).bind_texture(texture)
    }

    fn draw_indexed_triangles(&mut self, draw: IndexedDraw<'_>) {
        (**self).draw_indexed_triangles(draw)
    }
}
