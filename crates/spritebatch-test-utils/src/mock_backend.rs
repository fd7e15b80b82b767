//! Mock implementation of RenderBackend for testing.
//!
//! This module provides a backend that records every call the sprite batch
//! makes without touching a GPU.

use std::sync::Arc;

use glam::Mat4;
use parking_lot::Mutex;
use spritebatch_render::{
    Effect, EffectId, IndexedDraw, RenderBackend, RenderState, Texture, TextureId, Vertex,
    Viewport,
};

/// Records a backend call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    ApplyRenderState(RenderState),
    SetTransform(Mat4),
    ApplyShaderPass {
        effect: EffectId,
        pass: u32,
    },
    BindTexture(TextureId),
    DrawIndexed {
        /// Texture bound when the draw was issued.
        texture: Option<TextureId>,
        vertex_offset: usize,
        vertex_count: usize,
        index_offset: usize,
        primitive_count: usize,
        /// Largest index consumed by the draw.
        max_index: u16,
        /// Copy of the vertices the draw covers.
        vertices: Vec<Vertex>,
    },
}

#[derive(Debug, Default)]
struct Recording {
    calls: Vec<BackendCall>,
    bound: Option<TextureId>,
}

/// Mock implementation of RenderBackend for testing.
///
/// Clones share one recording, so a test can hand one clone to a
/// `SpriteBatch` and inspect another.
///
/// # Example
///
/// ```rust
/// use spritebatch_render::{BatchDescriptor, Color, SpriteBatch, Texture, Vec2};
/// use spritebatch_test_utils::MockRenderBackend;
///
/// let mock = MockRenderBackend::new(800.0, 600.0);
/// let mut batch = SpriteBatch::new(mock.clone());
///
/// let texture = Texture::new(16, 16);
/// batch.begin(BatchDescriptor::default()).unwrap();
/// batch.draw_at(texture, Vec2::ZERO, Color::WHITE).unwrap();
/// batch.draw_at(texture, Vec2::new(16.0, 0.0), Color::WHITE).unwrap();
/// batch.end().unwrap();
///
/// assert_eq!(mock.count_draws(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockRenderBackend {
    viewport: Viewport,
    recording: Arc<Mutex<Recording>>,
}

impl MockRenderBackend {
    /// Create a mock with a viewport of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::from_size(width, height),
            recording: Arc::default(),
        }
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<BackendCall> {
        self.recording.lock().calls.clone()
    }

    /// Only the draw calls, in issue order.
    pub fn draws(&self) -> Vec<BackendCall> {
        self.recording
            .lock()
            .calls
            .iter()
            .filter(|call| matches!(call, BackendCall::DrawIndexed { .. }))
            .cloned()
            .collect()
    }

    /// Count draw calls.
    pub fn count_draws(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::DrawIndexed { .. }))
    }

    /// Count texture binds.
    pub fn count_texture_binds(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::BindTexture(_)))
    }

    /// Count render state applications.
    pub fn count_state_applies(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::ApplyRenderState(_)))
    }

    /// Count shader pass applications.
    pub fn count_shader_passes(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::ApplyShaderPass { .. }))
    }

    /// Texture bound for each draw, in issue order.
    pub fn drawn_textures(&self) -> Vec<Option<TextureId>> {
        self.recording
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::DrawIndexed { texture, .. } => Some(*texture),
                _ => None,
            })
            .collect()
    }

    /// Every vertex drawn, concatenated in issue order.
    pub fn drawn_vertices(&self) -> Vec<Vertex> {
        self.recording
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::DrawIndexed { vertices, .. } => Some(vertices.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.recording.lock().calls.clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.recording.lock().calls.len()
    }

    fn count(&self, predicate: impl Fn(&BackendCall) -> bool) -> usize {
        self.recording
            .lock()
            .calls
            .iter()
            .filter(|call| predicate(call))
            .count()
    }

    fn record(&self, call: BackendCall) {
        self.recording.lock().calls.push(call);
    }
}

impl Default for MockRenderBackend {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl RenderBackend for MockRenderBackend {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn apply_render_state(&mut self, state: &RenderState) {
        self.record(BackendCall::ApplyRenderState(*state));
    }

    fn set_transform(&mut self, matrix: Mat4) {
        self.record(BackendCall::SetTransform(matrix));
    }

    fn apply_shader_pass(&mut self, effect: &Effect, pass: u32) {
        let mut recording = self.recording.lock();
        // A pass binds its own resources.
        recording.bound = None;
        recording.calls.push(BackendCall::ApplyShaderPass {
            effect: effect.id(),
            pass,
        });
    }

    fn bind_texture(&mut self, texture: Texture) {
        let mut recording = self.recording.lock();
        recording.bound = Some(texture.id());
        recording.calls.push(BackendCall::BindTexture(texture.id()));
    }

    fn draw_indexed_triangles(&mut self, draw: IndexedDraw<'_>) {
        let max_index = draw.index_range().iter().copied().max().unwrap_or(0);
        let vertices = draw.vertex_range().to_vec();

        let mut recording = self.recording.lock();
        let texture = recording.bound;
        recording.calls.push(BackendCall::DrawIndexed {
            texture,
            vertex_offset: draw.vertex_offset,
            vertex_count: draw.vertex_count,
            index_offset: draw.index_offset,
            primitive_count: draw.primitive_count,
            max_index,
            vertices,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spritebatch_render::{BatchDescriptor, Color, SpriteBatch, Vec2};

    #[test]
    fn test_clones_share_recording() {
        let mock = MockRenderBackend::default();
        let mut other = mock.clone();
        other.bind_texture(Texture::new(1, 1));
        assert_eq!(mock.count_texture_binds(), 1);
    }

    #[test]
    fn test_draw_records_bound_texture() {
        let mock = MockRenderBackend::default();
        let texture = Texture::new(2, 2);
        let mut batch = SpriteBatch::new(mock.clone());

        batch.begin(BatchDescriptor::default()).unwrap();
        batch.draw_at(texture, Vec2::ZERO, Color::WHITE).unwrap();
        batch.end().unwrap();

        assert_eq!(mock.drawn_textures(), vec![Some(texture.id())]);
        assert_eq!(mock.drawn_vertices().len(), 4);
        match &mock.draws()[0] {
            BackendCall::DrawIndexed {
                max_index,
                primitive_count,
                ..
            } => {
                assert_eq!(*max_index, 3);
                assert_eq!(*primitive_count, 2);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn test_clear_calls() {
        let mut mock = MockRenderBackend::default();
        mock.set_transform(Mat4::IDENTITY);
        assert_eq!(mock.call_count(), 1);

        mock.clear_calls();
        assert_eq!(mock.call_count(), 0);
    }
}
