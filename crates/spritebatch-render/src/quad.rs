//! Vertex layout and the per-draw quad record.

use bytemuck::{Pod, Zeroable};
use spritebatch_core::math::{PackedVec2, PackedVec3};

use crate::texture::Texture;

/// A single sprite vertex.
///
/// 24 bytes, `#[repr(C)]`, ready for upload with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Screen-space position; `z` carries the sprite depth.
    pub position: PackedVec3,
    /// Tint color, packed RGBA (red in the low byte).
    pub color: u32,
    /// Normalized texture coordinates.
    pub uv: PackedVec2,
}

static_assertions::assert_eq_size!(Vertex, [u8; 24]);

impl Vertex {
    pub const fn new(position: PackedVec3, color: u32, uv: PackedVec2) -> Self {
        Self {
            position,
            color,
            uv,
        }
    }

    /// Returns the wgpu vertex buffer layout matching this struct.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRS: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            // location 0: position (vec3)
            0 => Float32x3,
            // location 1: color (packed rgba8)
            1 => Unorm8x4,
            // location 2: uv (vec2)
            2 => Float32x2,
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRS,
        }
    }
}

/// Corner order of [`Quad::vertices`].
pub const TOP_LEFT: usize = 0;
pub const TOP_RIGHT: usize = 1;
pub const BOTTOM_LEFT: usize = 2;
pub const BOTTOM_RIGHT: usize = 3;

/// The geometry of one draw request: four vertices, the texture they sample
/// and the depth used as a sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quad {
    pub texture: Texture,
    pub depth: f32,
    /// Top-left, top-right, bottom-left, bottom-right.
    pub vertices: [Vertex; 4],
}

impl Quad {
    /// Overwrite every field of this quad.
    pub fn set(&mut self, texture: Texture, depth: f32, vertices: [Vertex; 4]) {
        self.texture = texture;
        self.depth = depth;
        self.vertices = vertices;
    }

    /// Restore the default, empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_stride() {
        assert_eq!(Vertex::layout().array_stride, 24);
        assert_eq!(Vertex::layout().attributes.len(), 3);
    }

    #[test]
    fn test_vertex_bytes() {
        let vertices = [Vertex::default(); 4];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 96);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut quad = Quad::default();
        let vertex = Vertex::new(
            PackedVec3::new(1.0, 2.0, 3.0),
            0xFFFF_FFFF,
            PackedVec2::new(0.5, 0.5),
        );
        quad.set(Texture::new(4, 4), 0.25, [vertex; 4]);
        assert_ne!(quad, Quad::default());

        quad.reset();
        assert_eq!(quad, Quad::default());
        assert!(quad.texture.is_null());
    }
}
