/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// This module re-exports all types and functions from the [`glam`] crate.
/// Sprite positions, origins and scales are [`Vec2`]; transforms are [`Mat4`].
///
/// # Examples
///
/// ```
/// use spritebatch_core::math::{Mat4, Vec2, Vec3};
///
/// let position = Vec2::new(10.0, 20.0);
/// let camera = Mat4::from_translation(Vec3::new(-position.x, -position.y, 0.0));
/// assert_eq!(camera.transform_point3(Vec3::new(10.0, 20.0, 0.0)), Vec3::ZERO);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

/// Packed vector types for GPU buffer uploads.
///
/// These are `#[repr(C)]` and [`bytemuck::Pod`], so slices of vertices built
/// from them can be cast straight to bytes:
///
/// ```
/// use spritebatch_core::math::PackedVec2;
/// use bytemuck::cast_slice;
///
/// let uvs = [PackedVec2 { x: 0.0, y: 0.0 }, PackedVec2 { x: 1.0, y: 1.0 }];
/// let bytes: &[u8] = cast_slice(&uvs);
/// assert_eq!(bytes.len(), 16);
/// ```
pub mod packed {
    use bytemuck::{Pod, Zeroable};

    /// A 2D vector with guaranteed `#[repr(C)]` layout for GPU uploads.
    ///
    /// ```text
    /// Offset | Field | Size
    /// -------|-------|------
    /// 0      | x     | 4 bytes (f32)
    /// 4      | y     | 4 bytes (f32)
    /// Total: 8 bytes
    /// ```
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec2 {
        pub x: f32,
        pub y: f32,
    }

    /// A 3D vector with guaranteed `#[repr(C)]` layout for GPU uploads.
    ///
    /// ```text
    /// Offset | Field | Size
    /// -------|-------|------
    /// 0      | x     | 4 bytes (f32)
    /// 4      | y     | 4 bytes (f32)
    /// 8      | z     | 4 bytes (f32)
    /// Total: 12 bytes
    /// ```
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec3 {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }

    impl Vec2 {
        pub const fn new(x: f32, y: f32) -> Self {
            Self { x, y }
        }
    }

    impl Vec3 {
        pub const fn new(x: f32, y: f32, z: f32) -> Self {
            Self { x, y, z }
        }
    }

    impl From<glam::Vec2> for Vec2 {
        fn from(v: glam::Vec2) -> Self {
            Self { x: v.x, y: v.y }
        }
    }

    impl From<glam::Vec3> for Vec3 {
        fn from(v: glam::Vec3) -> Self {
            Self {
                x: v.x,
                y: v.y,
                z: v.z,
            }
        }
    }
}

pub use fast::*;
pub use packed::{Vec2 as PackedVec2, Vec3 as PackedVec3};
