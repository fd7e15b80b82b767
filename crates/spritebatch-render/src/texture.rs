//! Texture handles as seen by the batcher.
//!
//! The batcher never touches pixel data. It only needs an identity to decide
//! where one draw call ends and the next begins, and the texel dimensions to
//! size quads and normalize source rectangles.

use std::sync::atomic::{AtomicU64, Ordering};

use spritebatch_core::geometry::Size;

/// Identity of a texture. Two textures are the same for batching purposes
/// exactly when their ids are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TextureId(pub u64);

impl TextureId {
    /// Null id
    pub const NULL: Self = Self(0);

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

/// Source of fresh ids for [`Texture::new`]. Starts at 1 so 0 stays null.
static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// A lightweight, copyable handle to a texture owned by the render backend.
///
/// The handle does not keep the texture alive; callers must keep the
/// backing resource valid until the batch that references it has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
}

impl Texture {
    /// The null handle. Drawing with it is rejected.
    pub const NULL: Self = Self {
        id: TextureId::NULL,
        width: 0,
        height: 0,
    };

    /// Create a handle with a freshly allocated id.
    pub fn new(width: u32, height: u32) -> Self {
        let id = TextureId(NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed));
        Self { id, width, height }
    }

    /// Create a handle for a texture the backend already identifies by `id`.
    ///
    /// Backends that keep their own resource tables use this so that the ids
    /// handed to [`RenderBackend::bind_texture`](crate::RenderBackend::bind_texture)
    /// can be looked up directly.
    pub const fn with_id(id: TextureId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    #[inline]
    pub const fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn size(&self) -> Size<u32> {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.id.is_null()
    }
}

impl Default for Texture {
    fn default() -> Self {
        Self::NULL
    }
}
