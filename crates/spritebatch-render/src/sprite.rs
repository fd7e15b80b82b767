//! Draw requests and their conversion into quad geometry.
//!
//! A [`Sprite`] describes one textured quad the way callers think about it:
//! where it goes, which part of the texture it shows, how it is tinted,
//! rotated, scaled and flipped. [`Sprite::vertices`] turns that into the four
//! vertices the batcher stores.
//!
//! # Example
//!
//! ```
//! use spritebatch_core::{Color, geometry::Rect, math::Vec2};
//! use spritebatch_render::{Sprite, SpriteFlip, Texture};
//!
//! let sheet = Texture::new(128, 128);
//!
//! // Frame (1, 0) of a 32x32 sheet, centered on (200, 150), mirrored.
//! let sprite = Sprite::at(sheet, Vec2::new(200.0, 150.0))
//!     .source(Rect::new(32.0, 0.0, 32.0, 32.0))
//!     .origin(Vec2::new(16.0, 16.0))
//!     .color(Color::rgba(1.0, 1.0, 1.0, 0.5))
//!     .flip(SpriteFlip::HORIZONTAL)
//!     .depth(0.5);
//!
//! let [top_left, ..] = sprite.vertices();
//! assert_eq!(top_left.position.x, 184.0);
//! assert_eq!(top_left.uv.x, 0.5);
//! ```

use bitflags::bitflags;
use glam::Vec2;
use spritebatch_core::{
    Color,
    geometry::{Rect, Size},
    math::{PackedVec2, PackedVec3},
};

use crate::{
    error::{BatchError, BatchResult},
    quad::Vertex,
    texture::Texture,
};

bitflags! {
    /// Mirroring applied to a sprite's texture coordinates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SpriteFlip: u8 {
        const HORIZONTAL = 1;
        const VERTICAL = 1 << 1;
    }
}

/// UV coordinates for a sprite (normalized 0-1 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteUv {
    /// U coordinate of the left edge
    pub u_min: f32,
    /// V coordinate of the top edge
    pub v_min: f32,
    /// U coordinate of the right edge
    pub u_max: f32,
    /// V coordinate of the bottom edge
    pub v_max: f32,
}

impl SpriteUv {
    /// The whole texture.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(u_min: f32, v_min: f32, u_max: f32, v_max: f32) -> Self {
        Self {
            u_min,
            v_min,
            u_max,
            v_max,
        }
    }

    /// Normalize a pixel-space source rectangle against the texture size.
    pub fn from_source(source: Rect<f32>, texture: Size<u32>) -> Self {
        let width = texture.width as f32;
        let height = texture.height as f32;
        Self {
            u_min: source.x / width,
            v_min: source.y / height,
            u_max: source.right() / width,
            v_max: source.bottom() / height,
        }
    }

    /// Flip the sprite horizontally.
    pub fn flip_horizontal(&self) -> Self {
        Self {
            u_min: self.u_max,
            u_max: self.u_min,
            ..*self
        }
    }

    /// Flip the sprite vertically.
    pub fn flip_vertical(&self) -> Self {
        Self {
            v_min: self.v_max,
            v_max: self.v_min,
            ..*self
        }
    }

    pub fn flipped(&self, flip: SpriteFlip) -> Self {
        let mut uv = *self;
        if flip.contains(SpriteFlip::HORIZONTAL) {
            uv = uv.flip_horizontal();
        }
        if flip.contains(SpriteFlip::VERTICAL) {
            uv = uv.flip_vertical();
        }
        uv
    }
}

/// Where a sprite is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Destination {
    /// Top-left (before origin offset) at this point, sized by the source
    /// region times the scale.
    Position(Vec2),
    /// Stretched to fill this rectangle. The scale is ignored.
    Rect(Rect<f32>),
}

/// One draw request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub texture: Texture,
    pub destination: Destination,
    /// Texel region to draw; the whole texture when `None`.
    pub source: Option<Rect<f32>>,
    pub color: Color,
    /// Clockwise rotation in radians around the origin.
    pub rotation: f32,
    /// Rotation and placement origin, in source texels.
    pub origin: Vec2,
    pub scale: Vec2,
    pub flip: SpriteFlip,
    /// Sort key for the depth sort modes, also written to vertex `z`.
    pub depth: f32,
}

impl Sprite {
    fn new(texture: Texture, destination: Destination) -> Self {
        Self {
            texture,
            destination,
            source: None,
            color: Color::WHITE,
            rotation: 0.0,
            origin: Vec2::ZERO,
            scale: Vec2::ONE,
            flip: SpriteFlip::empty(),
            depth: 0.0,
        }
    }

    /// Draw `texture` with its top-left corner at `position`.
    pub fn at(texture: Texture, position: Vec2) -> Self {
        Self::new(texture, Destination::Position(position))
    }

    /// Draw `texture` stretched over `destination`.
    pub fn stretched(texture: Texture, destination: Rect<f32>) -> Self {
        Self::new(texture, Destination::Rect(destination))
    }

    pub fn source(mut self, source: Rect<f32>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn uniform_scale(self, scale: f32) -> Self {
        self.scale(Vec2::splat(scale))
    }

    pub fn flip(mut self, flip: SpriteFlip) -> Self {
        self.flip = flip;
        self
    }

    pub fn depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Reject textures the batch cannot draw.
    pub fn validate(&self) -> BatchResult<()> {
        if self.texture.is_null() {
            return Err(BatchError::NullTexture);
        }
        if self.texture.width() == 0 || self.texture.height() == 0 {
            return Err(BatchError::EmptyTexture {
                width: self.texture.width(),
                height: self.texture.height(),
            });
        }
        Ok(())
    }

    /// Size of the source region in texels.
    fn source_size(&self) -> Vec2 {
        match self.source {
            Some(source) => Vec2::new(source.width, source.height),
            None => Vec2::new(self.texture.width() as f32, self.texture.height() as f32),
        }
    }

    /// Texture coordinates after flipping.
    pub fn uv(&self) -> SpriteUv {
        let uv = match self.source {
            Some(source) => SpriteUv::from_source(source, self.texture.size()),
            None => SpriteUv::FULL,
        };
        uv.flipped(self.flip)
    }

    /// Build the quad's vertices: top-left, top-right, bottom-left,
    /// bottom-right.
    ///
    /// Expects a texture that passed [`Sprite::validate`].
    pub fn vertices(&self) -> [Vertex; 4] {
        let source = self.source_size();

        let (position, size, origin) = match self.destination {
            Destination::Position(position) => {
                (position, source * self.scale, self.origin * self.scale)
            }
            Destination::Rect(rect) => {
                let size = Vec2::new(rect.width, rect.height);
                // Origin is given in source texels; map it onto the rectangle.
                let stretch = Vec2::new(
                    if source.x > 0.0 { size.x / source.x } else { 0.0 },
                    if source.y > 0.0 { size.y / source.y } else { 0.0 },
                );
                (Vec2::new(rect.x, rect.y), size, self.origin * stretch)
            }
        };

        let rotation = Vec2::from_angle(self.rotation);
        let corner = |offset: Vec2| {
            let p = position + rotation.rotate(offset - origin);
            PackedVec3::new(p.x, p.y, self.depth)
        };

        let uv = self.uv();
        let color = self.color.to_packed();

        [
            Vertex::new(corner(Vec2::ZERO), color, PackedVec2::new(uv.u_min, uv.v_min)),
            Vertex::new(
                corner(Vec2::new(size.x, 0.0)),
                color,
                PackedVec2::new(uv.u_max, uv.v_min),
            ),
            Vertex::new(
                corner(Vec2::new(0.0, size.y)),
                color,
                PackedVec2::new(uv.u_min, uv.v_max),
            ),
            Vertex::new(corner(size), color, PackedVec2::new(uv.u_max, uv.v_max)),
        ]
    }
}
