//! Spritebatch Render
//!
//! Collects individually submitted textured quads and turns them into as few
//! indexed draw calls as possible. The graphics device sits behind the
//! [`RenderBackend`] trait; this crate owns no GPU resources.
//!
//! ```ignore
//! use spritebatch_render::{BatchDescriptor, SortMode, SpriteBatch};
//!
//! let mut batch = SpriteBatch::new(backend);
//! batch.begin(BatchDescriptor::new().sort_mode(SortMode::Texture))?;
//! for enemy in &enemies {
//!     batch.draw_at(enemy.texture, enemy.position, Color::WHITE)?;
//! }
//! batch.end()?;
//! ```

pub mod backend;
pub mod batcher;
pub mod blend;
pub mod depth;
pub mod effect;
pub mod error;
pub mod index_table;
pub mod pool;
pub mod quad;
pub mod raster;
pub mod render_state;
pub mod sampler;
pub mod sort;
pub mod sprite;
pub mod sprite_batch;
pub mod texture;

pub use backend::{IndexedDraw, RenderBackend, Viewport};
pub use batcher::{BatchStats, Batcher};
pub use blend::BlendMode;
pub use depth::DepthMode;
pub use effect::{Effect, EffectId};
pub use error::{BatchError, BatchResult, ErrorKind};
pub use index_table::{INDICES_PER_QUAD, IndexTable, MAX_BATCH_SIZE, VERTICES_PER_QUAD};
pub use pool::ItemPool;
pub use quad::{Quad, Vertex};
pub use raster::RasterMode;
pub use render_state::RenderState;
pub use sampler::SamplerMode;
pub use sort::SortMode;
pub use sprite::{Destination, Sprite, SpriteFlip, SpriteUv};
pub use sprite_batch::{BatchDescriptor, SpriteBatch, SpriteBatchConfig};
pub use texture::{Texture, TextureId};

// Re-export wgpu so backends can use the matching descriptor types
pub use wgpu;

// Re-export core types used throughout the public API
pub use spritebatch_core::{Color, geometry::Rect, math::Vec2};
