//! Test utilities for the spritebatch engine.
//!
//! - `MockRenderBackend` - records every [`RenderBackend`] call for
//!   verification (requires `mock` feature)
//! - [`fixtures`] - textures and sprite layouts for tests and benches
//!
//! [`RenderBackend`]: spritebatch_render::RenderBackend
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use spritebatch_render::{BatchDescriptor, SortMode, SpriteBatch};
//! use spritebatch_test_utils::{MockRenderBackend, fixtures};
//!
//! let mock = MockRenderBackend::default();
//! let mut batch = SpriteBatch::new(mock.clone());
//! let textures = fixtures::textures(2, 16);
//!
//! batch.begin(BatchDescriptor::new().sort_mode(SortMode::Texture)).unwrap();
//! for sprite in fixtures::sprite_grid(&textures, 10, 5) {
//!     batch.draw(&sprite).unwrap();
//! }
//! batch.end().unwrap();
//!
//! assert_eq!(mock.count_draws(), 2);
//! # }
//! ```

pub mod fixtures;
#[cfg(feature = "mock")]
pub mod mock_backend;

#[cfg(feature = "mock")]
pub use mock_backend::*;
