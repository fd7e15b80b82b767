//! Ordering policies applied to queued quads before a flush.

use ahash::AHashMap;

use crate::{pool::ItemPool, texture::TextureId};

/// How queued sprites are ordered when a batch is flushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Submission order, one flush at `end`.
    #[default]
    Deferred,
    /// Submission order, one flush after every draw.
    Immediate,
    /// Grouped by texture. Groups appear in the order each texture was first
    /// drawn; sprites inside a group keep submission order.
    Texture,
    /// Ascending depth; equal depths keep submission order.
    FrontToBack,
    /// Descending depth; equal depths keep submission order.
    BackToFront,
}

impl SortMode {
    /// Whether this mode reorders sprites at all.
    pub fn reorders(self) -> bool {
        !matches!(self, SortMode::Deferred | SortMode::Immediate)
    }
}

/// Stable-sort the pool's active list according to `mode`.
///
/// `ranks` is scratch storage reused across flushes.
pub(crate) fn sort_active(pool: &mut ItemPool, mode: SortMode, ranks: &mut AHashMap<TextureId, u32>) {
    match mode {
        SortMode::Deferred | SortMode::Immediate => {}
        SortMode::Texture => {
            // Rank each texture by first appearance so the sort key is a total
            // order that still clusters equal textures.
            ranks.clear();
            for &slot in pool.active() {
                let next = ranks.len() as u32;
                ranks.entry(pool.get(slot).texture.id()).or_insert(next);
            }
            // A single texture needs no reordering.
            if ranks.len() > 1 {
                pool.sort_active_by_key(|quad| ranks[&quad.texture.id()]);
            }
        }
        SortMode::FrontToBack => pool.sort_active_by(|a, b| a.depth.total_cmp(&b.depth)),
        SortMode::BackToFront => pool.sort_active_by(|a, b| b.depth.total_cmp(&a.depth)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;

    fn fill(pool: &mut ItemPool, items: &[(Texture, f32)]) {
        for &(texture, depth) in items {
            let quad = pool.acquire();
            quad.texture = texture;
            quad.depth = depth;
        }
    }

    #[test]
    fn test_deferred_keeps_order() {
        let mut pool = ItemPool::new();
        let a = Texture::new(1, 1);
        fill(&mut pool, &[(a, 3.0), (a, 1.0), (a, 2.0)]);
        sort_active(&mut pool, SortMode::Deferred, &mut AHashMap::new());
        assert_eq!(pool.active(), &[0, 1, 2]);
    }

    #[test]
    fn test_texture_groups_by_first_appearance() {
        let mut pool = ItemPool::new();
        let a = Texture::new(1, 1);
        let b = Texture::new(1, 1);
        let c = Texture::new(1, 1);
        fill(&mut pool, &[(b, 0.0), (a, 0.0), (b, 0.0), (c, 0.0), (a, 0.0)]);
        sort_active(&mut pool, SortMode::Texture, &mut AHashMap::new());
        assert_eq!(pool.active(), &[0, 2, 1, 4, 3]);
    }

    #[test]
    fn test_front_to_back_is_stable() {
        let mut pool = ItemPool::new();
        let a = Texture::new(1, 1);
        fill(&mut pool, &[(a, 0.5), (a, 0.1), (a, 0.5), (a, 0.1)]);
        sort_active(&mut pool, SortMode::FrontToBack, &mut AHashMap::new());
        assert_eq!(pool.active(), &[1, 3, 0, 2]);
    }

    #[test]
    fn test_back_to_front_is_stable() {
        let mut pool = ItemPool::new();
        let a = Texture::new(1, 1);
        fill(&mut pool, &[(a, 0.5), (a, 0.1), (a, 0.5), (a, 0.9)]);
        sort_active(&mut pool, SortMode::BackToFront, &mut AHashMap::new());
        assert_eq!(pool.active(), &[3, 0, 2, 1]);
    }

    #[test]
    fn test_reorders() {
        assert!(!SortMode::Deferred.reorders());
        assert!(!SortMode::Immediate.reorders());
        assert!(SortMode::Texture.reorders());
        assert!(SortMode::BackToFront.reorders());
    }
}
