//! Texture and sprite fixtures shared by tests and benches.

use glam::Vec2;
use spritebatch_render::{Sprite, Texture};

/// `count` distinct square textures of `size` texels.
pub fn textures(count: usize, size: u32) -> Vec<Texture> {
    (0..count).map(|_| Texture::new(size, size)).collect()
}

/// `count` sprites laid out on a grid, cycling through `textures`.
///
/// Sprite `i` uses `textures[i % textures.len()]` and depth `i / count`, so
/// submission order, texture and depth are all distinguishable.
pub fn sprite_grid(textures: &[Texture], count: usize, columns: usize) -> Vec<Sprite> {
    assert!(!textures.is_empty(), "sprite_grid needs at least one texture");
    let columns = columns.max(1);
    (0..count)
        .map(|i| {
            let texture = textures[i % textures.len()];
            let cell = Vec2::new((i % columns) as f32, (i / columns) as f32);
            Sprite::at(texture, cell * texture.width() as f32).depth(i as f32 / count as f32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textures_are_distinct() {
        let textures = textures(3, 8);
        assert_ne!(textures[0].id(), textures[1].id());
        assert_ne!(textures[1].id(), textures[2].id());
        assert!(textures.iter().all(|t| t.width() == 8 && t.height() == 8));
    }

    #[test]
    fn test_sprite_grid_cycles_textures() {
        let textures = textures(2, 4);
        let sprites = sprite_grid(&textures, 5, 2);
        assert_eq!(sprites.len(), 5);
        assert_eq!(sprites[2].texture, textures[0]);
        assert_eq!(sprites[3].texture, textures[1]);
    }
}
