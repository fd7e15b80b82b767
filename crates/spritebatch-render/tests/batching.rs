//! Flush-level properties: pooling, sorting, run coalescing and chunking.

use spritebatch_render::{
    Batcher, MAX_BATCH_SIZE, Quad, SortMode, Texture, VERTICES_PER_QUAD,
};
use spritebatch_test_utils::{BackendCall, MockRenderBackend};

fn quad(texture: Texture, depth: f32) -> Quad {
    Quad {
        texture,
        depth,
        ..Default::default()
    }
}

/// Tag each quad's first vertex with its submission index so order can be
/// read back from the drawn vertices.
fn tagged(texture: Texture, depth: f32, tag: usize) -> Quad {
    let mut quad = quad(texture, depth);
    quad.vertices[0].position.x = tag as f32;
    quad
}

fn drawn_tags(mock: &MockRenderBackend) -> Vec<usize> {
    mock.drawn_vertices()
        .chunks(VERTICES_PER_QUAD)
        .map(|quad| quad[0].position.x as usize)
        .collect()
}

#[test]
fn test_pooling_conservation() {
    let texture = Texture::new(8, 8);
    let mut batcher = Batcher::new();
    let mut mock = MockRenderBackend::default();

    for _ in 0..5 {
        batcher.submit(quad(texture, 0.0));
    }
    batcher.flush(SortMode::Deferred, None, &mut mock);
    let free_before = batcher.pool().len_free();
    assert_eq!(free_before, 5);

    // Seven quads: five reused, two newly allocated.
    for _ in 0..7 {
        batcher.submit(quad(texture, 0.0));
    }
    assert_eq!(batcher.pool().len_active(), 7);
    assert_eq!(batcher.pool().len_free(), 0);

    batcher.flush(SortMode::Deferred, None, &mut mock);
    assert_eq!(batcher.pool().len_active(), 0);
    assert_eq!(batcher.pool().len_free(), free_before + 2);
    assert_eq!(batcher.pool().capacity(), 7);
}

#[test]
fn test_depth_ties_keep_submission_order() {
    let texture = Texture::new(8, 8);
    let depths = [0.5, 0.2, 0.5, 0.2, 0.9, 0.5];

    for (mode, expected) in [
        (SortMode::FrontToBack, vec![1, 3, 0, 2, 5, 4]),
        (SortMode::BackToFront, vec![4, 0, 2, 5, 1, 3]),
    ] {
        let mut batcher = Batcher::new();
        let mut mock = MockRenderBackend::default();
        for (tag, &depth) in depths.iter().enumerate() {
            batcher.submit(tagged(texture, depth, tag));
        }
        batcher.flush(mode, None, &mut mock);
        assert_eq!(drawn_tags(&mock), expected, "{mode:?}");
    }
}

#[test]
fn test_texture_ties_keep_submission_order() {
    let a = Texture::new(8, 8);
    let b = Texture::new(8, 8);
    let mut batcher = Batcher::new();
    let mut mock = MockRenderBackend::default();

    for (tag, texture) in [b, a, b, a, b].into_iter().enumerate() {
        batcher.submit(tagged(texture, 0.0, tag));
    }
    batcher.flush(SortMode::Texture, None, &mut mock);

    assert_eq!(drawn_tags(&mock), vec![0, 2, 4, 1, 3]);
    assert_eq!(mock.drawn_textures(), vec![Some(b.id()), Some(a.id())]);
}

#[test]
fn test_one_draw_per_texture_run() {
    let textures: Vec<_> = (0..3).map(|_| Texture::new(4, 4)).collect();
    let (a, b, c) = (textures[0], textures[1], textures[2]);
    let sequence = [a, a, a, b, b, c, a, a, c, c];

    let mut batcher = Batcher::new();
    let mut mock = MockRenderBackend::default();
    for texture in sequence {
        batcher.submit(quad(texture, 0.0));
    }
    let draws = batcher.flush(SortMode::Deferred, None, &mut mock);

    assert_eq!(draws, 5);
    assert_eq!(mock.count_draws(), 5);
    let counts: Vec<_> = mock
        .draws()
        .iter()
        .map(|call| match call {
            BackendCall::DrawIndexed { vertex_count, .. } => vertex_count / VERTICES_PER_QUAD,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(counts, vec![3, 2, 1, 2, 2]);
}

#[test]
fn test_chunk_boundary_splits_draws() {
    let texture = Texture::new(4, 4);
    let mut batcher = Batcher::new();
    let mut mock = MockRenderBackend::default();

    for _ in 0..MAX_BATCH_SIZE + 1 {
        batcher.submit(quad(texture, 0.0));
    }
    assert_eq!(batcher.flush(SortMode::Deferred, None, &mut mock), 2);

    let draws = mock.draws();
    assert_eq!(draws.len(), 2);

    let expected_quads = [MAX_BATCH_SIZE, 1];
    for (call, quads) in draws.iter().zip(expected_quads) {
        let BackendCall::DrawIndexed {
            vertex_offset,
            vertex_count,
            index_offset,
            primitive_count,
            max_index,
            texture: bound,
            ..
        } = call
        else {
            unreachable!()
        };
        assert_eq!(*vertex_offset, 0);
        assert_eq!(*index_offset, 0);
        assert_eq!(*vertex_count, quads * VERTICES_PER_QUAD);
        assert_eq!(*primitive_count, quads * 2);
        assert!((*max_index as usize) < *vertex_count);
        assert_eq!(*bound, Some(texture.id()));
    }
    assert_eq!(batcher.index_table().capacity(), MAX_BATCH_SIZE);
}

#[test]
fn test_empty_flush_touches_nothing() {
    let mut batcher = Batcher::new();
    let mut mock = MockRenderBackend::default();
    assert_eq!(batcher.flush(SortMode::Texture, None, &mut mock), 0);
    assert_eq!(mock.call_count(), 0);
    assert_eq!(batcher.stats().flushes, 0);
}
