//! Shared triangle indices for runs of quads.
//!
//! Every quad uses the same six-index pattern offset by `4 * slot`, so one
//! table serves every draw call. Indices are 16-bit, which caps a single draw
//! call at [`MAX_BATCH_SIZE`] quads.

/// Indices per quad: two triangles.
pub const INDICES_PER_QUAD: usize = 6;

/// Vertices per quad.
pub const VERTICES_PER_QUAD: usize = 4;

/// Largest number of quads a single flush chunk may contain.
///
/// `floor(65535 / 6)`: the six indices of every quad in a chunk must fit in a
/// 16-bit index buffer.
pub const MAX_BATCH_SIZE: usize = u16::MAX as usize / INDICES_PER_QUAD;

/// Append-only table of quad indices.
///
/// Slot `i` contributes the triangles `[4i, 4i+1, 4i+2]` and
/// `[4i+1, 4i+3, 4i+2]` (top-left, top-right, bottom-left, bottom-right).
#[derive(Debug, Default)]
pub struct IndexTable {
    indices: Vec<u16>,
}

impl IndexTable {
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    pub fn with_capacity(quads: usize) -> Self {
        let mut table = Self::new();
        table.ensure_capacity(quads);
        table
    }

    /// Number of quads the table currently covers.
    pub fn capacity(&self) -> usize {
        self.indices.len() / INDICES_PER_QUAD
    }

    /// Grow the table to cover at least `quads` quads.
    ///
    /// Existing entries are never rewritten; new slots are appended. The
    /// table rounds up to the next power of two, clamped to
    /// [`MAX_BATCH_SIZE`].
    ///
    /// # Panics
    ///
    /// Panics if `quads` exceeds [`MAX_BATCH_SIZE`].
    pub fn ensure_capacity(&mut self, quads: usize) {
        assert!(
            quads <= MAX_BATCH_SIZE,
            "index table cannot address {quads} quads (max {MAX_BATCH_SIZE})"
        );

        let current = self.capacity();
        if quads <= current {
            return;
        }

        let target = quads.next_power_of_two().min(MAX_BATCH_SIZE);
        self.indices.reserve((target - current) * INDICES_PER_QUAD);
        for slot in current..target {
            let base = (slot * VERTICES_PER_QUAD) as u16;
            self.indices.extend_from_slice(&[
                base,
                base + 1,
                base + 2,
                base + 1,
                base + 3,
                base + 2,
            ]);
        }

        tracing::debug!("Index table grew from {current} to {target} quads");
    }

    /// All indices, `capacity() * 6` entries.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }
}
