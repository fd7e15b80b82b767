//! Recycling storage for [`Quad`] records.
//!
//! Quads live in an index-addressed arena. A slot is either on the `active`
//! list (queued for the next flush, in submission order) or on the `free`
//! stack, never both and never neither. After the first few frames the pool
//! reaches a steady state and `acquire` stops allocating.

use spritebatch_core::profiling::profile_function;

use crate::quad::Quad;

/// Index of a quad slot in an [`ItemPool`].
pub type QuadSlot = u32;

#[derive(Debug, Default)]
pub struct ItemPool {
    quads: Vec<Quad>,
    active: Vec<QuadSlot>,
    free: Vec<QuadSlot>,
}

impl ItemPool {
    pub const fn new() -> Self {
        Self {
            quads: Vec::new(),
            active: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Create a pool with `capacity` quads already allocated on the free list.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut pool = Self {
            quads: Vec::with_capacity(capacity),
            active: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
        };
        pool.grow(capacity);
        pool
    }

    fn grow(&mut self, additional: usize) {
        let start = self.quads.len();
        self.quads.resize(start + additional, Quad::default());
        // Reverse so the lowest slot is handed out first.
        self.free
            .extend((start..start + additional).rev().map(|slot| slot as QuadSlot));
    }

    /// Move one quad from the free list to the end of the active list and
    /// return it reset to its default state.
    ///
    /// Allocates a new quad when the free list is empty.
    pub fn acquire(&mut self) -> &mut Quad {
        profile_function!();
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                let slot = self.quads.len() as QuadSlot;
                self.quads.push(Quad::default());
                tracing::trace!("Quad pool grew to {} slots", self.quads.len());
                slot
            }
        };

        self.active.push(slot);
        let quad = &mut self.quads[slot as usize];
        quad.reset();
        quad
    }

    /// Return every active quad to the free list.
    pub fn release_all(&mut self) {
        self.free.extend(self.active.drain(..).rev());
    }

    /// Slots of the quads queued for the next flush, in current order.
    pub fn active(&self) -> &[QuadSlot] {
        &self.active
    }

    pub fn get(&self, slot: QuadSlot) -> &Quad {
        &self.quads[slot as usize]
    }

    /// Stable-sort the active list with a comparator over the quads.
    pub fn sort_active_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Quad, &Quad) -> std::cmp::Ordering,
    {
        let quads = &self.quads;
        self.active
            .sort_by(|&a, &b| compare(&quads[a as usize], &quads[b as usize]));
    }

    /// Stable-sort the active list by a key derived from each quad.
    pub fn sort_active_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&Quad) -> K,
    {
        let quads = &self.quads;
        self.active.sort_by_key(|&slot| key(&quads[slot as usize]));
    }

    pub fn len_active(&self) -> usize {
        self.active.len()
    }

    pub fn len_free(&self) -> usize {
        self.free.len()
    }

    /// Total number of quads ever allocated by this pool.
    pub fn capacity(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
