//! Fixed-capacity particle arena
//!
//! The pool owns every particle slot. Slot indices are the particle
//! identity: stable while alive, reusable immediately after death. There is
//! no per-particle allocation; the backing store is one contiguous `Vec`
//! resized only between ticks.

use crate::Particle;

/// Fixed-capacity arena of particle slots with free/alive bookkeeping
///
/// Invariants:
/// - `alive_count() <= capacity()` at every externally observable point
/// - a slot index is either free or alive, never both
/// - alive iteration is in ascending index order, deterministic for a given
///   birth/death history
pub struct ParticlePool {
    slots: Vec<Particle>,
    /// Free-slot stack, lowest index on top. May contain stale entries for
    /// slots born via `birth(index)`; `reserve` skips those.
    free: Vec<usize>,
    alive_count: usize,
}

impl ParticlePool {
    /// Create a pool with `capacity` free slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Particle::default(); capacity],
            free: (0..capacity).rev().collect(),
            alive_count: 0,
        }
    }

    /// Current maximum number of alive particles
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently alive particles
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Whether no particle is currently alive
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alive_count == 0
    }

    /// Pop the next free slot index without changing liveness
    ///
    /// Returns `None` when the pool is saturated. The caller is expected to
    /// follow up with [`birth`](Self::birth) on the returned index.
    pub fn reserve(&mut self) -> Option<usize> {
        while let Some(index) = self.free.pop() {
            // Stale entries appear when birth(index) bypasses the stack.
            if !self.slots[index].alive {
                return Some(index);
            }
        }
        None
    }

    /// Mark `index` alive
    ///
    /// Admission control point: returns `false` without effect when the slot
    /// is already alive, out of range, or the pool is saturated. Excess
    /// births are dropped, never queued.
    pub fn birth(&mut self, index: usize) -> bool {
        let capacity = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) if !slot.alive => {
                debug_assert!(self.alive_count < capacity);
                slot.alive = true;
                self.alive_count += 1;
                true
            }
            Some(_) => {
                log::debug!("pool: birth dropped, slot {} already alive", index);
                false
            }
            None => {
                log::debug!("pool: birth dropped, slot {} out of range", index);
                false
            }
        }
    }

    /// Mark `index` free; idempotent if already free
    ///
    /// Returns `true` if the slot transitioned alive -> free.
    pub fn kill(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.alive => {
                slot.alive = false;
                self.alive_count -= 1;
                self.free.push(index);
                true
            }
            _ => false,
        }
    }

    /// Change capacity; only valid between ticks
    ///
    /// Shrinking force-kills every alive particle with `index >=
    /// new_capacity` (the killed indices are returned so the owner can
    /// notify the renderer); alive particles below the cut keep their index
    /// and state. Growing keeps everything and adds free slots.
    pub fn resize(&mut self, new_capacity: usize) -> Vec<usize> {
        let mut killed = Vec::new();
        if new_capacity < self.slots.len() {
            for index in new_capacity..self.slots.len() {
                if self.kill(index) {
                    killed.push(index);
                }
            }
        }
        self.slots.resize(new_capacity, Particle::default());
        // Rebuild the free stack so truncated and stale entries disappear.
        self.free = (0..new_capacity)
            .rev()
            .filter(|&i| !self.slots[i].alive)
            .collect();
        killed
    }

    /// Get a slot by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.slots.get(index)
    }

    /// Get a slot mutably by index
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.slots.get_mut(index)
    }

    /// Indices of alive particles in ascending order
    pub fn alive_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, p)| p.alive)
            .map(|(i, _)| i)
    }

    /// Alive particles with their indices, in ascending index order
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, &Particle)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, p)| p.alive)
    }
}
