//! Slot arena backing the tree nodes.
//!
//! Nodes live in a `Vec` of slots and refer to each other by `u32` id.
//! Freed slots go on a free list and are handed out again by [`Arena::alloc`],
//! so an id stays stable for as long as its node is alive.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<u32>,
    len: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `node`, reusing a freed slot when one is available.
    pub fn alloc(&mut self, node: N) -> u32 {
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(node);
            return idx;
        }
        self.slots.push(Some(node));
        (self.slots.len() - 1) as u32
    }

    /// Takes the node out of its slot. Returns `None` for a vacant slot.
    pub fn free(&mut self, idx: u32) -> Option<N> {
        let node = self.slots.get_mut(idx as usize)?.take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(node)
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        self.slots.get(idx as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut N> {
        self.slots.get_mut(idx as usize)?.as_mut()
    }

    pub fn contains(&self, idx: u32) -> bool {
        self.get(idx).is_some()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, idx: u32) -> &N {
        self.slots[idx as usize]
            .as_ref()
            .expect("link points at a freed arena slot")
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, idx: u32) -> &mut N {
        self.slots[idx as usize]
            .as_mut()
            .expect("link points at a freed arena slot")
    }
}
