//! Fixed-capacity shape pools.
//!
//! A [`ShapePool`] is a dense, unordered array with a hard capacity.  Inserts
//! past capacity are refused (the caller simply drops the spawn) and removal
//! is O(1) swap-remove: the last shape moves into the freed slot.  Nothing
//! outside the pool holds indices across frames, so the reordering is safe.

use crate::shape::Shape;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct ShapePool {
    shapes: Vec<Shape>,
    capacity: usize,
}

impl ShapePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.shapes.len() >= self.capacity
    }

    /// Add a shape, returning its slot, or `None` (pool unchanged) when full.
    #[must_use]
    pub fn try_insert(&mut self, shape: Shape) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.shapes.push(shape);
        Some(self.shapes.len() - 1)
    }

    /// Destroy the shape at `index` and fill the hole with the last shape.
    ///
    /// Returns `false` for an out-of-range index.  After a successful call the
    /// slot holds a shape that has not been visited yet by a forward scan, so
    /// loops must re-visit `index` instead of advancing.
    pub fn destroy(&mut self, index: usize) -> bool {
        if index >= self.shapes.len() {
            return false;
        }
        let mut removed = self.shapes.swap_remove(index);
        removed.destroy();
        true
    }

    /// Destroy every shape.
    pub fn clear(&mut self) {
        for shape in &mut self.shapes {
            shape.destroy();
        }
        self.shapes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}

impl Index<usize> for ShapePool {
    type Output = Shape;

    fn index(&self, index: usize) -> &Shape {
        &self.shapes[index]
    }
}

impl IndexMut<usize> for ShapePool {
    fn index_mut(&mut self, index: usize) -> &mut Shape {
        &mut self.shapes[index]
    }
}
