// Shelf: an arena that owns its values and hands out index handles.
//
// A list of handles can be moved, stored or returned freely; it never borrows
// the shelf. Resolving a handle goes back through the shelf, so it always sees
// the current value.

use crate::error::{DemoError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_SHELF: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    shelf: usize,
    index: usize,
}

impl Handle {
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug)]
pub struct Shelf<T> {
    id: usize,
    items: Vec<T>,
}

impl<T> Default for Shelf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Shelf<T> {
    pub fn new() -> Self {
        Shelf {
            id: NEXT_SHELF.fetch_add(1, Ordering::Relaxed),
            items: Vec::new(),
        }
    }

    /// Takes ownership of `value`. Moving never clones.
    pub fn add(&mut self, value: T) -> Handle {
        self.items.push(value);
        Handle {
            shelf: self.id,
            index: self.items.len() - 1,
        }
    }

    pub fn get(&self, handle: Handle) -> Result<&T> {
        self.check(handle)?;
        self.items
            .get(handle.index)
            .ok_or(DemoError::DanglingHandle(handle.index))
    }

    pub fn get_mut(&mut self, handle: Handle) -> Result<&mut T> {
        self.check(handle)?;
        self.items
            .get_mut(handle.index)
            .ok_or(DemoError::DanglingHandle(handle.index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check(&self, handle: Handle) -> Result<()> {
        if handle.shelf == self.id {
            Ok(())
        } else {
            Err(DemoError::DanglingHandle(handle.index))
        }
    }
}
