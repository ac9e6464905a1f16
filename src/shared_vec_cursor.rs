use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::cursor::{Cursor, CursorError, CursorState};
use crate::direction::Direction;
use crate::position::Position;

/// Cursor over a shared snapshot of a collection's items. The collection
/// stays mutable while the cursor is alive; items appended afterwards are
/// not visible to it.
#[derive(Debug)]
pub struct SharedVecCursor<T> {
    vec: Arc<Vec<T>>,
    position: Position,
}

impl<T> Clone for SharedVecCursor<T> {
    fn clone(&self) -> Self {
        SharedVecCursor {
            vec: self.vec.clone(),
            position: self.position,
        }
    }
}

impl<T> PartialEq for SharedVecCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vec, &other.vec) && self.position == other.position
    }
}

impl<T> SharedVecCursor<T> {
    /// Cursor over `vec` in `direction`, positioned before its first element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence holds `usize::MAX` items, which is only
    /// possible for zero-sized `T`.
    pub fn new(vec: Arc<Vec<T>>, direction: Direction) -> Self {
        SharedVecCursor {
            position: Position::not_started(vec.len(), direction),
            vec,
        }
    }

    pub fn get_shared_vec(&self) -> Arc<Vec<T>> {
        self.vec.clone()
    }
}

impl<T: Clone> Iterator for SharedVecCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.advance() {
            self.current().ok().cloned()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.position.remaining(self.vec.len());
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for SharedVecCursor<T> {}

impl<T> Cursor for SharedVecCursor<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.position.advance(self.vec.len())
    }

    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        self.position.advance_by(self.vec.len(), n)
    }

    fn current(&self) -> Result<&T, CursorError> {
        let index = self.position.index(self.vec.len())?;
        Ok(&self.vec[index])
    }

    fn key(&self) -> isize {
        self.position.key()
    }

    fn reset(&mut self) {
        self.position.reset(self.vec.len())
    }

    fn direction(&self) -> Direction {
        self.position.direction()
    }

    fn state(&self) -> CursorState {
        self.position.state(self.vec.len())
    }

    fn remaining(&self) -> usize {
        self.position.remaining(self.vec.len())
    }
}
