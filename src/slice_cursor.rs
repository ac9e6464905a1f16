use std::num::NonZeroUsize;

use crate::cursor::{Cursor, CursorError, CursorState};
use crate::direction::Direction;
use crate::position::Position;

/// Cursor borrowing the items it walks. The collection cannot be appended
/// to while one of these is alive.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    position: Position,
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        SliceCursor {
            slice: self.slice,
            position: self.position,
        }
    }
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor over `slice` in `direction`, positioned before its first element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence holds `usize::MAX` items, which is only
    /// possible for zero-sized `T`.
    pub fn new(slice: &'a [T], direction: Direction) -> Self {
        SliceCursor {
            slice,
            position: Position::not_started(slice.len(), direction),
        }
    }

    pub fn forward(slice: &'a [T]) -> Self {
        Self::new(slice, Direction::Forward)
    }

    pub fn reverse(slice: &'a [T]) -> Self {
        Self::new(slice, Direction::Reverse)
    }
}

impl<'a, T> Iterator for SliceCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slice = self.slice;
        if self.position.advance(slice.len()) {
            self.position
                .index(slice.len())
                .ok()
                .and_then(|index| slice.get(index))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.position.remaining(self.slice.len());
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for SliceCursor<'a, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.position.advance(self.slice.len())
    }

    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        self.position.advance_by(self.slice.len(), n)
    }

    fn current(&self) -> Result<&T, CursorError> {
        let index = self.position.index(self.slice.len())?;
        Ok(&self.slice[index])
    }

    fn key(&self) -> isize {
        self.position.key()
    }

    fn reset(&mut self) {
        self.position.reset(self.slice.len())
    }

    fn direction(&self) -> Direction {
        self.position.direction()
    }

    fn state(&self) -> CursorState {
        self.position.state(self.slice.len())
    }

    fn remaining(&self) -> usize {
        self.position.remaining(self.slice.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_navigation() {
        let slice = &["a", "b", "c"];

        // Forward direction.
        let mut cursor = SliceCursor::forward(slice);
        assert_eq!(cursor.key(), -1);
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&"a"));
        assert_eq!(cursor.key(), 0);
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&"b"));
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&"c"));
        assert!(!cursor.advance());
        assert_eq!(cursor.key(), 2);
        assert_eq!(
            cursor.current(),
            Err(CursorError::Exhausted { position: 2 })
        );

        // Backward direction.
        let mut cursor = SliceCursor::reverse(slice);
        assert_eq!(cursor.key(), 3);
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&"c"));
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&"b"));
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&"a"));
        assert!(!cursor.advance());
        assert_eq!(cursor.key(), 0);
    }

    #[test]
    fn current_before_advance_fails() {
        let cursor = SliceCursor::forward(&[1, 2, 3]);
        assert_eq!(cursor.state(), CursorState::NotStarted);
        assert_eq!(
            cursor.current(),
            Err(CursorError::NotStarted { position: -1 })
        );

        let cursor = SliceCursor::reverse(&[1, 2, 3]);
        assert_eq!(
            cursor.current(),
            Err(CursorError::NotStarted { position: 3 })
        );
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut cursor = SliceCursor::forward(&[1]);
        assert!(cursor.advance());
        for _ in 0..5 {
            assert!(!cursor.advance());
            assert_eq!(cursor.key(), 0);
            assert!(cursor.is_exhausted());
        }
    }

    #[test]
    fn reset_positions_on_first_element() {
        let slice = &["a", "b", "c"];

        let mut cursor = SliceCursor::forward(slice);
        while cursor.advance() {}
        cursor.reset();
        assert_eq!(cursor.state(), CursorState::At(0));
        assert_eq!(cursor.current(), Ok(&"a"));
        // The element under the cursor after a reset is not yielded again.
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&"b"));

        let mut cursor = SliceCursor::reverse(slice);
        while cursor.advance() {}
        cursor.reset();
        assert_eq!(cursor.current(), Ok(&"c"));
        assert_eq!(cursor.next(), Some(&"b"));
        assert_eq!(cursor.next(), Some(&"a"));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn reset_revives_drained_iterator() {
        let slice = &[1, 2, 3];

        let mut cursor = SliceCursor::forward(slice);
        assert_eq!(cursor.by_ref().count(), 3);
        assert_eq!(cursor.next(), None);
        cursor.reset();
        assert_eq!(cursor.len(), 2);
        // Iteration resumes after the element reset positioned on.
        assert_eq!(cursor.next(), Some(&2));
        assert_eq!(cursor.next(), Some(&3));
        assert_eq!(cursor.next(), None);

        let mut cursor = SliceCursor::reverse(slice);
        while cursor.next().is_some() {}
        cursor.reset();
        assert_eq!(cursor.current(), Ok(&3));
        let rest: Vec<_> = cursor.copied().collect();
        assert_eq!(rest, vec![2, 1]);
    }

    #[test]
    fn empty_slice() {
        let slice: &[i32] = &[];
        for mut cursor in [SliceCursor::forward(slice), SliceCursor::reverse(slice)] {
            assert!(!cursor.advance());
            assert!(cursor.current().is_err());
            assert!(!cursor.advance());
            cursor.reset();
            assert_eq!(cursor.state(), CursorState::NotStarted);
            assert!(cursor.current().is_err());
            assert_eq!(cursor.next(), None);
        }
    }

    #[test]
    fn iterator_yields_in_direction() {
        let slice = &[1, 2, 3, 4];
        let forward: Vec<_> = SliceCursor::forward(slice).copied().collect();
        assert_eq!(forward, vec![1, 2, 3, 4]);
        let reverse: Vec<_> = SliceCursor::reverse(slice).copied().collect();
        assert_eq!(reverse, vec![4, 3, 2, 1]);

        let mut cursor = SliceCursor::reverse(slice);
        assert_eq!(cursor.len(), 4);
        cursor.next();
        assert_eq!(cursor.size_hint(), (3, Some(3)));
    }

    #[test]
    fn advance_by_test() {
        let slice = &[1, 2, 3];

        // Count the failed steps of seven single advances, then check that
        // advance_by reports the same number.
        let mut cursor = SliceCursor::forward(slice);
        let mut expected = 0;
        for _ in 0..7 {
            if !cursor.advance() {
                expected += 1;
            }
        }
        let mut cursor = SliceCursor::forward(slice);
        assert_eq!(
            Cursor::advance_by(&mut cursor, 7),
            Err(NonZeroUsize::new(expected).unwrap())
        );
        assert_eq!(cursor.current(), Err(CursorError::Exhausted { position: 2 }));

        let mut cursor = SliceCursor::reverse(slice);
        assert_eq!(Cursor::advance_by(&mut cursor, 2), Ok(()));
        assert_eq!(cursor.current(), Ok(&2));

        let mut cursor = SliceCursor::forward(&[] as &[i32; 0]);
        assert_eq!(
            Cursor::advance_by(&mut cursor, 7),
            Err(NonZeroUsize::new(7).unwrap())
        );
    }
}
