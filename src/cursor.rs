use std::num::NonZeroUsize;

use thiserror::Error;

use crate::direction::Direction;

/// A stateful traversal over an ordered sequence.
///
/// A fresh cursor sits before its first element; call [`Cursor::advance`]
/// before reading [`Cursor::current`]. Every cursor owns its position, so any
/// number of cursors over the same items can be driven in any interleaving.
pub trait Cursor {
    type Item;

    /// Moves one step in the cursor's direction. Returns `false`, leaving the
    /// position where it was, once no element is left in that direction.
    fn advance(&mut self) -> bool;

    /// Moves `n` steps. On failure the error holds the number of steps that
    /// could not be taken.
    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize>;

    fn current(&self) -> Result<&Self::Item, CursorError>;

    /// Logical index of the cursor, including the `-1`/`len` sentinels used
    /// before the first element.
    fn key(&self) -> isize;

    /// Repositions on the first element of the cursor's direction. Unlike a
    /// fresh cursor, that element is readable without an `advance` first.
    /// The next `advance` (or `Iterator::next`) moves past it, so iteration
    /// after a reset resumes with the second element. A reset also revives
    /// an exhausted cursor.
    fn reset(&mut self);

    fn direction(&self) -> Direction;

    fn state(&self) -> CursorState;

    /// Number of successful `advance` calls still possible.
    fn remaining(&self) -> usize;

    fn is_exhausted(&self) -> bool {
        self.state() == CursorState::Exhausted
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CursorState {
    NotStarted,
    At(usize),
    Exhausted,
}

/// Reading a cursor that is not positioned on an element.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum CursorError {
    #[error("cursor at position {position} has not been advanced onto an element")]
    NotStarted { position: isize },
    #[error("cursor at position {position} is exhausted")]
    Exhausted { position: isize },
}

/// A collection that hands out cursors over its items.
pub trait Sequence {
    type Item;
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_>;
}
