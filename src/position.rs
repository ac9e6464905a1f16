use std::cmp::min;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::cursor::{CursorError, CursorState};
use crate::direction::Direction;

/// Position bookkeeping shared by every cursor backing. The item count is
/// passed in by the owner of the storage on each call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct Position {
    // To keep navigation in unsigned arithmetic, 0 represents the logical
    // index -1 and len+1 represents the logical index len. Values in between
    // are 1-based indices into the items. This means that the item count
    // cannot exceed usize::MAX-1.
    pos: usize,
    direction: Direction,
    exhausted: bool,
}

impl Position {
    pub fn not_started(len: usize, direction: Direction) -> Self {
        assert!(len < usize::MAX, "Sequence too large");
        let pos = match direction {
            Direction::Forward => 0,
            Direction::Reverse => len + 1,
        };
        Position {
            pos,
            direction,
            exhausted: false,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn key(&self) -> isize {
        self.pos as isize - 1
    }

    pub fn advance(&mut self, len: usize) -> bool {
        let candidate = match self.direction {
            Direction::Forward => self.pos.checked_add(1),
            Direction::Reverse => self.pos.checked_sub(1),
        };
        match candidate {
            Some(candidate) if (1..=len).contains(&candidate) => {
                self.pos = candidate;
                true
            }
            _ => {
                self.exhaust();
                false
            }
        }
    }

    pub fn advance_by(&mut self, len: usize, n: usize) -> Result<(), NonZeroUsize> {
        let step = min(n, self.remaining(len));
        match self.direction {
            Direction::Forward => self.pos += step,
            Direction::Reverse => self.pos -= step,
        }
        match NonZeroUsize::new(n - step) {
            Some(missing) => {
                self.exhaust();
                Err(missing)
            }
            None => Ok(()),
        }
    }

    pub fn reset(&mut self, len: usize) {
        self.pos = match self.direction {
            Direction::Forward => 1,
            Direction::Reverse => len,
        };
        self.exhausted = false;
        trace!(direction = ?self.direction, key = self.key(), "cursor reset");
    }

    pub fn index(&self, len: usize) -> Result<usize, CursorError> {
        match self.state(len) {
            CursorState::At(index) => Ok(index),
            CursorState::Exhausted => Err(CursorError::Exhausted {
                position: self.key(),
            }),
            CursorState::NotStarted => Err(CursorError::NotStarted {
                position: self.key(),
            }),
        }
    }

    pub fn state(&self, len: usize) -> CursorState {
        if self.exhausted {
            CursorState::Exhausted
        } else if self.pos >= 1 && self.pos <= len {
            CursorState::At(self.pos - 1)
        } else {
            CursorState::NotStarted
        }
    }

    pub fn remaining(&self, len: usize) -> usize {
        match self.direction {
            Direction::Forward => len.saturating_sub(self.pos),
            Direction::Reverse => min(self.pos.saturating_sub(1), len),
        }
    }

    fn exhaust(&mut self) {
        if !self.exhausted {
            debug!(direction = ?self.direction, key = self.key(), "cursor exhausted");
        }
        self.exhausted = true;
    }
}
