use std::ops::Not;

/// Order in which a cursor walks the items of a collection.
#[derive(Debug, Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Ascending index order.
    #[default]
    Forward,
    /// Descending index order.
    Reverse,
}

impl Direction {
    pub fn is_reverse(self) -> bool {
        self == Direction::Reverse
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

impl Not for Direction {
    type Output = Direction;

    fn not(self) -> Direction {
        self.reversed()
    }
}
