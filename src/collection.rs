use std::sync::Arc;

use tracing::trace;

use crate::cursor::Sequence;
use crate::direction::Direction;
use crate::shared_vec_cursor::SharedVecCursor;
use crate::slice_cursor::SliceCursor;

/// An append-only ordered sequence that hands out cursors.
///
/// The direction flag only decides the direction of cursors created after
/// it is set. The items themselves are never reordered.
#[derive(Debug)]
pub struct OrderedCollection<T> {
    // Shared so that snapshot cursors can outlive later appends.
    items: Arc<Vec<T>>,
    direction: Direction,
}

impl<T> OrderedCollection<T> {
    pub fn new() -> Self {
        Self::with_direction(Direction::default())
    }

    pub fn with_direction(direction: Direction) -> Self {
        OrderedCollection {
            items: Arc::new(Vec::new()),
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.reversed();
        trace!(direction = ?self.direction, "collection direction toggled");
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a cursor borrowing this collection, in the current direction,
    /// positioned before its first element.
    pub fn cursor(&self) -> SliceCursor<'_, T> {
        trace!(direction = ?self.direction, len = self.items.len(), "created cursor");
        SliceCursor::new(&self.items, self.direction)
    }

    /// Returns a cursor over a snapshot of the current items. Later appends
    /// and direction changes on the collection do not affect it.
    pub fn shared_cursor(&self) -> SharedVecCursor<T> {
        trace!(direction = ?self.direction, len = self.items.len(), "created shared cursor");
        SharedVecCursor::new(self.items.clone(), self.direction)
    }

    pub fn iter(&self) -> SliceCursor<'_, T> {
        self.cursor()
    }

    /// Appends an item without cloning. Fails, handing the item back, while a
    /// shared cursor or a clone of this collection still holds the items.
    /// Use [`OrderedCollection::add_item`] when `T: Clone`.
    pub fn try_add_item(&mut self, item: T) -> Result<(), T> {
        match Arc::get_mut(&mut self.items) {
            Some(items) => {
                items.push(item);
                Ok(())
            }
            None => Err(item),
        }
    }
}

impl<T: Clone> OrderedCollection<T> {
    /// Appends an item. Always succeeds. If shared cursors still hold the
    /// current items, the collection clones them into its own copy first.
    ///
    /// For element types that are not `Clone`, see
    /// [`OrderedCollection::try_add_item`] or build with `FromIterator`.
    pub fn add_item(&mut self, item: T) {
        Arc::make_mut(&mut self.items).push(item);
    }
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for OrderedCollection<T> {
    fn clone(&self) -> Self {
        OrderedCollection {
            items: self.items.clone(),
            direction: self.direction,
        }
    }
}

impl<T> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        OrderedCollection {
            items: Arc::new(iter.into_iter().collect()),
            direction: Direction::default(),
        }
    }
}

impl<T: Clone> Extend<T> for OrderedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        Arc::make_mut(&mut self.items).extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = SliceCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<T> Sequence for OrderedCollection<T> {
    type Item = T;
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        OrderedCollection::cursor(self)
    }
}
