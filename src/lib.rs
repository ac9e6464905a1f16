//! Cursors over an append-only ordered collection.
//!
//! An [`OrderedCollection`] hands out cursors that walk its items forward or
//! in reverse, without exposing how the items are stored. The collection's
//! direction flag is captured by each cursor when it is created, so toggling
//! it never changes the order of a traversal that is already under way.
//!
//! ```
//! use ordered_cursor::{Cursor, OrderedCollection};
//!
//! let mut collection = OrderedCollection::new();
//! collection.add_item("First");
//! collection.add_item("Second");
//! collection.add_item("Third");
//!
//! let straight: Vec<_> = collection.iter().copied().collect();
//! assert_eq!(straight, ["First", "Second", "Third"]);
//!
//! collection.reverse_direction();
//! let mut cursor = collection.cursor();
//! let mut reversed = Vec::new();
//! while cursor.advance() {
//!     reversed.push(*cursor.current()?);
//! }
//! assert_eq!(reversed, ["Third", "Second", "First"]);
//! # Ok::<(), ordered_cursor::CursorError>(())
//! ```

pub use collection::OrderedCollection;
pub use cursor::{Cursor, CursorError, CursorState, Sequence};
pub use direction::Direction;
pub use shared_vec_cursor::SharedVecCursor;
pub use slice_cursor::SliceCursor;

mod collection;
mod cursor;
mod direction;
mod position;
mod shared_vec_cursor;
mod slice_cursor;
