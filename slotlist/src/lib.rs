//! A doubly-linked list that keeps its nodes in a vector of slots.
//!
//! Links between nodes are slot indices, not pointers, and every node
//! carries a generation number. A [`Handle`] pairs an index with the
//! generation it was issued for, so a handle to a removed node is
//! *detectably* stale: lookups through it answer `None` instead of reaching
//! whatever value reuses the slot later.
//!
//! Slots freed by removals go on an internal freelist and are reused before
//! the vector grows again, so long add/remove churn does not move memory.
//!
//! ```
//! use slotlist::SlotList;
//!
//! let mut list = SlotList::new();
//! let first = list.push_back("a");
//! list.push_back("c");
//! list.insert_after(&first, "b");
//!
//! let order: Vec<&str> = list.iter().copied().collect();
//! assert_eq!(order, ["a", "b", "c"]);
//!
//! assert_eq!(list.remove(&first), Some("a"));
//! assert_eq!(list.get(&first), None); // the handle is stale now
//! ```

mod cursor;
mod handle;
mod iter;
mod list;
mod slot;

pub use crate::cursor::CursorMut;
pub use crate::handle::Handle;
pub use crate::iter::{Drain, Iter, IterRev};
pub use crate::list::SlotList;
