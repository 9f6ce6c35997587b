/// Names one node of a [`SlotList`](crate::SlotList).
///
/// A handle stays valid across unrelated mutations of the list. Removing
/// its node makes it stale: the slot's generation moves on and every later
/// lookup through the handle answers `None`, even after the slot has been
/// reused for a different node.
///
/// Handles carry no lifetime and can be stored in other structures. Using a
/// handle with a list other than the one that issued it finds either nothing
/// or an unrelated node; the type system does not prevent the mixup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}
