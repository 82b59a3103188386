//! Fractional ordering keys for collision-safe reordering.
//!
//! A move never relabels neighbors or lets two elements claim the same
//! position mid-edit: the stationary elements keep a "whole" key per
//! pre-removal position, the moved element gets a key strictly between
//! two neighboring whole keys, and the new order falls out of a sort.

/// A synthetic, comparable ordering key distinct from any label.
///
/// Whole keys are spaced two apart so that a key strictly between any
/// adjacent pair (or beyond the extremum, for "move to end") always
/// exists in `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderKey(i64);

impl OrderKey {
    /// The key of the stationary element at `position`.
    pub fn whole(position: usize) -> Self {
        Self(2 * position as i64)
    }

    /// A key strictly between `whole(position - 1)` and
    /// `whole(position)`. For `position == len` this is strictly above
    /// every whole key, i.e. "move to end".
    pub fn before(position: usize) -> Self {
        Self(2 * position as i64 - 1)
    }
}

/// Derive the new ordering of `len` elements when the element at
/// `from` is re-keyed to sit immediately before the element that held
/// position `to` prior to the move (`to == len` means the end).
///
/// Returns the elements' original positions in their new order.
pub(crate) fn moved_order(len: usize, from: usize, to: usize) -> Vec<usize> {
    let mut keyed: Vec<(OrderKey, usize)> = (0..len)
        .map(|position| {
            let key = if position == from {
                OrderKey::before(to)
            } else {
                OrderKey::whole(position)
            };
            (key, position)
        })
        .collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, position)| position).collect()
}
