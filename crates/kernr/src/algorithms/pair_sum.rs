//! Exact pair-sum lookup.
//!
//! ## Purpose
//!
//! This module finds one pair of distinct positions in an integer sequence
//! whose values sum to a target, in a single left-to-right scan.
//!
//! ## Design notes
//!
//! * **Complements**: At each position the scan looks up `target - value`
//!   among the values already seen.
//! * **First occurrence wins**: The map stores only the earliest index of
//!   each value, which pins down exactly which pair is returned.
//! * **Overflow**: Complements are computed with checked subtraction; an
//!   overflowing complement cannot equal any stored value, so the lookup is
//!   skipped for that element.
//!
//! ## Key concepts
//!
//! * **Determinism law**: The returned pair is fully determined by the
//!   left-to-right, first-insertion rule. The first index is always the
//!   earlier of the two.
//!
//! ## Invariants
//!
//! * A returned pair `(i, j)` satisfies `i < j` and
//!   `values[i] + values[j] == target`.
//! * The scan reads each element exactly once: O(n) time, O(n) space.
//!
//! ## Non-goals
//!
//! * This module does not enumerate all matching pairs.
//! * This module does not require or exploit sorted input.

// External dependencies
use core::hash::Hash;
use num_traits::PrimInt;
use std::collections::HashMap;

// ============================================================================
// Pair-Sum Scan
// ============================================================================

/// Find one pair of positions whose values sum to `target`.
///
/// Returns `Some((i, j))` with `i < j` for the first such pair encountered by
/// the scan, or `None` when no two distinct positions sum to the target.
/// An empty sequence returns `None`.
///
/// A value equal to half the target pairs with a later duplicate of itself,
/// since the earlier index is recorded before the later one is scanned.
///
/// # Examples
///
/// ```
/// use kernr::prelude::*;
///
/// assert_eq!(find_pair(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(find_pair(&[2, 7, 11, 15], 10), None);
/// ```
pub fn find_pair<T>(values: &[T], target: T) -> Option<(usize, usize)>
where
    T: PrimInt + Hash,
{
    let mut seen: HashMap<T, usize> = HashMap::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        if let Some(complement) = target.checked_sub(&value) {
            if let Some(&j) = seen.get(&complement) {
                return Some((j, i));
            }
        }

        // Only the first occurrence of a repeated value is ever stored
        seen.entry(value).or_insert(i);
    }

    None
}
