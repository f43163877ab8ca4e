//! Bounded binary search.
//!
//! ## Purpose
//!
//! This module locates an exact match in a sorted integer sequence by
//! shrinking a closed index range `[low, high]` around the target.
//!
//! ## Design notes
//!
//! * **Midpoint**: Computed as `low + (high - low) / 2` with floor division,
//!   which cannot overflow for valid slice indices.
//! * **Unsigned bounds**: The `high = mid - 1` step is guarded at `mid == 0`
//!   because the bounds are `usize`.
//!
//! ## Key concepts
//!
//! * **Precondition**: The input must be sorted ascending. This is not
//!   verified; the result is unspecified on unsorted input.
//!
//! ## Invariants
//!
//! * A returned index `k` satisfies `values[k] == target`.
//! * The search performs O(log n) comparisons and no allocation.
//!
//! ## Non-goals
//!
//! * This module does not guarantee the first or last index among duplicate
//!   matches; any matching index may be returned.
//! * This module does not sort or validate the input.

// External dependencies
use core::cmp::Ordering;
use num_traits::PrimInt;

// ============================================================================
// Bounded Binary Search
// ============================================================================

/// Find the position of an exact match in a sorted sequence.
///
/// Returns `Some(index)` such that `values[index] == target` when the target
/// is present, or `None` when it is absent. An empty sequence returns `None`
/// immediately; a single-element sequence costs one comparison.
///
/// When the target occurs more than once, which matching index is returned
/// is unspecified.
///
/// # Examples
///
/// ```
/// use kernr::prelude::*;
///
/// assert_eq!(binary_search(&[1, 3, 5, 7, 9, 11], 7), Some(3));
/// assert_eq!(binary_search(&[1, 3, 5, 7, 9, 11], 4), None);
/// ```
pub fn binary_search<T: PrimInt>(values: &[T], target: T) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = values.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;

        match values[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }
    }

    None
}
