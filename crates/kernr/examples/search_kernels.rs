//! Search Kernel Examples
//!
//! This example demonstrates the two search kernels:
//! - Pair-sum lookup with the earliest-index-first determinism rule
//! - Bounded binary search with the `-1` sentinel convention at the boundary

use kernr::prelude::*;

fn main() {
    println!("{}", "=".repeat(80));
    println!("kernr Search Kernel Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_pair_sum();
    example_2_binary_search();
}

/// Example 1: Pair-Sum Lookup
/// Demonstrates the one-pass hash-map scan and its determinism rule
fn example_1_pair_sum() {
    println!("Example 1: Pair-Sum Lookup");
    println!("{}", "-".repeat(80));

    let values = [2, 7, 11, 15];
    let target = 9;

    // The kernel returns Option; the "i j" line is a caller convention
    match find_pair(&values, target) {
        Some((i, j)) => println!("{} {}", i, j),
        None => println!("No solution found"),
    }

    // Duplicates: only the first occurrence of a value is ever stored,
    // so a half-target value pairs with its next duplicate
    let duplicates = [3, 3, 4];
    match find_pair(&duplicates, 6) {
        Some((i, j)) => println!("{} {}", i, j),
        None => println!("No solution found"),
    }

    println!();
}

/// Example 2: Bounded Binary Search
/// Demonstrates exact-match search with the -1 sentinel for absence
fn example_2_binary_search() {
    println!("Example 2: Bounded Binary Search");
    println!("{}", "-".repeat(80));

    let values = [1, 3, 5, 7, 9, 11];

    for target in [7, 4] {
        // Present -> index; absent -> -1, matching the exercise convention
        match binary_search(&values, target) {
            Some(index) => println!("{}", index),
            None => println!("-1"),
        }
    }

    println!();
}
