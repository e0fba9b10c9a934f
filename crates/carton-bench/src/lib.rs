//! Benchmark workloads for the carton containers.
//!
//! - [`edit_positions`]: deterministic positions for insert/erase storms
//! - [`filled_array`]: an array of `len` distinct values

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use carton_array::DynamicArray;

/// Generate `n` deterministic positions, each valid for an array whose
/// length starts at `len` and changes by `step` after every edit.
///
/// Uses the same multiplicative hash for every seed so runs are
/// comparable across machines.
pub fn edit_positions(n: usize, len: usize, step: isize, seed: u64) -> Vec<usize> {
    let mut positions = Vec::with_capacity(n);
    let mut current = len;
    let mut state = seed;
    for i in 0..n {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i as u64 * 1442695040888963407);
        let bound = current.max(1) as u64;
        positions.push(((state >> 33) % bound) as usize);
        current = current.saturating_add_signed(step);
    }
    positions
}

/// An array holding `0..len`.
///
/// # Panics
///
/// Panics if the array cannot be allocated.
pub fn filled_array(len: usize) -> DynamicArray<u64> {
    let mut array = DynamicArray::new().unwrap();
    for i in 0..len as u64 {
        array.push_back(i).unwrap();
    }
    array
}
