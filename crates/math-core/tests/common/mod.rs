//! Shared utilities for integration tests

/// Array lengths around the accumulator lane boundaries
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        3,   // Lanes - 1
        4,   // Lanes
        5,   // Lanes + 1
        7,   // Two chunks minus one
        8,   // Two chunks
        9,   // Two chunks plus remainder
        17,  // Power of 2 + 1
        31,  // Prime
        64,  // Cache line
        127, // Mersenne prime
    ]
}

/// Deterministic pseudo-random i32 data, including values that overflow on
/// multiplication
pub fn generate_i32(len: usize, salt: i64) -> Vec<i32> {
    (0..len as i64)
        .map(|i| {
            let magnitude = ((i * 2_654_435_761 + salt * 40_503) % 1_000_003) as i32;
            if i % 3 == 0 {
                -magnitude
            } else {
                magnitude
            }
        })
        .collect()
}

/// Reference dot product: plain sequential wrapping accumulation
pub fn reference_dot_i32(a: &[i32], b: &[i32]) -> i32 {
    a.iter()
        .zip(b.iter())
        .fold(0i32, |acc, (&x, &y)| acc.wrapping_add(x.wrapping_mul(y)))
}
