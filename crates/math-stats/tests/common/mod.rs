//! Shared utilities for sampling tests

use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Pearson chi-squared statistic of observed bin counts against a uniform
/// expectation
pub fn chi_squared_uniform(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Critical value of the chi-squared distribution for `bins - 1` degrees of
/// freedom at the given upper-tail probability
pub fn chi_squared_critical(bins: usize, upper_tail: f64) -> f64 {
    ChiSquared::new((bins - 1) as f64)
        .expect("valid degrees of freedom")
        .inverse_cdf(1.0 - upper_tail)
}

/// Count occurrences of each offset `value - min` in `[0, bins)`
pub fn histogram<I: IntoIterator<Item = i64>>(values: I, min: i64, bins: usize) -> Vec<u64> {
    let mut counts = vec![0u64; bins];
    for v in values {
        counts[(v - min) as usize] += 1;
    }
    counts
}
