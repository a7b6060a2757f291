//! Logarithmic rescaling with a zero floor.

/// Base-10 logarithm of each value, with exact zeros replaced by `floor`.
///
/// Quiet periods of a non-negative activity signal are exactly zero; the
/// substitution keeps the indicator finite (`log10(1e-6) = -6`). NaN stays NaN
/// and negative values yield NaN.
pub fn log10_floored(values: &[f64], floor: f64) -> Vec<f64> {
    values
        .iter()
        .map(|&x| if x == 0.0 { floor } else { x })
        .map(f64::log10)
        .collect()
}
