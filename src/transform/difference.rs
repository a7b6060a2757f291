//! Finite differences over irregularly spaced timestamps.

use chrono::{DateTime, Utc};

/// Elapsed time from `from` to `to` in seconds, keeping sub-second precision.
pub fn elapsed_seconds(from: &DateTime<Utc>, to: &DateTime<Utc>) -> f64 {
    let delta = *to - *from;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1e6,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}

/// Centered second-order difference of `values` against elapsed seconds.
///
/// The two-step difference spanning `i - 1 ..= i + 1` is reported at the
/// midpoint `i`:
///
/// d\[i\] = (x\[i+1\] - x\[i-1\]) / (t\[i+1\] - t\[i-1\])
///
/// The first and last positions have no neighbour on one side and are NaN.
/// The output always has the same length as the input.
pub fn centered_difference(timestamps: &[DateTime<Utc>], values: &[f64]) -> Vec<f64> {
    let n = values.len().min(timestamps.len());
    let mut result = vec![f64::NAN; values.len()];
    if n < 3 {
        return result;
    }

    for i in 1..n - 1 {
        let dt = elapsed_seconds(&timestamps[i - 1], &timestamps[i + 1]);
        result[i] = (values[i + 1] - values[i - 1]) / dt;
    }

    result
}

/// Magnitude of each value, written as sqrt(x^2).
pub fn magnitude(values: &[f64]) -> Vec<f64> {
    values.iter().map(|x| x.powi(2).sqrt()).collect()
}
