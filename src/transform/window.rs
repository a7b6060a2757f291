//! Rolling window functions and index shifts.
//!
//! Windows are trailing: the value at position `i` summarizes positions
//! `i + 1 - window ..= i`. Missing values (NaN) inside a window are skipped, and
//! a window yields a value once it holds at least `min_periods` valid
//! observations, so aggregates are defined from the first sample onward when
//! `min_periods` is 1.

use crate::core::Aggregator;
use std::collections::VecDeque;

/// Compute rolling maximum.
///
/// Runs in linear time: a deque keeps the indices of the valid values that
/// can still become the window maximum, in decreasing order of value.
///
/// # Arguments
/// * `series` - Input series, NaN marks a missing value
/// * `window` - Window size
/// * `min_periods` - Minimum number of valid observations required
pub fn rolling_max(series: &[f64], window: usize, min_periods: usize) -> Vec<f64> {
    let n = series.len();
    let mut result = vec![f64::NAN; n];
    if n == 0 || window == 0 {
        return result;
    }

    let min_periods = min_periods.max(1);
    let mut candidates: VecDeque<usize> = VecDeque::with_capacity(window.min(n));
    let mut valid = 0usize;

    for (i, &x) in series.iter().enumerate() {
        if !x.is_nan() {
            while candidates.back().is_some_and(|&j| series[j] <= x) {
                candidates.pop_back();
            }
            candidates.push_back(i);
            valid += 1;
        }
        if i >= window && !series[i - window].is_nan() {
            valid -= 1;
        }
        while candidates.front().is_some_and(|&j| j + window <= i) {
            candidates.pop_front();
        }

        if valid >= min_periods {
            if let Some(&j) = candidates.front() {
                result[i] = series[j];
            }
        }
    }

    result
}

/// Compute rolling mean (moving average).
///
/// Keeps a running sum and count of the valid values in the window.
pub fn rolling_mean(series: &[f64], window: usize, min_periods: usize) -> Vec<f64> {
    let n = series.len();
    let mut result = vec![f64::NAN; n];
    if n == 0 || window == 0 {
        return result;
    }

    let min_periods = min_periods.max(1);
    let mut sum = 0.0;
    let mut valid = 0usize;

    for (i, &x) in series.iter().enumerate() {
        if !x.is_nan() {
            sum += x;
            valid += 1;
        }
        if i >= window {
            let leaving = series[i - window];
            if !leaving.is_nan() {
                sum -= leaving;
                valid -= 1;
            }
        }
        // drop accumulated rounding once the window holds nothing
        if valid == 0 {
            sum = 0.0;
        }

        if valid >= min_periods {
            result[i] = sum / valid as f64;
        }
    }

    result
}

/// Rolling aggregate selected by `aggregator`.
pub fn rolling(
    series: &[f64],
    window: usize,
    min_periods: usize,
    aggregator: Aggregator,
) -> Vec<f64> {
    match aggregator {
        Aggregator::Max => rolling_max(series, window, min_periods),
        Aggregator::Mean => rolling_mean(series, window, min_periods),
    }
}

/// Positions a rolling result is moved back so it is reported at the center
/// of its window.
///
/// Rounds up for odd widths: a window of 5 is shifted by 3.
pub fn centering_shift(window: usize) -> usize {
    window.div_ceil(2)
}

/// Move every value `periods` positions toward the start of the series.
///
/// `out[i] = series[i + periods]`; the last `periods` positions become NaN.
pub fn shift_backward(series: &[f64], periods: usize) -> Vec<f64> {
    let n = series.len();
    let mut result = vec![f64::NAN; n];
    if periods < n {
        result[..n - periods].copy_from_slice(&series[periods..]);
    }
    result
}

/// Rolling aggregate with `min_periods = 1`, re-centered on its window.
pub fn centered_rolling(series: &[f64], window: usize, aggregator: Aggregator) -> Vec<f64> {
    let aggregated = rolling(series, window, 1, aggregator);
    shift_backward(&aggregated, centering_shift(window))
}
