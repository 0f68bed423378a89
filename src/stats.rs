//! Descriptive statistics over raw samples.
//!
//! Plain closed-form estimators: straight summation, arithmetic mean,
//! and sums of squared deviations around a caller-supplied center.
//! Every function handles the empty slice explicitly and returns `None`
//! instead of dividing by zero.

/// Sums the slice with a straight left-to-right accumulation.
pub fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Computes the arithmetic mean.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_probdist::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(mean(&v), Some(3.0));
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(sum(data) / data.len() as f64)
}

/// Sum of squared deviations `Σ (x − center)²`.
///
/// The center is taken as given, not recomputed from `data`, so a stale
/// center yields the deviations around that stale value.
pub fn sum_squared_deviations(data: &[f64], center: f64) -> f64 {
    data.iter()
        .map(|&x| {
            let d = x - center;
            d * d
        })
        .sum()
}

/// Standard deviation around `center` with an explicit denominator choice.
///
/// With `bessel = true` the denominator is `n − 1` (sample estimator),
/// otherwise `n` (population estimator).
///
/// # Returns
/// - `None` if the denominator would be zero.
///
/// # Examples
/// ```
/// use u_probdist::stats::std_dev_around;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(std_dev_around(&v, 5.0, false), Some(2.0));
/// ```
pub fn std_dev_around(data: &[f64], center: f64, bessel: bool) -> Option<f64> {
    let denom = if bessel {
        data.len().checked_sub(1)?
    } else {
        data.len()
    };
    if denom == 0 {
        return None;
    }
    Some((sum_squared_deviations(data, center) / denom as f64).sqrt())
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_probdist::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(1.0));
/// ```
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

/// `n` evenly spaced points over the half-open range `[start, end)`.
///
/// Point `i` is `start + i·(end − start)/n`, so `end` itself is never
/// produced. Returns an empty vector for `n == 0`.
///
/// # Examples
/// ```
/// use u_probdist::stats::grid;
/// assert_eq!(grid(0.0, 1.0, 4), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn grid(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = (end - start) / n as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}
