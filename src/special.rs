//! Special mathematical functions.
//!
//! The closed-form kernels behind the Gaussian density and the binomial
//! mass function, evaluated directly without log-space rewriting.

/// 1/√(2π) ≈ 0.3989422804014327
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal PDF φ(z) = (1/√(2π)) exp(-z²/2).
///
/// # Examples
/// ```
/// use u_probdist::special::standard_normal_pdf;
/// let peak = standard_normal_pdf(0.0);
/// assert!((peak - 0.3989422804014327).abs() < 1e-15);
/// ```
pub fn standard_normal_pdf(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    FRAC_1_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Binomial coefficient `n! / (k!·(n−k)!)`.
///
/// # Algorithm
/// Multiplicative form over the shorter side `m = min(k, n−k)`:
///
/// ```text
/// C(n, k) = ∏_{i=1..m} (n − m + i) / i
/// ```
///
/// Every partial product is itself a binomial coefficient C(n−m+i, i), so
/// the result is exact while it stays below 2⁵³ and only grows as large as
/// the answer. The result is `+∞` once C(n, k) exceeds `f64::MAX` (around
/// n ≈ 1030 for the central term).
///
/// # Returns
/// - `None` if `k > n`.
///
/// # Examples
/// ```
/// use u_probdist::special::binomial_coefficient;
/// assert_eq!(binomial_coefficient(5, 2), Some(10.0));
/// assert_eq!(binomial_coefficient(171, 0), Some(1.0));
/// ```
pub fn binomial_coefficient(n: u64, k: u64) -> Option<f64> {
    if k > n {
        return None;
    }
    let m = k.min(n - k);
    Some((1..=m).fold(1.0, |acc, i| acc * (n - m + i) as f64 / i as f64))
}
