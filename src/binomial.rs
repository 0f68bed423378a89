//! Binomial distribution model.
//!
//! A [`Binomial`] counts successes in `n` independent trials with success
//! probability `p`. Its mean and standard deviation are derived from
//! `(p, n)` and recomputed whenever either parameter changes through the
//! model:
//!
//! - Mean: p·n
//! - Std Dev: √(n·p·(1−p))
//!
//! `(p, n)` can also be re-derived from a sample of 0/1 trial outcomes
//! with [`Binomial::refit_from_sample`].
//!
//! # Examples
//!
//! ```
//! use u_probdist::binomial::Binomial;
//!
//! let a = Binomial::new(0.4, 20).unwrap();
//! let b = Binomial::new(0.4, 30).unwrap();
//! let c = a.add(&b).unwrap();
//! assert_eq!(c.n(), 50);
//! assert!((c.mean() - 20.0).abs() < 1e-12);
//! ```

use std::fmt;

use rand::Rng;

use crate::distribution::{Distribution, StatisticalModel};
use crate::error::{DistributionError, Result};
use crate::plot::{PlotKind, PlotSeries};
use crate::{random, special, stats};

/// Binomial distribution B(n, p) with an attached sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    base: Distribution,
    p: f64,
    n: u64,
}

impl Default for Binomial {
    /// B(30, 0.2).
    fn default() -> Self {
        Self::with_params(0.2, 30)
    }
}

fn check_p(p: f64) -> Result<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(DistributionError::InvalidParameters(format!(
            "Binomial requires p in [0, 1], got p={p}"
        )));
    }
    Ok(())
}

impl Binomial {
    /// Creates a binomial distribution with success probability `p` over
    /// `n` trials.
    ///
    /// # Errors
    /// Returns [`DistributionError::InvalidParameters`] if `p` is not a
    /// finite value in `[0, 1]`.
    pub fn new(p: f64, n: u64) -> Result<Self> {
        check_p(p)?;
        Ok(Self::with_params(p, n))
    }

    fn with_params(p: f64, n: u64) -> Self {
        let mut b = Self {
            base: Distribution::new(0.0, 0.0),
            p,
            n,
        };
        b.calculate_mean();
        b.calculate_stdev();
        b
    }

    pub fn base(&self) -> &Distribution {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Distribution {
        &mut self.base
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn mean(&self) -> f64 {
        self.base.mean()
    }

    pub fn stdev(&self) -> f64 {
        self.base.stdev()
    }

    /// Sets `p` and recomputes mean and standard deviation.
    ///
    /// # Errors
    /// [`DistributionError::InvalidParameters`] if `p` is outside `[0, 1]`;
    /// the model is left unchanged.
    pub fn set_p(&mut self, p: f64) -> Result<()> {
        check_p(p)?;
        self.p = p;
        self.recompute();
        Ok(())
    }

    /// Sets `n` and recomputes mean and standard deviation.
    pub fn set_n(&mut self, n: u64) {
        self.n = n;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.calculate_mean();
        self.calculate_stdev();
    }

    /// Sets and returns the mean `p·n`.
    pub fn calculate_mean(&mut self) -> f64 {
        let mean = self.p * self.n as f64;
        self.base.set_mean(mean);
        mean
    }

    /// Sets and returns the standard deviation `√(n·p·(1−p))`.
    pub fn calculate_stdev(&mut self) -> f64 {
        let stdev = (self.n as f64 * self.p * (1.0 - self.p)).sqrt();
        self.base.set_stdev(stdev);
        stdev
    }

    /// Re-derives `(p, n)` from a sample of 0/1 trial outcomes:
    /// `n` = sample length, `p` = sample mean. Mean and standard deviation
    /// are recomputed. Returns the new `(p, n)`.
    ///
    /// # Errors
    /// - [`DistributionError::Degenerate`] if the sample is empty.
    /// - [`DistributionError::InvalidParameters`] if a value is not 0 or 1.
    ///
    /// The model is untouched on error.
    pub fn refit_from_sample(&mut self) -> Result<(f64, u64)> {
        let data = self.base.sample();
        if let Some(bad) = data.iter().find(|&&x| x != 0.0 && x != 1.0) {
            return Err(DistributionError::InvalidParameters(format!(
                "binomial sample values must be 0 or 1, found {bad}"
            )));
        }
        let p = stats::mean(data).ok_or_else(|| {
            DistributionError::Degenerate("cannot refit from an empty sample".into())
        })?;
        let n = data.len() as u64;

        self.p = p;
        self.n = n;
        self.recompute();
        log::debug!("refit binomial from sample: p={p}, n={n}");
        Ok((p, n))
    }

    /// Probability of exactly `k` successes:
    ///
    /// ```text
    /// P(k; n, p) = n! / (k!·(n−k)!) · p^k · (1−p)^(n−k)
    /// ```
    ///
    /// The coefficient uses the multiplicative form of
    /// [`special::binomial_coefficient`], which stays finite well past
    /// the point where `n!` overflows (up to n ≈ 1030 for central `k`).
    ///
    /// # Errors
    /// - [`DistributionError::InvalidParameters`] if `k > n`.
    /// - [`DistributionError::Degenerate`] if C(n, k) is not representable
    ///   as a finite `f64`.
    pub fn pmf(&self, k: u64) -> Result<f64> {
        let coefficient = special::binomial_coefficient(self.n, k).ok_or_else(|| {
            DistributionError::InvalidParameters(format!(
                "k must be <= n, got k={k} n={}",
                self.n
            ))
        })?;
        if !coefficient.is_finite() {
            return Err(DistributionError::Degenerate(format!(
                "C({}, {k}) overflows f64",
                self.n
            )));
        }
        Ok(coefficient * self.p.powf(k as f64) * (1.0 - self.p).powf((self.n - k) as f64))
    }

    /// `k = 0..=n` paired with `pmf(k)`.
    ///
    /// # Errors
    /// [`DistributionError::Degenerate`] if any coefficient overflows.
    pub fn produce_pmf_series(&self) -> Result<(Vec<u64>, Vec<f64>)> {
        let ks: Vec<u64> = (0..=self.n).collect();
        let masses = ks.iter().map(|&k| self.pmf(k)).collect::<Result<Vec<_>>>()?;
        Ok((ks, masses))
    }

    /// Mass function as a bar chart.
    pub fn pmf_plot(&self) -> Result<PlotSeries> {
        let (ks, masses) = self.produce_pmf_series()?;
        Ok(PlotSeries::new(PlotKind::Bar, ks.into_iter().map(|k| k as f64).collect(), masses)
            .with_title("PDF of the binomial distribution")
            .with_labels("Values", "PDF"))
    }

    /// Expected failure and success counts: labels `["0", "1"]` with
    /// heights `[(1−p)·n, p·n]`.
    pub fn outcome_bar_series(&self) -> (Vec<String>, Vec<f64>) {
        let n = self.n as f64;
        (
            vec!["0".to_string(), "1".to_string()],
            vec![(1.0 - self.p) * n, self.p * n],
        )
    }

    /// Expected outcome counts as a categorical bar chart.
    pub fn outcome_plot(&self) -> PlotSeries {
        let (labels, heights) = self.outcome_bar_series();
        PlotSeries::new(PlotKind::Bar, vec![0.0, 1.0], heights)
            .with_tick_labels(labels)
            .with_title("Histogram for data")
            .with_labels("bins", "data")
    }

    /// Distribution of the sum of two independent binomials with equal `p`:
    /// B(n₁ + n₂, p). The result has an empty sample.
    ///
    /// # Errors
    /// - [`DistributionError::Precondition`] if the `p` values differ.
    /// - [`DistributionError::InvalidParameters`] if `n₁ + n₂` overflows `u64`.
    pub fn add(&self, other: &Binomial) -> Result<Binomial> {
        if self.p != other.p {
            return Err(DistributionError::Precondition(
                "p values are not equal".into(),
            ));
        }
        let n = self.n.checked_add(other.n).ok_or_else(|| {
            DistributionError::InvalidParameters(format!(
                "trial count {} + {} overflows u64",
                self.n, other.n
            ))
        })?;
        Ok(Self::with_params(self.p, n))
    }

    /// Draws `len` Bernoulli(p) trial outcomes (0.0 or 1.0), suitable for
    /// [`Binomial::refit_from_sample`].
    pub fn draw_sample<R: Rng>(&self, len: usize, rng: &mut R) -> Result<Vec<f64>> {
        random::bernoulli_outcomes(self.p, len, rng)
    }

    /// `"mean {mean}, standard deviation {stdev}, p {p}, n {n}"`.
    pub fn describe(&self) -> String {
        format!(
            "mean {}, standard deviation {}, p {}, n {}",
            self.mean(),
            self.stdev(),
            self.p,
            self.n
        )
    }
}

impl StatisticalModel for Binomial {
    type Point = u64;

    fn base(&self) -> &Distribution {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Distribution {
        &mut self.base
    }

    fn calculate_mean(&mut self) -> Result<f64> {
        Ok(Binomial::calculate_mean(self))
    }

    fn calculate_stdev(&mut self) -> Result<f64> {
        Ok(Binomial::calculate_stdev(self))
    }

    fn density(&self, k: u64) -> Result<f64> {
        self.pmf(k)
    }

    fn combine(&self, other: &Self) -> Result<Self> {
        self.add(other)
    }

    fn describe(&self) -> String {
        Binomial::describe(self)
    }
}

impl fmt::Display for Binomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let b = Binomial::default();
        assert_eq!(b.p(), 0.2);
        assert_eq!(b.n(), 30);
        assert!((b.mean() - 6.0).abs() < 1e-12);
        assert!((b.stdev() - (30.0_f64 * 0.2 * 0.8).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_new_invalid_p() {
        assert!(Binomial::new(-0.1, 10).is_err());
        assert!(Binomial::new(1.1, 10).is_err());
        assert!(Binomial::new(f64::NAN, 10).is_err());
        assert!(Binomial::new(0.0, 0).is_ok());
        assert!(Binomial::new(1.0, 5).is_ok());
    }

    #[test]
    fn test_moments() {
        let b = Binomial::new(0.4, 25).unwrap();
        assert!((b.mean() - 10.0).abs() < 1e-12);
        assert!((b.stdev() - 6.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_setters_recompute() {
        let mut b = Binomial::new(0.5, 10).unwrap();
        b.set_n(20);
        assert!((b.mean() - 10.0).abs() < 1e-12);
        b.set_p(0.25).unwrap();
        assert!((b.mean() - 5.0).abs() < 1e-12);
        assert!((b.stdev() - (20.0_f64 * 0.25 * 0.75).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_set_p_invalid_keeps_state() {
        let mut b = Binomial::new(0.5, 10).unwrap();
        assert!(b.set_p(2.0).is_err());
        assert_eq!(b.p(), 0.5);
        assert!((b.mean() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_refit_from_sample() {
        let mut b = Binomial::default();
        b.base_mut().set_sample(vec![1.0, 0.0, 1.0, 1.0, 0.0]);
        let (p, n) = b.refit_from_sample().unwrap();
        assert!((p - 0.6).abs() < 1e-12);
        assert_eq!(n, 5);
        assert_eq!(b.n(), 5);
        assert!((b.mean() - 3.0).abs() < 1e-12);
        assert!((b.stdev() - (5.0_f64 * 0.6 * 0.4).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_refit_empty_is_atomic() {
        let mut b = Binomial::new(0.3, 12).unwrap();
        let before = b.clone();
        let err = b.refit_from_sample().unwrap_err();
        assert!(matches!(err, DistributionError::Degenerate(_)));
        assert_eq!(b, before);
    }

    #[test]
    fn test_refit_non_binary_sample() {
        let mut b = Binomial::new(0.3, 12).unwrap();
        b.base_mut().set_sample(vec![1.0, 2.0]);
        let err = b.refit_from_sample().unwrap_err();
        assert!(matches!(err, DistributionError::InvalidParameters(_)));
        assert_eq!(b.n(), 12);
    }

    #[test]
    fn test_pmf_known_values() {
        let b = Binomial::new(0.4, 20).unwrap();
        assert!((b.pmf(5).unwrap() - 0.0746470195).abs() < 1e-9);
        assert!((b.pmf(3).unwrap() - 0.0123496907).abs() < 1e-9);
    }

    #[test]
    fn test_pmf_boundaries() {
        let b = Binomial::new(0.3, 8).unwrap();
        assert!((b.pmf(0).unwrap() - 0.7_f64.powi(8)).abs() < 1e-15);
        assert!((b.pmf(8).unwrap() - 0.3_f64.powi(8)).abs() < 1e-15);
    }

    #[test]
    fn test_pmf_k_above_n() {
        let b = Binomial::new(0.3, 8).unwrap();
        assert!(matches!(
            b.pmf(9),
            Err(DistributionError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_pmf_degenerate_p() {
        let zero = Binomial::new(0.0, 4).unwrap();
        assert_eq!(zero.pmf(0).unwrap(), 1.0);
        assert_eq!(zero.pmf(2).unwrap(), 0.0);
        let one = Binomial::new(1.0, 4).unwrap();
        assert_eq!(one.pmf(4).unwrap(), 1.0);
        assert_eq!(one.pmf(3).unwrap(), 0.0);
    }

    #[test]
    fn test_pmf_series_scalar_k() {
        let b = Binomial::new(0.5, 4).unwrap();
        let (ks, masses) = b.produce_pmf_series().unwrap();
        assert_eq!(ks, vec![0, 1, 2, 3, 4]);
        let expected = [1.0, 4.0, 6.0, 4.0, 1.0].map(|c| c / 16.0);
        for (m, e) in masses.iter().zip(expected) {
            assert!((m - e).abs() < 1e-15);
        }
    }

    #[test]
    fn test_add_equal_p() {
        let a = Binomial::new(0.4, 20).unwrap();
        let b = Binomial::new(0.4, 30).unwrap();
        let c = a.add(&b).unwrap();
        assert_eq!(c.p(), 0.4);
        assert_eq!(c.n(), 50);
        assert!((c.mean() - 20.0).abs() < 1e-12);
        assert!((c.stdev() - (50.0_f64 * 0.4 * 0.6).sqrt()).abs() < 1e-12);
        assert!(c.base().sample().is_empty());
    }

    #[test]
    fn test_add_unequal_p() {
        let a = Binomial::new(0.3, 10).unwrap();
        let b = Binomial::new(0.5, 10).unwrap();
        match a.add(&b) {
            Err(DistributionError::Precondition(msg)) => assert_eq!(msg, "p values are not equal"),
            other => panic!("expected Precondition, got {other:?}"),
        }
    }

    #[test]
    fn test_describe() {
        let b = Binomial::new(0.4, 25).unwrap();
        assert_eq!(b.describe(), format!("mean {}, standard deviation {}, p 0.4, n 25", b.mean(), b.stdev()));
        assert_eq!(b.to_string(), b.describe());
        let half = Binomial::new(0.5, 4).unwrap();
        assert_eq!(half.describe(), "mean 2, standard deviation 1, p 0.5, n 4");
    }

    #[test]
    fn test_outcome_bars() {
        let b = Binomial::new(0.25, 8).unwrap();
        let (labels, heights) = b.outcome_bar_series();
        assert_eq!(labels, vec!["0", "1"]);
        assert_eq!(heights, vec![6.0, 2.0]);
        let plot = b.outcome_plot();
        assert_eq!(plot.kind, PlotKind::Bar);
        assert_eq!(plot.tick_labels, Some(labels));
    }

    #[test]
    fn test_pmf_plot() {
        let plot = Binomial::new(0.5, 6).unwrap().pmf_plot().unwrap();
        assert_eq!(plot.len(), 7);
        assert_eq!(plot.x[6], 6.0);
    }

    #[test]
    fn test_pmf_past_factorial_range() {
        let b = Binomial::new(0.5, 171).unwrap();
        let at_zero = b.pmf(0).unwrap();
        assert!((at_zero / 0.5_f64.powi(171) - 1.0).abs() < 1e-12);
        let center = b.pmf(85).unwrap();
        assert!(center.is_finite() && center > 0.0 && center < 1.0);
        let (_, masses) = b.produce_pmf_series().unwrap();
        let total: f64 = masses.iter().sum();
        assert!((total - 1.0).abs() < 1e-12, "total = {total}");
    }

    #[test]
    fn test_pmf_coefficient_overflow() {
        let b = Binomial::new(0.5, 2000).unwrap();
        assert!(matches!(b.pmf(1000), Err(DistributionError::Degenerate(_))));
        assert!(b.pmf(0).unwrap().is_finite());
        assert!(matches!(
            b.produce_pmf_series(),
            Err(DistributionError::Degenerate(_))
        ));
    }

    #[test]
    fn test_add_trial_count_overflow() {
        let a = Binomial::new(0.5, u64::MAX).unwrap();
        let b = Binomial::new(0.5, 1).unwrap();
        assert!(matches!(
            a.add(&b),
            Err(DistributionError::InvalidParameters(_))
        ));
    }

    fn combined_density<M: StatisticalModel>(a: &M, b: &M, at: M::Point) -> Result<f64> {
        a.combine(b)?.density(at)
    }

    #[test]
    fn test_model_interface() {
        let a = Binomial::new(0.5, 2).unwrap();
        let b = Binomial::new(0.5, 2).unwrap();
        let mass = combined_density(&a, &b, 2).unwrap();
        assert!((mass - 6.0 / 16.0).abs() < 1e-15);
        let c = Binomial::new(0.25, 2).unwrap();
        assert!(matches!(
            combined_density(&a, &c, 0),
            Err(DistributionError::Precondition(_))
        ));
        assert_eq!(StatisticalModel::density(&a, 0).unwrap(), a.pmf(0).unwrap());
    }

    #[test]
    fn test_draw_then_refit() {
        let b = Binomial::new(0.3, 1).unwrap();
        let mut rng = random::create_rng(9);
        let mut fitted = Binomial::default();
        fitted.base_mut().set_sample(b.draw_sample(10_000, &mut rng).unwrap());
        let (p, n) = fitted.refit_from_sample().unwrap();
        assert_eq!(n, 10_000);
        assert!((p - 0.3).abs() < 0.03, "p = {p}");
    }
}
