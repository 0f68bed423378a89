//! Gaussian (normal) distribution model.
//!
//! A [`Gaussian`] is parameterized by μ (`mean`) and σ (`stdev`). The
//! parameters are either given explicitly or fitted from the stored
//! sample with the moment estimators.
//!
//! # Fitting order
//!
//! [`Gaussian::calculate_stdev`] measures spread around the *stored*
//! mean. Call [`Gaussian::calculate_mean`] first (or use
//! [`Gaussian::fit`]) when the sample has changed; otherwise the
//! deviations are taken around a stale center.
//!
//! # Examples
//!
//! ```
//! use u_probdist::gaussian::Gaussian;
//!
//! let mut g = Gaussian::default();
//! g.base_mut().set_sample(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
//! g.calculate_mean().unwrap();
//! let sd = g.calculate_stdev(false).unwrap();
//! assert_eq!(sd, 2.0);
//! assert_eq!(g.describe(), "mean 5, standard deviation 2");
//! ```

use std::fmt;

use rand::Rng;

use crate::distribution::{Distribution, StatisticalModel};
use crate::error::{DistributionError, Result};
use crate::plot::{histogram, Figure, PlotKind, PlotSeries, SeriesConfig};
use crate::{random, special, stats};

/// Normal distribution N(μ, σ²) with an attached sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Gaussian {
    base: Distribution,
}

impl Default for Gaussian {
    /// Standard normal N(0, 1).
    fn default() -> Self {
        Self {
            base: Distribution::new(0.0, 1.0),
        }
    }
}

impl Gaussian {
    /// Creates a Gaussian with explicit μ and σ.
    ///
    /// # Errors
    /// Returns [`DistributionError::InvalidParameters`] if either parameter
    /// is not finite or `sigma < 0`. `sigma == 0` is accepted; density
    /// evaluation rejects it later.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        if !mu.is_finite() || !sigma.is_finite() || sigma < 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Gaussian requires finite μ and σ ≥ 0, got μ={mu}, σ={sigma}"
            )));
        }
        Ok(Self {
            base: Distribution::new(mu, sigma),
        })
    }

    /// Creates a Gaussian fitted to `sample` (mean, then Bessel-corrected
    /// standard deviation).
    pub fn from_sample(sample: Vec<f64>) -> Result<Self> {
        let mut g = Self::default();
        g.base.set_sample(sample);
        g.fit()?;
        Ok(g)
    }

    pub fn base(&self) -> &Distribution {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Distribution {
        &mut self.base
    }

    pub fn mean(&self) -> f64 {
        self.base.mean()
    }

    pub fn stdev(&self) -> f64 {
        self.base.stdev()
    }

    /// Sets and returns the arithmetic mean of the sample.
    ///
    /// # Errors
    /// [`DistributionError::Degenerate`] if the sample is empty.
    pub fn calculate_mean(&mut self) -> Result<f64> {
        let mean = stats::mean(self.base.sample()).ok_or_else(|| {
            DistributionError::Degenerate("cannot compute the mean of an empty sample".into())
        })?;
        self.base.set_mean(mean);
        Ok(mean)
    }

    /// Sets and returns the standard deviation of the sample around the
    /// stored mean.
    ///
    /// `sample = true` divides by `n − 1` (sample estimator),
    /// `sample = false` by `n` (population estimator).
    ///
    /// # Errors
    /// [`DistributionError::Degenerate`] if the denominator is zero.
    pub fn calculate_stdev(&mut self, sample: bool) -> Result<f64> {
        let data = self.base.sample();
        let center = self.base.mean();
        let stdev = stats::std_dev_around(data, center, sample).ok_or_else(|| {
            DistributionError::Degenerate(format!(
                "cannot compute a {} standard deviation from {} value(s)",
                if sample { "sample" } else { "population" },
                data.len()
            ))
        })?;
        if log::log_enabled!(log::Level::Warn) {
            if let Some(actual) = stats::mean(data) {
                if (actual - center).abs() > 1e-9 * actual.abs().max(1.0) {
                    log::warn!(
                        "standard deviation computed around mean {center}, sample mean is {actual}"
                    );
                }
            }
        }
        self.base.set_stdev(stdev);
        Ok(stdev)
    }

    /// Fits μ and σ to the sample: mean first, then the Bessel-corrected
    /// standard deviation. Returns `(mean, stdev)`.
    ///
    /// Nothing is stored unless both estimates succeed.
    pub fn fit(&mut self) -> Result<(f64, f64)> {
        let previous = self.base.mean();
        let mean = self.calculate_mean()?;
        match self.calculate_stdev(true) {
            Ok(stdev) => Ok((mean, stdev)),
            Err(e) => {
                self.base.set_mean(previous);
                Err(e)
            }
        }
    }

    /// Normal density at `x` for the current μ and σ.
    ///
    /// ```text
    /// f(x) = 1/(σ√(2π)) · exp(−½((x−μ)/σ)²)
    /// ```
    ///
    /// # Errors
    /// [`DistributionError::Degenerate`] if σ is zero.
    pub fn pdf(&self, x: f64) -> Result<f64> {
        let sigma = self.stdev();
        if sigma == 0.0 {
            return Err(DistributionError::Degenerate(
                "density is undefined for a zero standard deviation".into(),
            ));
        }
        let z = (x - self.mean()) / sigma;
        Ok(special::standard_normal_pdf(z) / sigma)
    }

    /// `n_points` evenly spaced x-values over `[min(sample), max(sample))`
    /// paired with the density at each.
    ///
    /// # Errors
    /// [`DistributionError::Degenerate`] if the sample is empty, contains
    /// NaN, or σ is zero.
    pub fn produce_plot_series(&self, n_points: usize) -> Result<(Vec<f64>, Vec<f64>)> {
        let data = self.base.sample();
        if data.is_empty() {
            return Err(DistributionError::Degenerate(
                "cannot span an empty sample".into(),
            ));
        }
        let (lo, hi) = stats::min(data)
            .zip(stats::max(data))
            .ok_or_else(|| {
                DistributionError::Degenerate("cannot span a sample containing NaN".into())
            })?;
        let x = stats::grid(lo, hi, n_points);
        let y = x.iter().map(|&v| self.pdf(v)).collect::<Result<Vec<_>>>()?;
        Ok((x, y))
    }

    /// Density series as a line plot.
    pub fn pdf_plot(&self, n_points: usize) -> Result<PlotSeries> {
        let (x, y) = self.produce_plot_series(n_points)?;
        Ok(PlotSeries::new(PlotKind::Line, x, y)
            .with_title("Normal Distribution for Sample Mean and Sample Standard Deviation")
            .with_labels("Data", "Density"))
    }

    /// Raw-count histogram of the sample.
    ///
    /// # Errors
    /// [`DistributionError::Degenerate`] if the sample is empty or constant.
    pub fn histogram_plot(&self, bins: usize) -> Result<PlotSeries> {
        let h = self.sample_histogram(bins)?;
        let counts = h.counts.iter().map(|&c| c as f64).collect();
        Ok(PlotSeries::new(PlotKind::Histogram, h.edges[..bins].to_vec(), counts)
            .with_title("Histogram of the data")
            .with_labels("Data", "Count"))
    }

    /// Normalized histogram above the fitted density, sharing one x-axis.
    pub fn histogram_pdf_figure(&self, config: SeriesConfig) -> Result<Figure> {
        let h = self.sample_histogram(config.histogram_bins)?;
        let normed = PlotSeries::new(
            PlotKind::Histogram,
            h.edges[..config.histogram_bins].to_vec(),
            h.densities,
        )
        .with_title("Normed Histogram of Data")
        .with_labels("Data", "Density");
        Ok(Figure {
            panels: vec![normed, self.pdf_plot(config.n_points)?],
            share_x: true,
        })
    }

    fn sample_histogram(&self, bins: usize) -> Result<crate::plot::Histogram> {
        histogram(self.base.sample(), bins).ok_or_else(|| {
            DistributionError::Degenerate(format!(
                "cannot bin {} value(s) into {bins} bin(s)",
                self.base.sample().len()
            ))
        })
    }

    /// Distribution of the sum of two independent Gaussians:
    /// μ = μ₁ + μ₂, σ = √(σ₁² + σ₂²). The result has an empty sample.
    pub fn add(&self, other: &Gaussian) -> Gaussian {
        let mean = self.mean() + other.mean();
        let stdev = (self.stdev().powi(2) + other.stdev().powi(2)).sqrt();
        Gaussian {
            base: Distribution::new(mean, stdev),
        }
    }

    /// Draws `len` values from N(μ, σ²).
    pub fn draw_sample<R: Rng>(&self, len: usize, rng: &mut R) -> Vec<f64> {
        (0..len)
            .map(|_| self.mean() + self.stdev() * random::standard_normal(rng))
            .collect()
    }

    /// `"mean {mean}, standard deviation {stdev}"`.
    pub fn describe(&self) -> String {
        format!("mean {}, standard deviation {}", self.mean(), self.stdev())
    }
}

impl StatisticalModel for Gaussian {
    type Point = f64;

    fn base(&self) -> &Distribution {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Distribution {
        &mut self.base
    }

    fn calculate_mean(&mut self) -> Result<f64> {
        Gaussian::calculate_mean(self)
    }

    /// Sample (Bessel-corrected) estimator.
    fn calculate_stdev(&mut self) -> Result<f64> {
        Gaussian::calculate_stdev(self, true)
    }

    fn density(&self, x: f64) -> Result<f64> {
        self.pdf(x)
    }

    fn combine(&self, other: &Self) -> Result<Self> {
        Ok(self.add(other))
    }

    fn describe(&self) -> String {
        Gaussian::describe(self)
    }
}

impl fmt::Display for Gaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
