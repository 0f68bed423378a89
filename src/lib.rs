//! # u-probdist
//!
//! Gaussian and Binomial distribution models for the U-Engine ecosystem.
//!
//! Each model can be parameterized directly or fitted from an observed
//! sample, evaluates its density (or mass) function, combines with another
//! model of the same family, and summarizes itself as a string. Plotting
//! is left to the caller: the models only produce the numeric series.
//!
//! ## Modules
//!
//! - [`distribution`] — Shared sample/parameter holder, sample file loading,
//!   and the [`StatisticalModel`] interface
//! - [`gaussian`] — Normal distribution: fitting, pdf, sum of Gaussians
//! - [`binomial`] — Binomial distribution: moments, pmf, refit from 0/1 data
//! - [`plot`] — Plot series, histogram binning, and the renderer seam
//! - [`stats`] — Plain descriptive statistics over samples
//! - [`special`] — Normal kernel and binomial coefficients
//! - [`random`] — Seeded RNG and synthetic sample draws
//! - [`error`] — Error taxonomy
//!
//! ## Design Philosophy
//!
//! - **Explicit recomputation**: changing a sample never silently refits;
//!   `calculate_*` calls are the only way parameters follow the data
//! - **Closed-form estimators**: plain moment formulas, no iterative fitting
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod binomial;
pub mod distribution;
pub mod error;
pub mod gaussian;
pub mod plot;
pub mod random;
pub mod special;
pub mod stats;

pub use binomial::Binomial;
pub use distribution::{Distribution, StatisticalModel};
pub use error::{DistributionError, Result};
pub use gaussian::Gaussian;
