//! Plot data hand-off.
//!
//! The models never draw anything. They produce [`PlotSeries`] values
//! (aligned x/y data plus title and axis labels) and group them into a
//! [`Figure`]; a [`PlotRenderer`] supplied by the caller turns a figure
//! into pixels, a terminal chart, a file, or whatever else it likes.
//!
//! # Examples
//!
//! ```
//! use u_probdist::plot::histogram;
//!
//! let data = [1.0, 1.5, 2.0, 2.5, 3.0];
//! let h = histogram(&data, 2).unwrap();
//! assert_eq!(h.counts, vec![2, 3]);
//! assert_eq!(h.edges.len(), 3);
//! ```

use crate::stats;

/// How a series is meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// Connected line through the points.
    Line,
    /// One bar per x-value.
    Bar,
    /// Bars over contiguous bins; x holds the left bin edges.
    Histogram,
}

/// A single drawable series with its labels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub kind: PlotKind,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Categorical tick labels for `x`, when the axis is not numeric.
    pub tick_labels: Option<Vec<String>>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl PlotSeries {
    pub fn new(kind: PlotKind, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            kind,
            x,
            y,
            tick_labels: None,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_tick_labels(mut self, labels: Vec<String>) -> Self {
        self.tick_labels = Some(labels);
        self
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// One or more series drawn as stacked panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub panels: Vec<PlotSeries>,
    /// Whether the panels share one x-axis.
    pub share_x: bool,
}

impl Figure {
    pub fn single(series: PlotSeries) -> Self {
        Self {
            panels: vec![series],
            share_x: false,
        }
    }
}

/// External collaborator that renders figures.
pub trait PlotRenderer {
    type Error;

    fn render(&mut self, figure: &Figure) -> Result<(), Self::Error>;
}

/// Defaults for generated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesConfig {
    /// Number of x-values in a continuous density series.
    pub n_points: usize,
    /// Number of equal-width histogram bins.
    pub histogram_bins: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            n_points: 50,
            histogram_bins: 10,
        }
    }
}

/// Equal-width histogram of a sample.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Bin width.
    pub bin_width: f64,
    /// Bin edges (length = bins + 1).
    pub edges: Vec<f64>,
    /// Bin counts.
    pub counts: Vec<usize>,
    /// Normalized heights: `count / (n · bin_width)`, integrating to 1.
    pub densities: Vec<f64>,
}

impl Histogram {
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }
}

/// Bins `data` into `bins` equal-width bins over `[min, max]`.
///
/// The maximum value is counted in the last bin.
///
/// # Returns
///
/// `None` if `data` is empty, `bins == 0`, data contains non-finite
/// values, or all values are equal.
pub fn histogram(data: &[f64], bins: usize) -> Option<Histogram> {
    if bins == 0 || data.iter().any(|v| !v.is_finite()) {
        return None;
    }
    let min_val = stats::min(data)?;
    let max_val = stats::max(data)?;
    let range = max_val - min_val;
    if range <= 0.0 {
        return None;
    }

    let bin_width = range / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|i| min_val + i as f64 * bin_width)
        .collect();

    let mut counts = vec![0_usize; bins];
    for &x in data {
        let bin = ((x - min_val) / bin_width).floor() as usize;
        let bin = bin.min(bins - 1);
        counts[bin] += 1;
    }

    let scale = data.len() as f64 * bin_width;
    let densities = counts.iter().map(|&c| c as f64 / scale).collect();

    Some(Histogram {
        bin_width,
        edges,
        counts,
        densities,
    })
}
