//! Shared data holder and model interface for distributions.
//!
//! [`Distribution`] stores an observed sample together with the current
//! `mean` and `stdev` parameters, and knows how to load a sample from a
//! newline-delimited text source. Concrete models ([`Gaussian`],
//! [`Binomial`]) own a `Distribution` and implement [`StatisticalModel`]
//! on top of it.
//!
//! `mean` and `stdev` are never recomputed implicitly: replacing the
//! sample leaves them untouched until a `calculate_*` call.
//!
//! # Sample file format
//!
//! One number per line, no header. Surrounding whitespace is trimmed and
//! blank lines are skipped.
//!
//! ```text
//! 1.5
//! 2
//! -0.25
//! ```
//!
//! [`Gaussian`]: crate::gaussian::Gaussian
//! [`Binomial`]: crate::binomial::Binomial

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{DistributionError, Result};

/// Observed sample plus the mean/standard deviation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    sample: Vec<f64>,
    mean: f64,
    stdev: f64,
}

impl Distribution {
    /// Creates a distribution with explicit parameters and an empty sample.
    ///
    /// The pair is not checked against any sample.
    pub fn new(mean: f64, stdev: f64) -> Self {
        Self {
            sample: Vec::new(),
            mean,
            stdev,
        }
    }

    pub fn sample(&self) -> &[f64] {
        &self.sample
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    /// Replaces the sample. `mean` and `stdev` are left as they are.
    pub fn set_sample(&mut self, sample: Vec<f64>) {
        self.sample = sample;
    }

    pub(crate) fn set_mean(&mut self, mean: f64) {
        self.mean = mean;
    }

    pub(crate) fn set_stdev(&mut self, stdev: f64) {
        self.stdev = stdev;
    }

    /// Loads a newline-delimited sample file, replacing the current sample.
    ///
    /// # Errors
    /// - [`DistributionError::File`] if the file cannot be opened or read.
    /// - [`DistributionError::Parse`] if a non-blank line is not a number.
    ///
    /// On error the previous sample is kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DistributionError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let sample = read_sample(BufReader::new(file)).map_err(|e| match e {
            ReadError::Io(source) => DistributionError::File {
                path: path.to_path_buf(),
                source,
            },
            ReadError::Parse(e) => e,
        })?;
        log::debug!("loaded {} values from {}", sample.len(), path.display());
        self.replace_loaded(sample);
        Ok(())
    }

    /// Loads a sample from any buffered reader, replacing the current sample.
    ///
    /// Read failures are reported as [`DistributionError::File`] with an
    /// empty path.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let sample = read_sample(reader).map_err(|e| match e {
            ReadError::Io(source) => DistributionError::File {
                path: Default::default(),
                source,
            },
            ReadError::Parse(e) => e,
        })?;
        log::debug!("loaded {} values from reader", sample.len());
        self.replace_loaded(sample);
        Ok(())
    }

    fn replace_loaded(&mut self, sample: Vec<f64>) {
        if sample.is_empty() {
            log::warn!("sample source contained no values");
        }
        self.sample = sample;
    }
}

/// Parses newline-delimited numbers.
///
/// # Examples
/// ```
/// use u_probdist::distribution::parse_sample;
/// let v = parse_sample("1\n2.5\n\n-3\n").unwrap();
/// assert_eq!(v, vec![1.0, 2.5, -3.0]);
/// ```
pub fn parse_sample(text: &str) -> Result<Vec<f64>> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| parse_line(i + 1, line).transpose())
        .collect()
}

enum ReadError {
    Io(std::io::Error),
    Parse(DistributionError),
}

fn read_sample<R: BufRead>(mut reader: R) -> std::result::Result<Vec<f64>, ReadError> {
    let mut sample = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(ReadError::Io)? == 0 {
            break;
        }
        line_no += 1;
        // Invalid UTF-8 is a malformed line, not an unreadable source.
        let line = std::str::from_utf8(&buf).map_err(|_| {
            ReadError::Parse(DistributionError::Parse {
                line: line_no,
                value: String::from_utf8_lossy(&buf).trim().to_string(),
            })
        })?;
        if let Some(x) = parse_line(line_no, line).map_err(ReadError::Parse)? {
            sample.push(x);
        }
    }
    Ok(sample)
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<f64>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| DistributionError::Parse {
            line: line_no,
            value: trimmed.to_string(),
        })
}

/// Interface shared by the concrete distribution models.
pub trait StatisticalModel {
    /// Domain of the density function: `f64` for continuous models,
    /// `u64` success counts for discrete ones.
    type Point;

    /// The underlying sample/parameter holder.
    fn base(&self) -> &Distribution;

    fn base_mut(&mut self) -> &mut Distribution;

    fn mean(&self) -> f64 {
        self.base().mean()
    }

    fn stdev(&self) -> f64 {
        self.base().stdev()
    }

    fn sample(&self) -> &[f64] {
        self.base().sample()
    }

    /// Loads a sample file into the model. Parameters are not refitted.
    fn load_sample(&mut self, path: &Path) -> Result<()> {
        self.base_mut().load(path)
    }

    /// Recomputes, stores, and returns the mean.
    fn calculate_mean(&mut self) -> Result<f64>;

    /// Recomputes, stores, and returns the standard deviation.
    fn calculate_stdev(&mut self) -> Result<f64>;

    /// Probability density (or mass) at `x` under the current parameters.
    fn density(&self, x: Self::Point) -> Result<f64>;

    /// Distribution of the sum of two independent models of this family.
    /// The result owns an empty sample.
    fn combine(&self, other: &Self) -> Result<Self>
    where
        Self: Sized;

    /// Human-readable parameter summary.
    fn describe(&self) -> String;
}
