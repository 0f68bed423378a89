//! Error types for distribution models.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised by sample loading, fitting, density evaluation, or
/// combination of distribution models.
#[derive(Error, Debug)]
pub enum DistributionError {
    /// The sample source could not be opened or read.
    #[error("cannot read sample file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the sample source is not a valid number.
    #[error("line {line}: {value:?} is not a valid number")]
    Parse { line: usize, value: String },

    /// An operation was invoked on operands that do not satisfy its
    /// precondition (e.g. summing binomials with different `p`).
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// The input is degenerate for the requested computation
    /// (empty sample, zero denominator, zero standard deviation).
    #[error("degenerate input: {0}")]
    Degenerate(String),

    /// Parameters violate distribution constraints.
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DistributionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_names_line() {
        let err = DistributionError::Parse {
            line: 3,
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "line 3: \"abc\" is not a valid number");
    }

    #[test]
    fn test_file_error_keeps_source() {
        use std::error::Error as _;
        let err = DistributionError::File {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
    }
}
