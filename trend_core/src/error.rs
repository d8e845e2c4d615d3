use thiserror::Error;

/// Parameter-validation errors. The analytics functions themselves are total
/// over their documented input domain and never return errors; only the
/// smoothing constructors reject out-of-range constants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrendError {
    #[error("invalid smoothing constant: {0}")]
    InvalidSmoothing(&'static str),
}
