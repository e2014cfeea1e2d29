use std::fmt::{self, Display, Formatter};
use std::io;

/// Error type for engine construction, simulation runs, and the report and
/// parameter-file surfaces. Construction problems are never retried; they
/// surface immediately to the caller.
#[derive(Debug)]
pub enum SirError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    CsvError(csv::Error),
    /// Rejected construction parameters.
    Config(String),
    /// Total event rate reached zero while infections remained.
    DegenerateRates(String),
}

impl From<io::Error> for SirError {
    fn from(error: io::Error) -> Self {
        SirError::IoError(error)
    }
}

impl From<serde_json::Error> for SirError {
    fn from(error: serde_json::Error) -> Self {
        SirError::JsonError(error)
    }
}

impl From<csv::Error> for SirError {
    fn from(error: csv::Error) -> Self {
        SirError::CsvError(error)
    }
}

impl Display for SirError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SirError::IoError(error) => write!(f, "IO error: {error}"),
            SirError::JsonError(error) => write!(f, "JSON error: {error}"),
            SirError::CsvError(error) => write!(f, "CSV error: {error}"),
            SirError::Config(message) => write!(f, "invalid configuration: {message}"),
            SirError::DegenerateRates(message) => {
                write!(f, "degenerate event rates: {message}")
            }
        }
    }
}

impl std::error::Error for SirError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = SirError::Config("beta must be positive, got -1".to_string());
        assert_eq!(
            error.to_string(),
            "invalid configuration: beta must be positive, got -1"
        );
    }

    #[test]
    fn io_error_converts() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        let error: SirError = io_error.into();
        assert!(matches!(error, SirError::IoError(_)));
    }
}
