//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{
    constants::{LEGAL_BIN_COUNTS, MAX_CHART_HEIGHT},
    data::ReadError,
};

/// Precise configuration faults, all caught before any input is read.
#[derive(Debug)]
pub enum ConfigError {
    IllegalBinCount(usize),
    NonFiniteBound { name: &'static str, value: f64 },
    InvertedBounds { low: f64, high: f64 },
    ZeroHeight,
    HeightTooLarge(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IllegalBinCount(n) => {
                write!(f, "Illegal number of bins: {n} (legal values: ")?;
                for (i, legal) in LEGAL_BIN_COUNTS.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{legal}")?;
                }
                f.write_str(")")
            }
            ConfigError::NonFiniteBound { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            ConfigError::InvertedBounds { low, high } => {
                write!(f, "min-val {low} must be <= max-val {high}")
            }
            ConfigError::ZeroHeight => f.write_str("chart height must be at least 1"),
            ConfigError::HeightTooLarge(h) => {
                write!(f, "chart height {h} exceeds the maximum of {MAX_CHART_HEIGHT}")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum HistError {
    Io(io::Error),
    Config(ConfigError),
    Read(ReadError),
    EmptyData,
    BadRange { min: f64, max: f64 },
}

impl fmt::Display for HistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistError::Io(e) => write!(f, "{e}"),
            HistError::Config(e) => write!(f, "{e}"),
            HistError::Read(e) => write!(f, "Error reading data: {e}"),
            HistError::EmptyData => f.write_str("No data read!"),
            HistError::BadRange { min, max } => {
                write!(f, "bad bin range: ({min:.6}, {max:.6})")
            }
        }
    }
}
impl Error for HistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HistError::Io(e) => Some(e),
            HistError::Config(e) => Some(e),
            HistError::Read(e) => Some(e),
            HistError::EmptyData | HistError::BadRange { .. } => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for HistError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for HistError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<ReadError> for HistError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_bin_count_lists_the_legal_ones() {
        let msg = ConfigError::IllegalBinCount(15).to_string();
        assert_eq!(msg, "Illegal number of bins: 15 (legal values: 10, 20, 40, 80)");
    }

    #[test]
    fn bad_range_reports_both_ends() {
        let msg = HistError::BadRange {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
        .to_string();
        assert_eq!(msg, "bad bin range: (inf, -inf)");
    }
}
