//! Run-time configuration object + fluent builder.

use std::fmt;

use crate::core::{
    constants::{CHART_HEIGHT, CHART_WIDTH, DEFAULT_NUM_BINS, MAX_CHART_HEIGHT},
    error::ConfigError,
};

/// One of the bin counts the 80 column chart can split evenly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinCount {
    Ten,
    Twenty,
    Forty,
    Eighty,
}

impl BinCount {
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Forty => 40,
            Self::Eighty => 80,
        }
    }

    /// Columns drawn per bin on a chart of `CHART_WIDTH` columns.
    #[inline]
    #[must_use]
    pub const fn cols_per_bin(self) -> usize {
        CHART_WIDTH / self.get()
    }
}

impl Default for BinCount {
    fn default() -> Self {
        Self::Twenty
    }
}

impl TryFrom<usize> for BinCount {
    type Error = ConfigError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            40 => Ok(Self::Forty),
            80 => Ok(Self::Eighty),
            _ => Err(ConfigError::IllegalBinCount(n)),
        }
    }
}

impl fmt::Display for BinCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// What the reader does with a line that is not a number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorPolicy {
    Abort,
    Skip,
}

/// What the reader does with a line that parses to NaN or an infinity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NanPolicy {
    Abort,
    Skip,
}

/// Immutable parameters handed to every pipeline stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub bins: BinCount,
    pub min_val: Option<f64>,
    pub max_val: Option<f64>,
    pub on_error: ErrorPolicy,
    pub on_nan: NanPolicy,
    pub show_total: bool,
    pub show_axis: bool,
    pub empty_is_error: bool,
    pub width: usize,
    pub height: usize,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bins: BinCount::default(),
            min_val: None,
            max_val: None,
            on_error: ErrorPolicy::Abort,
            on_nan: NanPolicy::Skip,
            show_total: true,
            show_axis: true,
            empty_is_error: true,
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    num_bins: usize,
    min_val: Option<f64>,
    max_val: Option<f64>,
    skip_errors: bool,
    skip_nan: bool,
    show_total: bool,
    show_axis: bool,
    empty_is_error: bool,
    height: usize,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self {
            num_bins: DEFAULT_NUM_BINS,
            min_val: None,
            max_val: None,
            skip_errors: false,
            skip_nan: true,
            show_total: true,
            show_axis: true,
            empty_is_error: true,
            height: CHART_HEIGHT,
        }
    }

    #[inline]
    #[must_use]
    pub fn num_bins(mut self, n: usize) -> Self {
        self.num_bins = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn min_val(mut self, v: f64) -> Self {
        self.min_val = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_val(mut self, v: f64) -> Self {
        self.max_val = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn min_val_opt(mut self, v: Option<f64>) -> Self {
        self.min_val = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn max_val_opt(mut self, v: Option<f64>) -> Self {
        self.max_val = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn skip_errors(mut self, on: bool) -> Self {
        self.skip_errors = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn skip_nan(mut self, on: bool) -> Self {
        self.skip_nan = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn show_total(mut self, on: bool) -> Self {
        self.show_total = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn show_axis(mut self, on: bool) -> Self {
        self.show_axis = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn empty_is_error(mut self, on: bool) -> Self {
        self.empty_is_error = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, h: usize) -> Self {
        self.height = h;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let bins = BinCount::try_from(self.num_bins)?;

        for (name, bound) in [("min-val", self.min_val), ("max-val", self.max_val)] {
            if let Some(v) = bound {
                if !v.is_finite() {
                    return Err(ConfigError::NonFiniteBound { name, value: v });
                }
            }
        }
        if let (Some(low), Some(high)) = (self.min_val, self.max_val) {
            if low > high {
                return Err(ConfigError::InvertedBounds { low, high });
            }
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.height > MAX_CHART_HEIGHT {
            return Err(ConfigError::HeightTooLarge(self.height));
        }

        Ok(Config {
            bins,
            min_val: self.min_val,
            max_val: self.max_val,
            on_error: if self.skip_errors {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            },
            on_nan: if self.skip_nan {
                NanPolicy::Skip
            } else {
                NanPolicy::Abort
            },
            show_total: self.show_total,
            show_axis: self.show_axis,
            empty_is_error: self.empty_is_error,
            width: CHART_WIDTH,
            height: self.height,
        })
    }
}
