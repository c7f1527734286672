//! Range resolution: explicit bounds widened by the observed extrema.

use crate::core::{config::Config, error::HistError};

/// Inclusive `[min, max]` span covered by the bins. `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    #[inline]
    #[must_use]
    pub fn width(self) -> f64 {
        self.max - self.min
    }

    /// Width of one of `parts` equal slices.
    ///
    /// Finite even when `max - min` itself exceeds `f64::MAX`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step(self, parts: usize) -> f64 {
        let n = parts as f64;
        let w = self.width();
        if w.is_finite() {
            w / n
        } else {
            self.max / n - self.min / n
        }
    }

    /// `(v - min) / step`, without overflowing on the subtraction.
    #[inline]
    #[must_use]
    pub fn offset(self, v: f64, step: f64) -> f64 {
        let d = v - self.min;
        if d.is_finite() {
            d / step
        } else {
            v / step - self.min / step
        }
    }

    /// `min + step * k`, without overflowing on the product.
    #[inline]
    #[must_use]
    pub fn point(self, step: f64, k: f64) -> f64 {
        let d = step * k;
        if d.is_finite() {
            self.min + d
        } else {
            let half = step * (k / 2.0);
            (self.min + half) + half
        }
    }

    /// Zero-width range; every sample equals `min`.
    #[inline]
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width() == 0.0
    }

    /// Seed with the explicit bounds (or the infinite "no bound yet"
    /// sentinels) and widen over every sample.
    ///
    /// * An explicit bound is never narrowed, only extended by data outside it.
    /// * Fails with [`HistError::BadRange`] if either end is still infinite
    ///   after the scan, or if explicit bounds with no data left `min > max`.
    pub fn resolve(samples: &[f64], config: &Config) -> Result<Self, HistError> {
        let mut low = config.min_val.unwrap_or(f64::INFINITY);
        let mut high = config.max_val.unwrap_or(f64::NEG_INFINITY);

        for &s in samples {
            low = low.min(s);
            high = high.max(s);
        }

        if low.is_infinite() || high.is_infinite() || low > high {
            return Err(HistError::BadRange {
                min: low,
                max: high,
            });
        }

        Ok(Self {
            min: low,
            max: high,
        })
    }
}
