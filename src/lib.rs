//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    bounds::Range,
    config::{BinCount, Config, ConfigBuilder, ErrorPolicy, NanPolicy},
    constants::{CHART_HEIGHT, CHART_WIDTH, LEGAL_BIN_COUNTS, TICK_COLUMNS},
    data::{ReadSummary, read_values},
    error::{ConfigError, HistError},
};

use tracing::debug;

pub use render::{BinSet, NO_COUNTS, Renderer, format_general};

/// Render an in-memory sample set as a complete histogram frame.
///
/// The samples are expected to be finite, as produced by [`read_values`].
/// An empty sample set is [`HistError::EmptyData`] when
/// `config.empty_is_error` is set and `Ok(None)` (nothing to draw) otherwise.
pub fn histogram(samples: &[f64], config: &Config) -> Result<Option<String>, HistError> {
    if samples.is_empty() {
        return if config.empty_is_error {
            Err(HistError::EmptyData)
        } else {
            Ok(None)
        };
    }
    let range = Range::resolve(samples, config)?;
    debug!(min = range.min, max = range.max, bins = %config.bins, "bin range");

    let bins = BinSet::build(samples, range, config.bins);
    Ok(Some(Renderer::new(config).render(&bins)))
}
