//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use bounds::Range;
pub use config::{BinCount, Config, ConfigBuilder, ErrorPolicy, NanPolicy};
pub use constants::{CHART_HEIGHT, CHART_WIDTH, LABEL_PRECISION, TICK_COLUMNS};
pub use data::{ReadSummary, read_values};
pub use error::{ConfigError, HistError};
