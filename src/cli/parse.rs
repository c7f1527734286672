use clap::{ArgAction, Parser};

use crate::core::constants::{CHART_HEIGHT, DEFAULT_NUM_BINS};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "histo",
    about = "Quick-look ASCII histogram of numbers read one per line"
)]
pub struct Cli {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Number of bins to include (legal values: 10, 20, 40, 80)
    #[arg(long, default_value_t = DEFAULT_NUM_BINS)]
    pub num_bins: usize,

    /// Minimum value to graph (widened by smaller data)
    #[arg(long, allow_negative_numbers = true)]
    pub min_val: Option<f64>,
    /// Maximum value to graph (widened by larger data)
    #[arg(long, allow_negative_numbers = true)]
    pub max_val: Option<f64>,

    /// Ignore lines that do not parse as numbers
    #[arg(long)]
    pub skip_errors: bool,

    /// Ignore lines that parse to NaN or infinity; otherwise bail out with an error
    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        value_name = "BOOL"
    )]
    pub skip_nan: bool,

    /// Do not print the `N = <count>` line above the chart
    #[arg(long)]
    pub no_total: bool,

    /// Do not draw the x axis under the chart
    #[arg(long)]
    pub no_axis: bool,

    /// Treat empty input as a no-op instead of an error
    #[arg(long)]
    pub allow_empty: bool,

    /// Chart height in rows
    #[arg(long, default_value_t = CHART_HEIGHT)]
    pub height: usize,

    /// Emit debug diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}
