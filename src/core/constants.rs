//! A collection of constants.

/// Chart width in characters. Every legal bin count divides it evenly.
pub const CHART_WIDTH: usize = 80;
/// Default chart height in rows.
pub const CHART_HEIGHT: usize = 24;
/// Tallest chart `--height` accepts.
pub const MAX_CHART_HEIGHT: usize = 1000;

/// Bin count used when none is given.
pub const DEFAULT_NUM_BINS: usize = 20;
/// The only bin counts the rasterizer accepts.
pub const LEGAL_BIN_COUNTS: [usize; 4] = [10, 20, 40, 80];

/// Axis tick positions, roughly the quartiles of an 80 column chart.
pub const TICK_COLUMNS: [usize; 4] = [9, 29, 49, 69];

/// Significant digits printed in axis labels.
///
/// 0.123456789 becomes 0.12345679
pub const LABEL_PRECISION: usize = 8;

/// Filled cell in the bar grid
pub const BAR_CHAR: char = '#';
/// Empty cell in the bar grid
pub const BLANK_CHAR: char = ' ';
/// Axis rule filler
pub const RULE_CHAR: char = '-';
/// Axis rule marker at each tick column
pub const TICK_CHAR: char = '+';
