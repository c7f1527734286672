//! Bin counts to a fixed-size `#` grid.
//!
//! ### Workflow
//! 1. `scale_heights` normalizes each count against the tallest bin,
//!    `floor(count / max * height)`.
//! 2. `rasterize` walks rows from `height` down to 1 and fills a column when
//!    `row < scaled[bin(column)]`, so the tallest bar tops out one row below
//!    the grid's top edge.

use crate::core::constants::{BAR_CHAR, BLANK_CHAR};

/// Per-bin heights in `[0, height]`. `None` when every count is zero.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn scale_heights(counts: &[u64], height: usize) -> Option<Vec<usize>> {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return None;
    }
    let max = max as f64;
    Some(
        counts
            .iter()
            .map(|&c| ((c as f64 / max) * height as f64).floor() as usize)
            .collect(),
    )
}

/// Append a `width × height` grid to `buf`, one `\n`-terminated line per row.
///
/// `width` must be a multiple of `scaled.len()`.
pub fn rasterize(buf: &mut String, scaled: &[usize], width: usize, height: usize) {
    if scaled.is_empty() {
        return;
    }
    let cols_per_bin = width / scaled.len();
    debug_assert!(cols_per_bin > 0, "more bins than columns");

    buf.reserve(width.saturating_add(1).saturating_mul(height));
    for row in (1..=height).rev() {
        for x in 0..width {
            let bin = (x / cols_per_bin).min(scaled.len() - 1);
            buf.push(if row < scaled[bin] { BAR_CHAR } else { BLANK_CHAR });
        }
        buf.push('\n');
    }
}
