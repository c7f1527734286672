//! Whole-chart assembly into one buffer:
//! - optional `N = <total>` annotation
//! - the bar grid, or `no counts!` when every bin is empty
//! - optional two-line axis
//!
//! Nothing touches stdout here; the caller writes the finished frame in one
//! go, so a failure earlier in the pipeline never leaves half a chart behind.

use std::fmt::Write;

use tracing::warn;

use crate::{
    core::{config::Config, constants::TICK_COLUMNS},
    render::{
        axis::{push_labels, push_rule},
        binner::BinSet,
        raster::{rasterize, scale_heights},
    },
};

/// Printed in place of the grid when no bin has a count.
pub const NO_COUNTS: &str = "no counts!";

/// Renders [`BinSet`]s with a fixed [`Config`].
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    #[inline]
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Build the complete text frame for `bins`.
    #[must_use]
    pub fn render(&self, bins: &BinSet) -> String {
        let cfg = self.config;
        let mut buf = String::with_capacity(
            cfg.width
                .saturating_add(1)
                .saturating_mul(cfg.height.saturating_add(3)),
        );

        match scale_heights(&bins.counts, cfg.height) {
            Some(scaled) => {
                if cfg.show_total {
                    let _ = writeln!(buf, "N = {}", bins.total());
                }
                rasterize(&mut buf, &scaled, cfg.width, cfg.height);
            }
            None => {
                warn!("every bin is empty");
                buf.push_str(NO_COUNTS);
                buf.push('\n');
            }
        }

        if cfg.show_axis {
            push_rule(&mut buf, &TICK_COLUMNS, cfg.width);
            push_labels(&mut buf, bins.range, &TICK_COLUMNS, cfg.width);
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{bounds::Range, config::BinCount};

    fn bins(counts: Vec<u64>, min: f64, max: f64) -> BinSet {
        BinSet {
            range: Range { min, max },
            counts,
        }
    }

    #[test]
    fn full_frame_layout() {
        let cfg = Config::builder().num_bins(10).build().unwrap();
        let out = Renderer::new(&cfg).render(&bins(vec![1; 10], 1.0, 10.0));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1 + 24 + 2);
        assert_eq!(lines[0], "N = 10");
        assert!(lines[1..25].iter().all(|l| l.len() == 80));
        assert!(lines[25].starts_with("---------+"));
        assert!(lines[26].contains("2.06875"));
    }

    #[test]
    fn annotation_and_axis_are_optional() {
        let cfg = Config::builder()
            .num_bins(10)
            .show_total(false)
            .show_axis(false)
            .build()
            .unwrap();
        let out = Renderer::new(&cfg).render(&bins(vec![2; 10], 0.0, 1.0));
        assert_eq!(out.lines().count(), 24);
        assert!(!out.contains("N ="));
        assert!(!out.contains('+'));
    }

    #[test]
    fn empty_bins_render_the_no_counts_message_only() {
        let cfg = Config::builder().show_axis(false).build().unwrap();
        let out = Renderer::new(&cfg).render(&bins(vec![0; 20], 0.0, 1.0));
        assert_eq!(out, "no counts!\n");
    }

    #[test]
    fn degenerate_range_draws_one_bar_in_bin_zero() {
        let cfg = Config::builder().num_bins(20).build().unwrap();
        let set = BinSet::build(&[5.0; 6], Range { min: 5.0, max: 5.0 }, BinCount::Twenty);
        let out = Renderer::new(&cfg).render(&set);
        let grid: Vec<&str> = out.lines().skip(1).take(24).collect();
        assert_eq!(grid[0].trim(), "");
        for row in &grid[1..] {
            assert_eq!(&row[..4], "####");
            assert_eq!(row[4..].trim(), "");
        }
    }

    #[test]
    fn rendering_is_repeatable() {
        let cfg = Config::default();
        let set = bins((0..20).map(|i| i * i).collect(), -3.0, 3.0);
        let r = Renderer::new(&cfg);
        assert_eq!(r.render(&set), r.render(&set));
    }
}
