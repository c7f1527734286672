//! Two-line x axis: a `-` rule with `+` ticks, then the value under each tick.
//!
//! Tick values live in screen-column space: column `c` shows the value at
//! its center, `min + (c + 0.5) * (max - min) / width`, regardless of the
//! bin count.

use crate::{
    core::{
        bounds::Range,
        constants::{LABEL_PRECISION, RULE_CHAR, TICK_CHAR},
    },
    render::format::format_general,
};

/// Data value at the center of screen column `col`.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn column_value(range: Range, width: usize, col: usize) -> f64 {
    range.point(range.step(width), col as f64 + 0.5)
}

/// Append the rule line: `-` everywhere, `+` on each tick, padded to `width`.
pub fn push_rule(buf: &mut String, ticks: &[usize], width: usize) {
    let mut column = 0usize;
    for &tick in ticks {
        while column < tick {
            buf.push(RULE_CHAR);
            column += 1;
        }
        buf.push(TICK_CHAR);
        column += 1;
    }
    while column < width {
        buf.push(RULE_CHAR);
        column += 1;
    }
    buf.push('\n');
}

/// Append the label line.
///
/// Each label starts at `tick - len/2`. After a label the cursor advances by
/// `len - 1`, one column short of the text actually written; the following
/// label's padding is computed from that cursor.
#[allow(clippy::cast_possible_wrap)]
pub fn push_labels(buf: &mut String, range: Range, ticks: &[usize], width: usize) {
    let mut column: isize = 0;
    for &tick in ticks {
        let label = format_general(column_value(range, width, tick), LABEL_PRECISION);
        let start = tick as isize - (label.len() / 2) as isize;
        while column < start {
            buf.push(' ');
            column += 1;
        }
        buf.push_str(&label);
        column += label.len() as isize - 1;
    }
    buf.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{CHART_WIDTH, TICK_COLUMNS};

    #[test]
    fn rule_marks_every_tick() {
        let mut s = String::new();
        push_rule(&mut s, &TICK_COLUMNS, CHART_WIDTH);
        let line = s.strip_suffix('\n').unwrap();
        assert_eq!(line.len(), 80);
        let pluses: Vec<usize> = line.match_indices('+').map(|(i, _)| i).collect();
        assert_eq!(pluses, vec![9, 29, 49, 69]);
        assert!(line.chars().all(|c| c == '-' || c == '+'));
    }

    #[test]
    fn column_values_are_column_centers() {
        let r = Range { min: 0.0, max: 80.0 };
        assert!((column_value(r, 80, 9) - 9.5).abs() < 1e-12);
        assert!((column_value(r, 80, 69) - 69.5).abs() < 1e-12);
    }

    #[test]
    fn labels_center_under_ticks_with_one_column_overlap() {
        let r = Range { min: 0.0, max: 80.0 };
        let mut s = String::new();
        push_labels(&mut s, r, &TICK_COLUMNS, CHART_WIDTH);

        // "9.5" starts at 9 - 1 = 8; cursor ends at 8 + 3 - 1 = 10
        // "29.5" starts at 29 - 2 = 27, so 17 pad spaces follow
        let mut want = String::new();
        want.push_str(&" ".repeat(8));
        want.push_str("9.5");
        want.push_str(&" ".repeat(17));
        want.push_str("29.5");
        // cursor 27 + 3 = 30; "49.5" starts at 47
        want.push_str(&" ".repeat(17));
        want.push_str("49.5");
        want.push_str(&" ".repeat(17));
        want.push_str("69.5");
        want.push('\n');
        assert_eq!(s, want);
    }

    #[test]
    fn degenerate_range_labels_every_tick_with_the_same_value() {
        let r = Range { min: 5.0, max: 5.0 };
        let mut s = String::new();
        push_labels(&mut s, r, &TICK_COLUMNS, CHART_WIDTH);
        assert_eq!(s.matches('5').count(), 4);
        assert_eq!(s.split_whitespace().collect::<Vec<_>>(), vec!["5"; 4]);
    }

    #[test]
    fn extreme_ranges_label_finite_values() {
        let r = Range {
            min: -1e308,
            max: 1e308,
        };
        let mut s = String::new();
        push_labels(&mut s, r, &TICK_COLUMNS, CHART_WIDTH);
        assert!(!s.contains("Inf"));
        let vals: Vec<f64> = s
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(vals.len(), 4);
        assert!(vals.iter().all(|v| v.is_finite()));
        assert!(vals.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn wide_labels_never_reorder() {
        let r = Range {
            min: -123_456.789,
            max: 987_654.321,
        };
        let mut s = String::new();
        push_labels(&mut s, r, &TICK_COLUMNS, CHART_WIDTH);
        let vals: Vec<f64> = s
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(vals.len(), 4);
        assert!(vals.windows(2).all(|w| w[0] < w[1]));
    }
}
