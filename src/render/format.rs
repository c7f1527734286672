//! Compact "general" number formatting for axis labels.
//!
//! Same rules as C's `%.Ng` with trailing zeros dropped:
//! round to `sig` significant digits, then print in plain decimal unless the
//! decimal exponent is below -4 or at least the number of digits that would
//! have to be shown, in which case use `d.ddde±XX`.

use std::fmt::Write;

/// Format `v` with at most `sig` significant digits.
///
/// `sig` of 0 is treated as 1. Non-finite values print as `NaN`, `+Inf`, `-Inf`.
#[must_use]
pub fn format_general(v: f64, sig: usize) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.into();
    }
    let sig = sig.max(1);

    let (negative, digits, exp) = decimal_digits(v, sig);
    // `dp` is the position of the decimal point relative to the digit string.
    let nd = digits.len();
    let dp = if digits.is_empty() { 0 } else { exp + 1 };

    let mut eprec = sig;
    if eprec > nd && nd as isize >= dp {
        eprec = nd;
    }

    let mut out = String::with_capacity(sig + 8);
    if negative {
        out.push('-');
    }

    let x = dp - 1;
    if x < -4 || x >= eprec as isize {
        push_exponent(&mut out, &digits, x, sig.min(nd));
    } else {
        let prec = if sig as isize > dp { nd } else { sig };
        let decimals = usize::try_from(prec as isize - dp).unwrap_or(0);
        push_fixed(&mut out, &digits, dp, decimals);
    }
    out
}

/// Rounded significant digits with trailing zeros removed, and the decimal
/// exponent of the first digit. Zero yields an empty digit string.
fn decimal_digits(v: f64, sig: usize) -> (bool, Vec<u8>, isize) {
    let negative = v.is_sign_negative();
    if v == 0.0 {
        return (negative, Vec::new(), 0);
    }

    // `{:.Ne}` does the correctly-rounded work: "d.ddddde<exp>"
    let s = format!("{:.*e}", sig - 1, v.abs());
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let exp: isize = exp.parse().unwrap_or(0);

    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }
    (negative, digits, exp)
}

fn push_exponent(out: &mut String, digits: &[u8], exp: isize, prec: usize) {
    out.push(char::from(digits.first().copied().unwrap_or(b'0')));
    if prec > 1 {
        out.push('.');
        for i in 1..prec {
            out.push(char::from(digits.get(i).copied().unwrap_or(b'0')));
        }
    }
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    let _ = write!(out, "{:02}", exp.unsigned_abs());
}

fn push_fixed(out: &mut String, digits: &[u8], dp: isize, decimals: usize) {
    let digit_at = |i: isize| -> char {
        usize::try_from(i)
            .ok()
            .and_then(|i| digits.get(i).copied())
            .map_or('0', char::from)
    };

    if dp > 0 {
        for i in 0..dp {
            out.push(digit_at(i));
        }
    } else {
        out.push('0');
    }

    if decimals > 0 {
        out.push('.');
        for i in 0..decimals as isize {
            out.push(digit_at(dp + i));
        }
    }
}
