//! Line-oriented sample loader with zero-allocation float parsing.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use tracing::debug;

use crate::core::config::{Config, ErrorPolicy, NanPolicy};

// --- Public Result Struct ---

/// Everything that survived the skip policies, plus what was dropped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReadSummary {
    pub values: Vec<f64>,
    pub skipped_errors: usize,
    pub skipped_nan: usize,
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ReadError {
    pub line: usize,
    pub kind: ReadErrorKind,
}

#[derive(Debug)]
pub enum ReadErrorKind {
    Io(std::io::Error),
    BadFloat { text: String, cause: String },
    NotANumber { text: String },
    Infinite { text: String },
}

impl Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ReadErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ReadErrorKind::BadFloat { text, cause } => {
                write!(f, "Error parsing line {} '{}': {}", self.line, text, cause)
            }
            ReadErrorKind::NotANumber { text } => {
                write!(f, "Found NaN parsing line {} '{}'", self.line, text)
            }
            ReadErrorKind::Infinite { text } => {
                write!(f, "Found infinite value parsing line {} '{}'", self.line, text)
            }
        }
    }
}
impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ReadErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Rewrite U+2212 MINUS SIGN to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// Outcome of looking at one line.
enum Line {
    Value(f64),
    Unparsable,
    NonFinite,
}

fn classify(bytes: &[u8], line: usize, config: &Config) -> Result<Line, ReadError> {
    let text = || String::from_utf8_lossy(bytes).into_owned();

    let val = match lexical_core::parse::<f64>(bytes) {
        Ok(v) => v,
        Err(e) => {
            return match config.on_error {
                ErrorPolicy::Skip => {
                    debug!(line, text = %text(), "skipping unparsable line");
                    Ok(Line::Unparsable)
                }
                ErrorPolicy::Abort => Err(ReadError {
                    line,
                    kind: ReadErrorKind::BadFloat {
                        text: text(),
                        cause: e.to_string(),
                    },
                }),
            };
        }
    };

    if val.is_finite() {
        return Ok(Line::Value(val));
    }

    match config.on_nan {
        NanPolicy::Skip => {
            debug!(line, text = %text(), "skipping non-finite value");
            Ok(Line::NonFinite)
        }
        NanPolicy::Abort if val.is_nan() => Err(ReadError {
            line,
            kind: ReadErrorKind::NotANumber { text: text() },
        }),
        NanPolicy::Abort => Err(ReadError {
            line,
            kind: ReadErrorKind::Infinite { text: text() },
        }),
    }
}

// --- Fast line ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read one number per line until end of input.
///
/// The returned values are always finite: NaN and infinities are either
/// skipped or turned into an error according to `config.on_nan`.
pub fn read_values<R: Read>(src: R, config: &Config) -> Result<ReadSummary, ReadError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(64);
    let mut out = ReadSummary::default();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ReadError {
            line: line_no,
            kind: ReadErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        match classify(trim(&buf), line_no, config)? {
            Line::Value(v) => out.values.push(v),
            Line::Unparsable => out.skipped_errors += 1,
            Line::NonFinite => out.skipped_nan += 1,
        }
    }
    Ok(out)
}

/// `-` reads stdin, anything else is opened as a file.
pub fn read_values_from_path(path: &str, config: &Config) -> Result<ReadSummary, ReadError> {
    if path == "-" {
        read_values(std::io::stdin().lock(), config)
    } else {
        use std::fs::File;
        read_values(
            File::open(path).map_err(|e| ReadError {
                line: 0,
                kind: ReadErrorKind::Io(e),
            })?,
            config,
        )
    }
}
