use std::{
    io::{Write, stdout},
    time::Instant,
};

use tracing::debug;

use crate::core::{config::Config, data::read_values_from_path, error::HistError};

use super::parse::Cli;

/// Validate flags, read every value, then bin and draw.
pub fn histogram(a: &Cli) -> Result<(), HistError> {
    // config first: an illegal bin count fails before any input is touched
    let cfg = Config::builder()
        .num_bins(a.num_bins)
        .min_val_opt(a.min_val)
        .max_val_opt(a.max_val)
        .skip_errors(a.skip_errors)
        .skip_nan(a.skip_nan)
        .show_total(!a.no_total)
        .show_axis(!a.no_axis)
        .empty_is_error(!a.allow_empty)
        .height(a.height)
        .build()?;

    let t_ingest = Instant::now();
    let summary = read_values_from_path(&a.file, &cfg)?;
    debug!(
        micros = t_ingest.elapsed().as_micros(),
        values = summary.values.len(),
        skipped_errors = summary.skipped_errors,
        skipped_nan = summary.skipped_nan,
        "ingest complete"
    );

    let Some(frame) = crate::histogram(&summary.values, &cfg)? else {
        eprintln!("{}", HistError::EmptyData);
        return Ok(());
    };

    let mut out = stdout().lock();
    out.write_all(frame.as_bytes())?;
    out.flush()?;
    Ok(())
}
