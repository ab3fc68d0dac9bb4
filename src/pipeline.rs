use std::io::Write;
use tracing::info;

use crate::config::{OutputMode, RunOptions};
use crate::download::{Fetcher, file_name, parse_url};
use crate::error::Result;
use crate::excel::{SheetSource, Workbook};
use crate::report::{RunSummary, extract_targets, preview_targets};

/// Download the workbook at `raw_url` and report on its target sheets.
///
/// The URL is validated before anything is fetched. Invalid URLs, failed
/// downloads and unreadable workbooks end the run; missing sheets do not.
pub fn run<F: Fetcher, W: Write, N: Write>(
    raw_url: &str,
    fetcher: &F,
    options: &RunOptions,
    out: &mut W,
    notices: &mut N,
) -> Result<RunSummary> {
    let url = parse_url(raw_url)?;
    let bytes = fetcher.fetch(&url)?;
    let mut workbook = Workbook::from_bytes(bytes)?;

    report(&mut workbook, &file_name(&url), options, out, notices)
}

/// Report on the target sheets of an already parsed workbook.
pub fn report<S: SheetSource, W: Write, N: Write>(
    source: &mut S,
    source_file: &str,
    options: &RunOptions,
    out: &mut W,
    notices: &mut N,
) -> Result<RunSummary> {
    let summary = match options.mode {
        OutputMode::Preview => preview_targets(source, options.preview_rows, out)?,
        OutputMode::Extract => extract_targets(source, source_file, out, notices)?,
    };

    info!(
        found = summary.found.len(),
        missing = summary.missing.len(),
        "report complete"
    );

    Ok(summary)
}
