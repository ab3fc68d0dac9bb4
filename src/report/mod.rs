mod preview;
mod search;

pub use preview::write_preview;
pub use search::resolve_sheet_name;

use std::io::Write;
use tracing::{debug, info, warn};

use crate::config::TARGET_SHEETS;
use crate::error::{AppError, Result};
use crate::excel::{Sheet, SheetSource};
use crate::json_export::{ExtractionDocument, extract_part_rows, write_json};

/// What a run found for the target sheets.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    /// Sheet names as spelled in the workbook, in target order.
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub extracted_rows: usize,
}

fn load_target<S: SheetSource>(source: &mut S, names: &[String], target: &str) -> Result<Sheet> {
    match resolve_sheet_name(names, target) {
        Some(name) => {
            info!(target_sheet = target, sheet = name, "loading sheet");
            source.load_sheet(name)
        }
        None => Err(AppError::SheetNotFound(target.to_string())),
    }
}

// Logged at debug only: the notice is already written to `out`.
fn note_missing<W: Write>(
    err: &AppError,
    target: &str,
    summary: &mut RunSummary,
    out: &mut W,
) -> Result<()> {
    debug!(target_sheet = target, "{}", err);
    writeln!(out, "Warning: {}", err)?;
    writeln!(out)?;
    summary.missing.push(target.to_string());
    Ok(())
}

/// Print a preview of each target sheet, or a notice for each missing one.
pub fn preview_targets<S: SheetSource, W: Write>(
    source: &mut S,
    max_rows: usize,
    out: &mut W,
) -> Result<RunSummary> {
    let names = source.sheet_names();
    info!(sheets = ?names, "workbook sheets");

    let mut summary = RunSummary::default();

    for target in TARGET_SHEETS {
        match load_target(source, &names, target) {
            Ok(sheet) => {
                write_preview(&sheet, max_rows, out)?;
                summary.found.push(sheet.name);
            }
            Err(err) if !err.is_fatal() => note_missing(&err, target, &mut summary, out)?,
            Err(err) => return Err(err),
        }
    }

    Ok(summary)
}

/// Write the "Part." rows of every target sheet as one JSON document to `out`.
/// Missing-sheet notices go to `notices` so `out` stays valid JSON.
pub fn extract_targets<S: SheetSource, W: Write, N: Write>(
    source: &mut S,
    source_file: &str,
    out: &mut W,
    notices: &mut N,
) -> Result<RunSummary> {
    let names = source.sheet_names();
    let mut summary = RunSummary::default();
    let mut document = ExtractionDocument::new(source_file);

    for target in TARGET_SHEETS {
        match load_target(source, &names, target) {
            Ok(sheet) => {
                match extract_part_rows(&sheet) {
                    Some(records) => {
                        info!(sheet = %sheet.name, rows = records.len(), "extracted Part. rows");
                        summary.extracted_rows += records.len();
                        document.add_sheet(&sheet.name, records);
                    }
                    None => warn!(sheet = %sheet.name, "no 'Agente' header row, skipping"),
                }
                summary.found.push(sheet.name);
            }
            Err(err) if !err.is_fatal() => note_missing(&err, target, &mut summary, notices)?,
            Err(err) => return Err(err),
        }
    }

    write_json(&document, out)?;
    Ok(summary)
}
