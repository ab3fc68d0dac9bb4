use std::io::{self, Write};

use crate::config::MAX_CELL_WIDTH;
use crate::excel::{CellType, Sheet};
use crate::utils::{column_label, truncate_chars};

/// Print the dimensions and the first `max_rows` rows of `sheet`.
pub fn write_preview<W: Write>(sheet: &Sheet, max_rows: usize, out: &mut W) -> io::Result<()> {
    let (rows, cols) = sheet.dimensions();

    writeln!(out, "=== {} ===", sheet.name)?;
    writeln!(out, "Dimensions: {} rows x {} columns", rows, cols)?;

    if sheet.is_empty() || cols == 0 {
        writeln!(out, "(sheet is empty)")?;
        return writeln!(out);
    }

    let shown = rows.min(max_rows);
    writeln!(out, "Showing first {} of {} rows:", shown, rows)?;

    let grid: Vec<Vec<(String, CellType)>> = (0..shown)
        .map(|row| {
            sheet
                .row(row)
                .iter()
                .map(|cell| (truncate_chars(&cell.value, MAX_CELL_WIDTH), cell.cell_type))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..cols)
        .map(|col| {
            grid.iter()
                .map(|row| row[col].0.chars().count())
                .chain(std::iter::once(column_label(col).len()))
                .max()
                .unwrap_or(1)
        })
        .collect();

    let number_width = shown.to_string().len();

    let header: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, width)| format!("{:<width$}", column_label(col), width = width))
        .collect();
    writeln!(
        out,
        "{:>nw$} | {}",
        "",
        header.join(" | ").trim_end(),
        nw = number_width
    )?;

    for (row_idx, row) in grid.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|((value, cell_type), width)| match cell_type {
                CellType::Number => format!("{:>width$}", value, width = width),
                _ => format!("{:<width$}", value, width = width),
            })
            .collect();
        writeln!(
            out,
            "{:>nw$} | {}",
            row_idx + 1,
            cells.join(" | ").trim_end(),
            nw = number_width
        )?;
    }

    writeln!(out)
}
