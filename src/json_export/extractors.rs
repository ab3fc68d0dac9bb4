use std::collections::HashSet;

use crate::excel::Sheet;
use crate::json_export::types::PartRecord;
use crate::utils::column_label;

pub const HEADER_MARKER: &str = "Agente";
pub const PART_MARKER: &str = "Part.";
pub const ORIGIN_FIELD: &str = "origen";

fn first_column(sheet: &Sheet, row: usize) -> String {
    sheet
        .cell(row, 0)
        .map(|c| c.value.trim().to_string())
        .unwrap_or_default()
}

/// Index of the first row whose first column reads "Agente".
pub fn find_header_row(sheet: &Sheet) -> Option<usize> {
    (0..sheet.max_rows).find(|&row| first_column(sheet, row) == HEADER_MARKER)
}

/// Column names taken from the header row.
///
/// A blank first column is called "Agente"; other blanks and repeated names
/// fall back to the column letter so every key in a record is unique.
pub fn extract_headers(sheet: &Sheet, header_row: usize) -> Vec<String> {
    let mut seen = HashSet::new();

    (0..sheet.max_cols)
        .map(|col| {
            let raw = sheet
                .cell(header_row, col)
                .map(|c| c.value.trim().to_string())
                .unwrap_or_default();

            let name = if !raw.is_empty() {
                raw
            } else if col == 0 {
                HEADER_MARKER.to_string()
            } else {
                column_label(col)
            };

            if seen.insert(name.clone()) {
                name
            } else {
                let fallback = format!("{} ({})", name, column_label(col));
                seen.insert(fallback.clone());
                fallback
            }
        })
        .collect()
}

/// Rows below the header whose first column reads "Part.", tagged with the
/// sheet they came from. `None` when the sheet has no header row.
pub fn extract_part_rows(sheet: &Sheet) -> Option<Vec<PartRecord>> {
    let header_row = find_header_row(sheet)?;
    let headers = extract_headers(sheet, header_row);

    let records = ((header_row + 1)..sheet.max_rows)
        .filter(|&row| first_column(sheet, row) == PART_MARKER)
        .map(|row| {
            let mut record = PartRecord::with_capacity(headers.len() + 1);

            for (col, header) in headers.iter().enumerate() {
                let value = sheet
                    .cell(row, col)
                    .filter(|c| !c.is_empty())
                    .map(|c| c.value.trim().to_string());
                record.insert(header.clone(), value);
            }

            record.insert(ORIGIN_FIELD.to_string(), Some(sheet.name.clone()));
            record
        })
        .collect();

    Some(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Range};

    fn sheet_from(name: &str, rows: &[&[&str]]) -> Sheet {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (rows.len() as u32 - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    range.set_value((r as u32, c as u32), Data::String(value.to_string()));
                }
            }
        }
        Sheet::from_range(name, range)
    }

    #[test]
    fn only_part_rows_below_header_are_kept() {
        let sheet = sheet_from(
            "OPOSICIONES",
            &[
                &["Boletín 5877", "", ""],
                &["Part.", "antes del encabezado", ""],
                &["Agente", " Expediente ", "Titular"],
                &["Part.", "123456", " ACME S.A. "],
                &["Ag.", "654321", "Otro"],
                &[" Part. ", "777", ""],
            ],
        );

        let records = extract_part_rows(&sheet).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Expediente"].as_deref(), Some("123456"));
        assert_eq!(records[0]["Titular"].as_deref(), Some("ACME S.A."));
        assert_eq!(records[0][ORIGIN_FIELD].as_deref(), Some("OPOSICIONES"));
        assert_eq!(records[1]["Titular"], None);

        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["Agente", "Expediente", "Titular", "origen"]);
    }

    #[test]
    fn blank_and_repeated_headers_get_unique_names() {
        let sheet = sheet_from("VISTAS", &[&["Agente", "", "Nombre", "Nombre"]]);
        assert_eq!(
            extract_headers(&sheet, 0),
            ["Agente", "B", "Nombre", "Nombre (D)"]
        );
    }

    #[test]
    fn sheet_without_header_yields_none() {
        let sheet = sheet_from("VISTAS", &[&["Part.", "1"], &["Part.", "2"]]);
        assert!(extract_part_rows(&sheet).is_none());
    }
}
