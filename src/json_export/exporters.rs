use chrono::Local;
use serde::Serialize;
use std::io::{self, Write};

use crate::json_export::types::{ExtractionDocument, Metadata, PartRecord, SheetSummary};

/// Pretty-print `data` as JSON followed by a newline.
pub fn write_json<T: Serialize, W: Write>(data: &T, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, data)?;
    writeln!(out)
}

impl ExtractionDocument {
    pub fn new(source_file: &str) -> Self {
        Self {
            metadata: Metadata {
                source_file: source_file.to_string(),
                processing_date: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
                sheets_processed: Vec::new(),
            },
            data: Vec::new(),
        }
    }

    /// Append the records found in one sheet. Sheets without records are not
    /// listed in the metadata.
    pub fn add_sheet(&mut self, name: &str, records: Vec<PartRecord>) {
        if records.is_empty() {
            return;
        }

        self.metadata.sheets_processed.push(SheetSummary {
            name: name.to_string(),
            rows_found: records.len(),
        });
        self.data.extend(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn record(expediente: &str, origin: &str) -> PartRecord {
        let mut record = PartRecord::new();
        record.insert("Agente".to_string(), Some("Part.".to_string()));
        record.insert("Expediente".to_string(), Some(expediente.to_string()));
        record.insert("Clase".to_string(), None);
        record.insert("origen".to_string(), Some(origin.to_string()));
        record
    }

    #[test]
    fn document_lists_only_sheets_with_records() {
        let mut doc = ExtractionDocument::new("5877_3_.xls");
        doc.add_sheet("OPOSICIONES", vec![record("1", "OPOSICIONES"), record("2", "OPOSICIONES")]);
        doc.add_sheet("VISTAS", Vec::new());

        let mut out: Vec<u8> = Vec::new();
        write_json(&doc, &mut out).unwrap();
        let json: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["metadata"]["source_file"], "5877_3_.xls");
        assert_eq!(json["metadata"]["sheets_processed"].as_array().unwrap().len(), 1);
        assert_eq!(json["metadata"]["sheets_processed"][0]["rows_found"], 2);
        assert_eq!(json["data"][1]["Expediente"], "2");
        assert!(json["data"][0]["Clase"].is_null());
    }

    #[test]
    fn record_keys_keep_column_order() {
        let mut out: Vec<u8> = Vec::new();
        write_json(&record("9", "VISTAS"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let agente = text.find("\"Agente\"").unwrap();
        let clase = text.find("\"Clase\"").unwrap();
        let origen = text.find("\"origen\"").unwrap();
        assert!(agente < clase && clase < origen);
        assert!(text.ends_with("}\n"));
    }
}
