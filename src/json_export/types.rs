use indexmap::IndexMap;
use serde::Serialize;

/// Column header to trimmed cell text; `None` serializes as `null`.
pub type PartRecord = IndexMap<String, Option<String>>;

#[derive(Debug, Clone, Serialize)]
pub struct SheetSummary {
    pub name: String,
    pub rows_found: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub source_file: String,
    pub processing_date: String,
    pub sheets_processed: Vec<SheetSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractionDocument {
    pub metadata: Metadata,
    pub data: Vec<PartRecord>,
}
