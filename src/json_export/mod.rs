mod exporters;
mod extractors;
mod types;

pub use exporters::write_json;
pub use extractors::{extract_headers, extract_part_rows, find_header_row};
pub use types::{ExtractionDocument, Metadata, PartRecord, SheetSummary};
