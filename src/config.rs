use std::str::FromStr;
use std::time::Duration;

/// Sheets the report looks for, in reporting order.
pub const TARGET_SHEETS: [&str; 2] = ["OPOSICIONES", "VISTAS"];

pub const DEFAULT_PREVIEW_ROWS: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Widest a single preview cell is allowed to print.
pub const MAX_CELL_WIDTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    /// Human-readable preview of each target sheet.
    Preview,
    /// JSON document of the "Part." rows of each target sheet.
    Extract,
}

impl FromStr for OutputMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preview" => Ok(OutputMode::Preview),
            "extract" | "json" => Ok(OutputMode::Extract),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub preview_rows: usize,
    pub mode: OutputMode,
    pub timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
            mode: OutputMode::Preview,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
