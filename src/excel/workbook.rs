use calamine::{Reader, Xls};
use std::io::Cursor;
use tracing::debug;

use crate::error::Result;
use crate::excel::Sheet;

/// Anything the report can pull named sheets from.
pub trait SheetSource {
    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Load the sheet called `name`, which must be one of [`Self::sheet_names`].
    fn load_sheet(&mut self, name: &str) -> Result<Sheet>;
}

/// A legacy (.xls) workbook held entirely in memory.
pub struct Workbook {
    inner: Xls<Cursor<Vec<u8>>>,
    sheet_names: Vec<String>,
}

impl Workbook {
    /// Parse downloaded bytes as a BIFF workbook.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let size = bytes.len();
        let inner = Xls::new(Cursor::new(bytes))?;
        let sheet_names = inner.sheet_names();

        debug!(bytes = size, sheets = sheet_names.len(), "parsed workbook");

        Ok(Workbook { inner, sheet_names })
    }
}

impl SheetSource for Workbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheet_names.clone()
    }

    fn load_sheet(&mut self, name: &str) -> Result<Sheet> {
        let range = self.inner.worksheet_range(name)?;
        Ok(Sheet::from_range(name, range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn plain_text_is_not_a_workbook() {
        let result = Workbook::from_bytes(b"<html><body>Not found</body></html>".to_vec());
        assert!(matches!(result, Err(AppError::InvalidFormat(_))));
    }

    #[test]
    fn empty_body_is_not_a_workbook() {
        let result = Workbook::from_bytes(Vec::new());
        assert!(matches!(result, Err(AppError::InvalidFormat(_))));
    }
}
