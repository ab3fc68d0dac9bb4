use calamine::{Data, Range};

use crate::excel::Cell;

/// A named sheet, addressed from A1.
///
/// Cells are converted on access, so only the rows a preview or extraction
/// actually reads are ever turned into [`Cell`]s.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub name: String,
    range: Range<Data>,
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Sheet {
    /// Wrap a calamine range.
    ///
    /// calamine trims leading blank rows and columns off a range; dimensions
    /// count from A1 so they and the column letters match what Excel shows.
    pub fn from_range(name: &str, range: Range<Data>) -> Self {
        let (max_rows, max_cols) = match range.end() {
            Some((row, col)) => (row as usize + 1, col as usize + 1),
            None => (0, 0),
        };

        Sheet {
            name: name.to_string(),
            range,
            max_rows,
            max_cols,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.max_rows, self.max_cols)
    }

    pub fn is_empty(&self) -> bool {
        self.max_rows == 0
    }

    /// Cell at zero-based `row`/`col`; `None` outside the sheet.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.max_rows || col >= self.max_cols {
            return None;
        }

        let cell = self
            .range
            .get_value((row as u32, col as u32))
            .map(Cell::from_data)
            .unwrap_or_else(Cell::empty);
        Some(cell)
    }

    /// All cells of one row, padded to the sheet width.
    pub fn row(&self, row: usize) -> Vec<Cell> {
        (0..self.max_cols)
            .filter_map(|col| self.cell(row, col))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_ranges_keep_absolute_positions() {
        let mut range = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("Agente".to_string()));
        range.set_value((3, 2), Data::Float(7.0));

        let sheet = Sheet::from_range("VISTAS", range);

        assert_eq!(sheet.dimensions(), (4, 3));
        assert_eq!(sheet.cell(2, 1).map(|c| c.value), Some("Agente".to_string()));
        assert_eq!(sheet.cell(3, 2).map(|c| c.value), Some("7".to_string()));
        assert!(sheet.cell(0, 0).is_some_and(|c| c.is_empty()));
        assert_eq!(sheet.cell(4, 0), None);
        assert_eq!(sheet.row(3).len(), 3);
    }

    #[test]
    fn far_away_cell_does_not_expand_rows_until_read() {
        let mut range = Range::new((65_535, 255), (65_535, 255));
        range.set_value((65_535, 255), Data::String("fin".to_string()));

        let sheet = Sheet::from_range("OPOSICIONES", range);

        assert_eq!(sheet.dimensions(), (65_536, 256));
        assert!(sheet.row(0).iter().all(Cell::is_empty));
        assert_eq!(sheet.cell(65_535, 255).map(|c| c.value), Some("fin".to_string()));
    }

    #[test]
    fn empty_range_is_zero_by_zero() {
        let sheet = Sheet::from_range("OPOSICIONES", Range::<Data>::empty());
        assert_eq!(sheet.dimensions(), (0, 0));
        assert!(sheet.is_empty());
        assert!(sheet.row(0).is_empty());
    }
}
