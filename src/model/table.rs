//! Fixed-shape table grid.

use crate::error::{ensure_index, Error, IndexKind, Result};
use serde::{Deserialize, Serialize};

/// A rectangular grid of editable text cells.
///
/// Row and column counts are fixed when the table is created; afterwards
/// only cell contents change. Every row always has the same length, and
/// the grid serializes transparently as a list of equal-length lists of
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table of empty cells with the given shape.
    ///
    /// Fails with [`Error::InvalidDimension`] if either count is zero.
    pub fn new(row_count: usize, col_count: usize) -> Result<Self> {
        if row_count == 0 || col_count == 0 {
            return Err(Error::InvalidDimension {
                rows: row_count,
                cols: col_count,
            });
        }
        Ok(Self {
            rows: vec![vec![String::new(); col_count]; row_count],
        })
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        // A table always has at least one row.
        self.rows[0].len()
    }

    /// Get a cell's contents.
    pub fn cell(&self, row: usize, col: usize) -> Result<&str> {
        self.check_position(row, col)?;
        Ok(&self.rows[row][col])
    }

    /// Replace a single cell, leaving every other cell untouched.
    ///
    /// Bounds are checked before anything is written, so a failed call
    /// leaves the table unmodified.
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) -> Result<()> {
        self.check_position(row, col)?;
        self.rows[row][col] = value.into();
        Ok(())
    }

    /// Borrow the underlying rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Check whether every cell is empty.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(|cell| cell.is_empty())
    }

    fn check_position(&self, row: usize, col: usize) -> Result<()> {
        ensure_index(IndexKind::Row, row, self.row_count())?;
        ensure_index(IndexKind::Column, col, self.column_count())
    }
}

impl TryFrom<Vec<Vec<String>>> for Table {
    type Error = Error;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::InvalidDimension { rows: 0, cols: 0 });
        };
        let cols = first.len();
        if cols == 0 {
            return Err(Error::InvalidDimension {
                rows: rows.len(),
                cols: 0,
            });
        }
        if rows.iter().any(|row| row.len() != cols) {
            return Err(Error::Serialize(
                "table rows have unequal lengths".to_string(),
            ));
        }
        Ok(Self { rows })
    }
}

impl From<Table> for Vec<Vec<String>> {
    fn from(table: Table) -> Self {
        table.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new(3, 2).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert!(table.is_blank());
    }

    #[test]
    fn test_table_rejects_zero_dimensions() {
        assert!(matches!(
            Table::new(0, 3),
            Err(Error::InvalidDimension { rows: 0, cols: 3 })
        ));
        assert!(matches!(
            Table::new(3, 0),
            Err(Error::InvalidDimension { rows: 3, cols: 0 })
        ));
    }

    #[test]
    fn test_set_cell_leaves_others_unchanged() {
        let mut table = Table::new(3, 3).unwrap();
        table.set_cell(1, 2, "x").unwrap();

        for row in 0..3 {
            for col in 0..3 {
                let expected = if (row, col) == (1, 2) { "x" } else { "" };
                assert_eq!(table.cell(row, col).unwrap(), expected);
            }
        }
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_set_cell_out_of_range() {
        let mut table = Table::new(3, 3).unwrap();
        let before = table.clone();

        let err = table.set_cell(3, 0, "x").unwrap_err();
        assert!(matches!(
            err,
            Error::IndexOutOfRange {
                kind: IndexKind::Row,
                index: 3,
                len: 3
            }
        ));
        assert_eq!(table, before);

        let err = table.set_cell(0, 9, "x").unwrap_err();
        assert!(matches!(
            err,
            Error::IndexOutOfRange {
                kind: IndexKind::Column,
                ..
            }
        ));
        assert_eq!(table, before);
    }

    #[test]
    fn test_try_from_rejects_ragged_rows() {
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ];
        assert!(Table::try_from(rows).is_err());
    }

    #[test]
    fn test_serializes_as_nested_lists() {
        let mut table = Table::new(2, 2).unwrap();
        table.set_cell(0, 0, "a").unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[["a",""],["",""]]"#);

        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
