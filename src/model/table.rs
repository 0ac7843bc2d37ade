//! Table types.

use serde::{Deserialize, Serialize};

/// A table as laid out on its grid.
///
/// Each row holds one cell text per grid position it covers, so a cell
/// merged across columns (or down from the row above) shows up as
/// repeated text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Declared column count
    pub columns: usize,
}

impl Table {
    /// Create a new empty table with the declared column count.
    pub fn new(columns: usize) -> Self {
        Self {
            rows: Vec::new(),
            columns,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the declared number of columns.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell texts, one per grid position
    pub cells: Vec<String>,
}

impl TableRow {
    /// Create a row from cell texts.
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of grid positions in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_counts() {
        let mut table = Table::new(3);
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 3);

        table.add_row(TableRow::new(["A", "B", "C"]));
        table.add_row(TableRow::new(["D", "D", "E"]));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_empty_row() {
        let row = TableRow::new(Vec::<String>::new());
        assert!(row.is_empty());
    }
}
