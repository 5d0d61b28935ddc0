use std::collections::HashSet;

use super::Row;

/// Rectangular view over normalized rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// The header is every column of every row, in the order columns are
    /// first met scanning the rows front to back. Rows lacking a column get
    /// an empty cell.
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut seen = HashSet::new();
        let mut header = Vec::new();

        for column in rows.iter().flat_map(Row::columns) {
            if seen.insert(column) {
                header.push(column.to_string());
            }
        }

        let rows = rows
            .iter()
            .map(|row| {
                header
                    .iter()
                    .map(|column| row.get(column).map(str::to_string))
                    .collect()
            })
            .collect();

        Self { header, rows }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}
