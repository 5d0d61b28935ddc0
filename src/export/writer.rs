use std::io::Write;

use super::Table;
use crate::constants::CSV_DELIMITER;
use crate::error::{ExportError, ExportResult};

/// Write `table` as `;`-separated CSV: the header line, then one line per
/// row. Empty cells become empty fields. A table without columns writes
/// nothing.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> ExportResult<()> {
    if table.header().is_empty() {
        return Ok(());
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .from_writer(writer);

    csv_writer.write_record(table.header())?;
    for cells in table.rows() {
        csv_writer.write_record(cells.iter().map(|cell| cell.as_deref().unwrap_or_default()))?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv(table: &Table) -> ExportResult<String> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ExportError::Unknown(format!("CSV output is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Row;

    fn table(rows: Vec<Vec<(&str, Option<&str>)>>) -> Table {
        let rows: Vec<Row> = rows
            .into_iter()
            .map(|cells| cells.into_iter().map(|(c, v)| (c, v.map(str::to_string))).collect())
            .collect();
        Table::from_rows(&rows)
    }

    #[test]
    fn test_semicolon_separated_with_empty_cells() {
        let csv = to_csv(&table(vec![
            vec![("id", Some("1")), ("number", Some("#42")), ("title", Some("#42 Fix bug"))],
            vec![("id", Some("2")), ("number", None), ("title", Some(" Plan launch"))],
        ]))
        .unwrap();

        assert_eq!(csv, "id;number;title\n1;#42;#42 Fix bug\n2;; Plan launch\n");
    }

    #[test]
    fn test_quotes_values_containing_separator() {
        let csv = to_csv(&table(vec![vec![
            ("id", Some("1")),
            ("Notes", Some("a;b")),
            ("Quote", Some("say \"hi\"")),
        ]]))
        .unwrap();

        assert_eq!(csv, "id;Notes;Quote\n1;\"a;b\";\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        assert_eq!(to_csv(&Table::default()).unwrap(), "");
    }

    #[test]
    fn test_round_trip() {
        let original = table(vec![
            vec![("id", Some("1")), ("labels", Some("bug, urgent")), ("Body", Some("line one\nline two"))],
            vec![("id", Some("2")), ("Status", Some("In; Progress"))],
        ]);
        let csv = to_csv(&original).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(CSV_DELIMITER)
            .from_reader(csv.as_bytes());
        let header: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|record| record.unwrap().iter().map(str::to_string).collect())
            .collect();

        assert_eq!(header, original.header());
        let expected: Vec<Vec<String>> = original
            .rows()
            .iter()
            .map(|cells| cells.iter().map(|cell| cell.clone().unwrap_or_default()).collect())
            .collect();
        assert_eq!(rows, expected);
    }
}
