use std::io::{self, Write};

/// Spaces between aligned table columns.
pub const TABLE_PADDING: usize = 3;

/// Separator used by delimited output.
pub const DELIMITER: char = ';';

/// A column that knows its own header text
pub trait TableColumn {
    fn header(&self) -> &'static str;
}

/// Trait for types that can provide column values
pub trait GetColumnValue {
    type Column: TableColumn;

    fn get_column_value(&self, column: &Self::Column) -> String;
}

/// Output format configuration
#[derive(Clone, Debug, Default)]
pub struct OutputFormat {
    pub delimited: bool,
}

/// Build table data (header row first) from records and columns
pub fn build_table_data<T>(records: &[T], columns: &[T::Column]) -> Vec<Vec<String>>
where
    T: GetColumnValue,
{
    let header = columns.iter().map(|col| col.header().to_string()).collect();

    std::iter::once(header)
        .chain(records.iter().map(|record| {
            columns
                .iter()
                .map(|col| record.get_column_value(col))
                .collect()
        }))
        .collect()
}

impl OutputFormat {
    pub fn new(delimited: bool) -> Self {
        Self { delimited }
    }

    /// Write records as a header line plus one line per record
    pub fn write_records<W, T>(&self, out: &mut W, records: &[T], columns: &[T::Column]) -> io::Result<()>
    where
        W: Write,
        T: GetColumnValue,
    {
        let data = build_table_data(records, columns);
        if self.delimited {
            write_delimited(out, &data)
        } else {
            write_formatted_table(out, &data)
        }
    }
}

/// Header cells are written bare, every data cell is double-quoted. Embedded
/// quotes and delimiters are not escaped.
fn write_delimited<W: Write>(out: &mut W, data: &[Vec<String>]) -> io::Result<()> {
    let separator = DELIMITER.to_string();

    for (i, row) in data.iter().enumerate() {
        let line = if i == 0 {
            row.join(&separator)
        } else {
            row.iter()
                .map(|cell| format!("\"{cell}\""))
                .collect::<Vec<_>>()
                .join(&separator)
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Column-aligned output like `column -t`
fn write_formatted_table<W: Write>(out: &mut W, data: &[Vec<String>]) -> io::Result<()> {
    if data.is_empty() {
        return Ok(());
    }

    // Calculate column widths
    let num_cols = data.iter().map(Vec::len).max().unwrap_or(0);
    let mut col_widths = vec![0; num_cols];

    for row in data {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.chars().count());
        }
    }

    for row in data {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i == row.len() - 1 {
                // Last column - no padding needed
                line.push_str(cell);
            } else {
                let width = col_widths[i] + TABLE_PADDING;
                line.push_str(&format!("{cell:<width$}"));
            }
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}
