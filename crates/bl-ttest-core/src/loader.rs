//! Tabular input parsing
//!
//! - CSV via the csv crate (header row required)
//! - Office Open XML workbooks via calamine (first sheet)
//!
//! Parsing is pure: the loader consumes a byte buffer and never touches the
//! filesystem itself.

use std::io::Cursor;

use calamine::{Reader, Xlsx};

use crate::types::Sample;
use crate::{TtestError, TtestResult};

/// Supported upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Xlsx,
}

impl InputFormat {
    /// Detect the format from a file name or path, case-insensitively
    pub fn from_path(path: &str) -> TtestResult<Self> {
        let ext = path
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "xlsx" => Ok(InputFormat::Xlsx),
            _ => Err(TtestError::UnsupportedFormat(path.to_string())),
        }
    }
}

/// Rectangular table with ordered, named columns
///
/// Cells are kept as raw text so the preview shows exactly what was
/// uploaded; numeric extraction happens per selected column.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Column names in original order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// First `n` data rows, for the on-screen preview
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    fn column_index(&self, name: &str) -> TtestResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TtestError::ColumnSelection(format!("column '{name}' not found")))
    }

    /// Raw cells of one column with non-numeric entries as None
    ///
    /// This is the exact content the "raw data" export sheet reproduces:
    /// original order, blanks where the source had no usable number.
    pub fn column_cells(&self, name: &str) -> TtestResult<Vec<Option<f64>>> {
        let idx = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| parse_numeric(&row[idx]))
            .collect())
    }

    /// One column as a cleaned numeric sample (missing values dropped)
    ///
    /// A column that holds no numeric data at all is a selection error; a
    /// mixed column silently drops its non-numeric cells along with the
    /// missing ones.
    pub fn numeric_column(&self, name: &str) -> TtestResult<Sample> {
        let cells = self.column_cells(name)?;
        let values: Vec<f64> = cells.into_iter().flatten().collect();
        if values.is_empty() && self.n_rows() > 0 {
            return Err(TtestError::ColumnSelection(format!(
                "column '{name}' contains no numeric data"
            )));
        }
        Ok(Sample::new(name, values))
    }
}

fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parse an uploaded byte buffer into a table
pub fn load_table(bytes: &[u8], format: InputFormat) -> TtestResult<Table> {
    let table = match format {
        InputFormat::Csv => load_csv(bytes)?,
        InputFormat::Xlsx => load_xlsx(bytes)?,
    };
    if table.headers.is_empty() {
        return Err(TtestError::Parse("input file has no columns".into()));
    }
    Ok(table)
}

fn load_csv(bytes: &[u8]) -> TtestResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| TtestError::Parse(e.to_string()))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TtestError::Parse(e.to_string()))?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(Table { headers, rows })
}

fn load_xlsx(bytes: &[u8]) -> TtestResult<Table> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| TtestError::Parse(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TtestError::Parse("workbook has no sheets".into()))?
        .map_err(|e| TtestError::Parse(e.to_string()))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = rows_iter
        .next()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();
    let rows: Vec<Vec<String>> = rows_iter
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();

    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "old_bl,new_bl\n10,15\n12,16\n11,14\n,17\n13,abc\n";

    #[test]
    fn test_format_detection() {
        assert_eq!(InputFormat::from_path("data.csv").unwrap(), InputFormat::Csv);
        assert_eq!(
            InputFormat::from_path("DATA.XLSX").unwrap(),
            InputFormat::Xlsx
        );
        assert!(matches!(
            InputFormat::from_path("notes.txt").unwrap_err(),
            TtestError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_csv_headers_and_rows() {
        let table = load_table(CSV.as_bytes(), InputFormat::Csv).unwrap();
        assert_eq!(table.headers(), ["old_bl", "new_bl"]);
        assert_eq!(table.n_rows(), 5);
        assert_eq!(table.preview(2).len(), 2);
        assert_eq!(table.preview(2)[0], vec!["10", "15"]);
    }

    #[test]
    fn test_numeric_column_drops_missing() {
        let table = load_table(CSV.as_bytes(), InputFormat::Csv).unwrap();
        let s1 = table.numeric_column("old_bl").unwrap();
        let s2 = table.numeric_column("new_bl").unwrap();
        assert_eq!(s1.values(), [10.0, 12.0, 11.0, 13.0]);
        assert_eq!(s2.values(), [15.0, 16.0, 14.0, 17.0]);
    }

    #[test]
    fn test_column_cells_preserve_order_and_gaps() {
        let table = load_table(CSV.as_bytes(), InputFormat::Csv).unwrap();
        let cells = table.column_cells("old_bl").unwrap();
        assert_eq!(
            cells,
            [Some(10.0), Some(12.0), Some(11.0), None, Some(13.0)]
        );
    }

    #[test]
    fn test_missing_column_is_selection_error() {
        let table = load_table(CSV.as_bytes(), InputFormat::Csv).unwrap();
        assert!(matches!(
            table.numeric_column("nope").unwrap_err(),
            TtestError::ColumnSelection(_)
        ));
    }

    #[test]
    fn test_non_numeric_column_is_selection_error() {
        let csv = "label,value\nfoo,1\nbar,2\n";
        let table = load_table(csv.as_bytes(), InputFormat::Csv).unwrap();
        assert!(matches!(
            table.numeric_column("label").unwrap_err(),
            TtestError::ColumnSelection(_)
        ));
    }

    #[test]
    fn test_ragged_csv_is_parse_error() {
        let csv = "a,b\n1,2\n3\n";
        assert!(matches!(
            load_table(csv.as_bytes(), InputFormat::Csv).unwrap_err(),
            TtestError::Parse(_)
        ));
    }

    #[test]
    fn test_xlsx_round_trip() {
        use rust_xlsxwriter::Workbook;

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "old_bl").unwrap();
        sheet.write_string(0, 1, "new_bl").unwrap();
        for (i, (a, b)) in [(10.0, 15.0), (12.0, 16.0), (11.0, 14.0)].iter().enumerate() {
            sheet.write_number((i + 1) as u32, 0, *a).unwrap();
            sheet.write_number((i + 1) as u32, 1, *b).unwrap();
        }
        let buf = workbook.save_to_buffer().unwrap();

        let table = load_table(&buf, InputFormat::Xlsx).unwrap();
        assert_eq!(table.headers(), ["old_bl", "new_bl"]);
        let s = table.numeric_column("old_bl").unwrap();
        assert_eq!(s.values(), [10.0, 12.0, 11.0]);
    }
}
