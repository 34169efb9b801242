//! Workbook export
//!
//! Builds the downloadable .xlsx in memory: the two selected columns on a
//! "raw data" sheet, the binned frequencies on a "histogram" sheet, and one
//! embedded column chart over the histogram range.

use rust_xlsxwriter::{Chart, ChartSolidFill, ChartType, Workbook};

use crate::histogram::{HistogramTable, BIN_COUNT};
use crate::loader::Table;
use crate::TtestResult;

/// Default artifact file name
pub const EXPORT_FILE_NAME: &str = "bl_life_histogram.xlsx";

const RAW_SHEET: &str = "raw data";
const HIST_SHEET: &str = "histogram";
const COLUMN_WIDTH: f64 = 15.0;
const GROUP1_COLOR: &str = "#87CEEB";
const GROUP2_COLOR: &str = "#FFA500";

/// Serialize the selected columns and the histogram table into xlsx bytes
///
/// The raw sheet reproduces the two columns exactly as loaded: original
/// order, header row, blank cells where the source had no usable number.
/// The histogram sheet gets an autofilter over the written range, a frozen
/// header row, and the embedded chart at E2.
pub fn build_workbook(
    table: &Table,
    group1: &str,
    group2: &str,
    hist: &HistogramTable,
) -> TtestResult<Vec<u8>> {
    let cells1 = table.column_cells(group1)?;
    let cells2 = table.column_cells(group2)?;

    let mut workbook = Workbook::new();

    let raw = workbook.add_worksheet().set_name(RAW_SHEET)?;
    raw.write_string(0, 0, group1)?;
    raw.write_string(0, 1, group2)?;
    for (row, cell) in cells1.iter().enumerate() {
        if let Some(v) = cell {
            raw.write_number(row as u32 + 1, 0, *v)?;
        }
    }
    for (row, cell) in cells2.iter().enumerate() {
        if let Some(v) = cell {
            raw.write_number(row as u32 + 1, 1, *v)?;
        }
    }
    raw.set_freeze_panes(1, 0)?;
    for col in 0..2 {
        raw.set_column_width(col, COLUMN_WIDTH)?;
    }

    let chart = histogram_chart(group1, group2);

    let sheet = workbook.add_worksheet().set_name(HIST_SHEET)?;
    sheet.write_string(0, 0, "value class")?;
    sheet.write_string(0, 1, group1)?;
    sheet.write_string(0, 2, group2)?;
    for (i, label) in hist.labels.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, label)?;
        sheet.write_number(row, 1, hist.counts1[i])?;
        sheet.write_number(row, 2, hist.counts2[i])?;
    }
    sheet.autofilter(0, 0, BIN_COUNT as u32, 2)?;
    sheet.set_freeze_panes(1, 0)?;
    for col in 0..3 {
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }
    sheet.insert_chart(1, 4, &chart)?;

    Ok(workbook.save_to_buffer()?)
}

/// Column chart with one series per group, referencing the histogram sheet
fn histogram_chart(group1: &str, group2: &str) -> Chart {
    let last_row = BIN_COUNT as u32;
    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_name(group1)
        .set_categories((HIST_SHEET, 1, 0, last_row, 0))
        .set_values((HIST_SHEET, 1, 1, last_row, 1))
        .set_format(ChartSolidFill::new().set_color(GROUP1_COLOR));
    chart
        .add_series()
        .set_name(group2)
        .set_categories((HIST_SHEET, 1, 0, last_row, 0))
        .set_values((HIST_SHEET, 1, 2, last_row, 2))
        .set_format(ChartSolidFill::new().set_color(GROUP2_COLOR));
    chart.title().set_name("Histogram of the two groups");
    chart.x_axis().set_name("value class");
    chart.y_axis().set_name("frequency");
    chart
}
