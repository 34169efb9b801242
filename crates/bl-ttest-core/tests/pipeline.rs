//! End-to-end pipeline tests: load -> test -> histogram -> export -> read back

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use bl_ttest_core::export::build_workbook;
use bl_ttest_core::histogram::{build_histogram, BIN_COUNT};
use bl_ttest_core::loader::{load_table, InputFormat};
use bl_ttest_core::welch::{welch_t_test, WelchOptions};

const CSV: &str = "old_bl,new_bl\n10,15\n12,16\n11,14\n13,17\n12,15\n";

#[test]
fn full_run_produces_a_readable_workbook() {
    let table = load_table(CSV.as_bytes(), InputFormat::Csv).unwrap();
    let sample1 = table.numeric_column("old_bl").unwrap();
    let sample2 = table.numeric_column("new_bl").unwrap();

    let result = welch_t_test(&sample1, &sample2, &WelchOptions::default()).unwrap();
    assert!(result.p_value < 0.01);
    assert!(result.ci_lower > 0.0);

    let hist = build_histogram(&sample1, &sample2);
    let buf = build_workbook(&table, "old_bl", "new_bl", &hist).unwrap();

    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(buf)).unwrap();
    let names = workbook.sheet_names().to_vec();
    assert_eq!(names, ["raw data", "histogram"]);

    // raw data round-trip: original non-missing values, original order
    let raw = workbook.worksheet_range("raw data").unwrap();
    let mut rows = raw.rows();
    let header: Vec<String> = rows.next().unwrap().iter().map(|c| c.to_string()).collect();
    assert_eq!(header, ["old_bl", "new_bl"]);

    let read_back: Vec<(f64, f64)> = rows
        .map(|row| (as_number(&row[0]), as_number(&row[1])))
        .collect();
    let expected: Vec<(f64, f64)> = sample1
        .values()
        .iter()
        .zip(sample2.values())
        .map(|(a, b)| (*a, *b))
        .collect();
    assert_eq!(read_back, expected);

    // histogram sheet: header row plus one row per bin
    let hist_range = workbook.worksheet_range("histogram").unwrap();
    assert_eq!(hist_range.rows().count(), BIN_COUNT + 1);
}

#[test]
fn degenerate_run_still_exports() {
    let csv = "a,b\n5,5\n5,5\n5,5\n5,5\n";
    let table = load_table(csv.as_bytes(), InputFormat::Csv).unwrap();
    let s1 = table.numeric_column("a").unwrap();
    let s2 = table.numeric_column("b").unwrap();

    let result = welch_t_test(&s1, &s2, &WelchOptions::default()).unwrap();
    assert!(result.is_degenerate());

    let hist = build_histogram(&s1, &s2);
    assert_eq!(hist.counts1.iter().sum::<u32>(), 4);

    let buf = build_workbook(&table, "a", "b", &hist).unwrap();
    assert!(!buf.is_empty());
}

fn as_number(cell: &Data) -> f64 {
    match cell {
        Data::Float(v) => *v,
        Data::Int(v) => *v as f64,
        other => panic!("expected a number, got {other:?}"),
    }
}
