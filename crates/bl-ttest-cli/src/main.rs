//! Command-line front end for bl-ttest-core
//!
//! Takes the input file, two column names, tail mode, significance level,
//! and the output workbook path, then prints the report and writes the
//! workbook.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use bl_ttest_core::export::{build_workbook, EXPORT_FILE_NAME};
use bl_ttest_core::histogram::build_histogram;
use bl_ttest_core::loader::{load_table, InputFormat};
use bl_ttest_core::report::{render_histogram, render_narrative, render_preview, render_report};
use bl_ttest_core::welch::{welch_t_test, WelchOptions};
use bl_ttest_core::Alternative;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tail {
    /// Is there any difference between the groups
    TwoSided,
    /// Is group 2 greater than group 1
    Greater,
}

impl From<Tail> for Alternative {
    fn from(tail: Tail) -> Self {
        match tail {
            Tail::TwoSided => Alternative::TwoSided,
            Tail::Greater => Alternative::Greater,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "bl-ttest",
    about = "Welch's t-test between two columns of a CSV or xlsx file"
)]
struct Args {
    /// Input table (.csv or .xlsx)
    input: PathBuf,

    /// Column name for group 1 (default: first column)
    #[arg(long)]
    group1: Option<String>,

    /// Column name for group 2 (default: second column)
    #[arg(long)]
    group2: Option<String>,

    /// Test direction
    #[arg(long, value_enum, default_value_t = Tail::TwoSided)]
    tail: Tail,

    /// Significance level, 0.001 to 0.10
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,

    /// Output workbook path
    #[arg(long, default_value = EXPORT_FILE_NAME)]
    output: PathBuf,

    /// Number of data rows to preview
    #[arg(long, default_value_t = 5)]
    preview_rows: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if !(0.001..=0.10).contains(&args.alpha) {
        bail!("alpha must lie between 0.001 and 0.10 (got {})", args.alpha);
    }

    let format = InputFormat::from_path(&args.input.to_string_lossy())?;
    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let table = load_table(&bytes, format)?;

    println!("data preview ({} rows):", args.preview_rows.min(table.n_rows()));
    println!("{}", render_preview(&table, args.preview_rows));

    let headers = table.headers();
    let group1 = args.group1.unwrap_or_else(|| headers[0].clone());
    let group2 = args
        .group2
        .unwrap_or_else(|| headers.get(1).unwrap_or(&headers[0]).clone());

    let sample1 = table.numeric_column(&group1)?;
    let sample2 = table.numeric_column(&group2)?;

    let options = WelchOptions {
        alternative: args.tail.into(),
        alpha: args.alpha,
    };
    let result = welch_t_test(&sample1, &sample2, &options)?;

    println!("{}", render_report(&result));
    println!("{}", render_narrative(&result));
    println!();

    let hist = build_histogram(&sample1, &sample2);
    println!("{}", render_histogram(&hist, &result));

    let buf = build_workbook(&table, &group1, &group2, &hist)?;
    fs::write(&args.output, &buf)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("workbook written to {}", args.output.display());

    Ok(())
}
