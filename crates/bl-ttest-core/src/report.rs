//! Text rendering of test results
//!
//! Everything here is presentational: number formatting and string
//! interpolation over an already-computed result. The narrative sentence is
//! meant to be pasted into a report as-is.

use std::fmt::Write as _;

use crate::histogram::HistogramTable;
use crate::loader::Table;
use crate::welch::WelchResult;

/// Statistics block shown after a run
pub fn render_report(result: &WelchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Welch's t-test ({})", result.alternative.label());
    let _ = writeln!(
        out,
        "  group 1: {} (n = {}, mean = {:.2})",
        result.group1, result.n1, result.mean1
    );
    let _ = writeln!(
        out,
        "  group 2: {} (n = {}, mean = {:.2})",
        result.group2, result.n2, result.mean2
    );
    let _ = writeln!(out, "  mean difference: {:.2}", result.mean_diff);
    let _ = writeln!(
        out,
        "  t-statistic: {:.3} (df = {:.2})",
        result.statistic, result.df
    );
    let _ = writeln!(out, "  p-value: {}", format_sig(result.p_value, 3));
    let _ = writeln!(
        out,
        "  {:.1}% confidence interval: [{:.2}, {:.2}]",
        100.0 * result.confidence_level(),
        result.ci_lower,
        result.ci_upper
    );
    if result.is_degenerate() {
        let _ = writeln!(
            out,
            "  note: zero standard error, the t statistic is undefined for this data"
        );
    }
    out
}

/// One-paragraph summary for pasting into slides or reports
pub fn render_narrative(result: &WelchResult) -> String {
    if result.is_degenerate() {
        return format!(
            "The selected columns {} and {} have zero combined variance, so the \
             t statistic is undefined and no significance statement can be made.",
            result.group1, result.group2
        );
    }

    let direction = if result.mean_diff >= 0.0 { "higher" } else { "lower" };
    let verdict = if result.is_significant() {
        "the difference is statistically significant"
    } else {
        "the difference is not statistically significant"
    };
    format!(
        "The mean of group 2 ({}) is {:.1} {} than group 1 ({});\n\
         with p = {:.2e} against alpha = {:.2}, {} (Welch's t-test, {}).",
        result.group2,
        result.mean_diff.abs(),
        direction,
        result.group1,
        result.p_value,
        result.alpha,
        verdict,
        result.alternative.label()
    )
}

/// Histogram table for terminal display, one row per bin
pub fn render_histogram(hist: &HistogramTable, result: &WelchResult) -> String {
    let name1 = format!("{} (n={})", result.group1, result.n1);
    let name2 = format!("{} (n={})", result.group2, result.n2);
    let label_width = hist
        .labels
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("value class".len());
    let w1 = name1.len().max(5);
    let w2 = name2.len().max(5);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>label_width$}  {:>w1$}  {:>w2$}",
        "value class", name1, name2
    );
    for (i, label) in hist.labels.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>label_width$}  {:>w1$}  {:>w2$}",
            label, hist.counts1[i], hist.counts2[i]
        );
    }
    out
}

/// First rows of the uploaded table
pub fn render_preview(table: &Table, n: usize) -> String {
    let rows = table.preview(n);
    let widths: Vec<usize> = table
        .headers()
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|row| row[i].len())
                .max()
                .unwrap_or(0)
                .max(h.len())
        })
        .collect();

    let mut out = String::new();
    for (i, h) in table.headers().iter().enumerate() {
        let _ = write!(out, "{:>width$}  ", h, width = widths[i]);
    }
    out.push('\n');
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let _ = write!(out, "{:>width$}  ", cell, width = widths[i]);
        }
        out.push('\n');
    }
    out
}

/// Format to `digits` significant figures, mimicking printf's %g
fn format_sig(x: f64, digits: usize) -> String {
    if x == 0.0 || !x.is_finite() {
        return format!("{x}");
    }
    let exp = x.abs().log10().floor() as i32;
    if exp < -4 || exp >= digits as i32 {
        format!("{:.*e}", digits.saturating_sub(1), x)
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        let fixed = format!("{x:.decimals$}");
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    }
}
