use crate::OutputFormat;
use anyhow::Result;
use logstat_core::Error;
use logstat_core::config::ReportConfig;
use logstat_core::ingest::{IngestSummary, ingest};
use logstat_core::report::{ReportRow, ReportStrategy};

/// A finished report ready for rendering
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedReport {
    pub report: &'static str,
    #[serde(skip)]
    pub headers: &'static [&'static str],
    pub rows: Vec<ReportRow>,
    #[serde(skip)]
    pub summary: IngestSummary,
}

/// Ingest every configured file and generate the report.
///
/// Report kinds that do not aggregate yet fail with `Error::Unimplemented`
/// before any file is opened.
pub fn build_report(config: &ReportConfig) -> Result<GeneratedReport> {
    if !config.kind.is_implemented() {
        return Err(Error::Unimplemented(config.kind.as_str().to_string()).into());
    }

    let mut strategy = config.strategy();
    let summary = ingest(&config.paths, &mut strategy, &config.filter());

    tracing::debug!(
        "Processed {} of {} files ({} lines, {} malformed, {} filtered out, {} rejected)",
        summary.files_processed,
        config.paths.len(),
        summary.lines_read,
        summary.malformed_lines,
        summary.filtered_out,
        summary.rejected_records
    );

    let rows = strategy.generate_report()?;

    Ok(GeneratedReport {
        report: config.kind.as_str(),
        headers: strategy.headers(),
        rows,
        summary,
    })
}

pub fn execute(config: &ReportConfig, format: OutputFormat) -> Result<()> {
    tracing::debug!(
        "Building '{}' report from {} file(s) as {}",
        config.kind,
        config.paths.len(),
        format.as_str()
    );

    let report = build_report(config)?;

    match format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Table => output_table(&report)?,
        OutputFormat::Pretty => output_pretty(&report)?,
    }

    Ok(())
}

fn output_pretty(report: &GeneratedReport) -> Result<()> {
    print!("{}", render_pretty(report.headers, &report.rows));
    Ok(())
}

fn output_json(report: &GeneratedReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

fn output_table(report: &GeneratedReport) -> Result<()> {
    print!("{}", render_csv(report.headers, &report.rows));
    Ok(())
}

/// Render rows as an aligned text table.
///
/// The first column (rank) and numeric columns are right-aligned, the
/// endpoint column is left-aligned. Header text is bold when the terminal
/// supports it. Widths count chars, so endpoints with double-width (e.g.
/// CJK) characters will not line up.
pub fn render_pretty(headers: &[&str], rows: &[ReportRow]) -> String {
    use console::style;

    let cells: Vec<Vec<String>> = rows.iter().map(ReportRow::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if i >= widths.len() {
                widths.push(0);
            }
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let align = |i: usize, text: &str| -> String {
        let width = widths[i];
        if i == 1 {
            format!("{:<width$}", text)
        } else {
            format!("{:>width$}", text)
        }
    };

    let mut out = String::new();

    let header_line: Vec<String> = (0..widths.len())
        .map(|i| {
            let text = align(i, headers.get(i).copied().unwrap_or(""));
            style(text).bold().to_string()
        })
        .collect();
    out.push_str(header_line.join("  ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| align(i, cell))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out
}

/// Render rows as comma-separated values with a header line
pub fn render_csv(headers: &[&str], rows: &[ReportRow]) -> String {
    let mut out = String::new();

    let header: Vec<&str> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 && h.is_empty() { "rank" } else { *h })
        .collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in rows {
        let line: Vec<String> = row.cells().iter().map(|c| csv_escape(c)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
