use clap::ValueEnum;

pub mod commands;

/// How a generated report is written to stdout
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table with a header rule
    Pretty,
    /// `{"report": ..., "rows": [...]}`
    Json,
    /// Comma-separated values with a header line
    Table,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        }
    }
}
