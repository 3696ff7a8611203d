use crate::filter::{parse_date, DateFilter};
use crate::report::{Report, ReportKind};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Validated settings for a single report run.
///
/// Everything that can be rejected up front is checked when the config is
/// built, so a bad report type or date never reaches the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub paths: Vec<PathBuf>,
    pub kind: ReportKind,
    pub target_date: Option<NaiveDate>,
}

impl ReportConfig {
    pub fn new(paths: Vec<PathBuf>, kind: ReportKind, target_date: Option<NaiveDate>) -> Self {
        Self {
            paths,
            kind,
            target_date,
        }
    }

    /// Build a config from raw command-line values
    pub fn from_args(paths: Vec<PathBuf>, report: &str, date: Option<&str>) -> crate::Result<Self> {
        let kind: ReportKind = report.parse()?;
        let target_date = date.map(parse_date).transpose()?;
        Ok(Self::new(paths, kind, target_date))
    }

    pub fn filter(&self) -> DateFilter {
        DateFilter::new(self.target_date)
    }

    /// Fresh strategy for this run
    pub fn strategy(&self) -> Report {
        Report::new(self.kind)
    }
}
