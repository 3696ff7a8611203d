mod average;
mod user_agent;

pub use average::{AverageReport, EndpointStat};
pub use user_agent::UserAgentReport;

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One line of a generated report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Zero-based position after sorting
    pub rank: usize,
    pub endpoint: String,
    pub total: u64,
    /// Mean response time in seconds, rounded to 3 decimals
    pub avg_response_time: f64,
}

impl ReportRow {
    /// Cell values in header order, for text renderers
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.endpoint.clone(),
            self.total.to_string(),
            format!("{:.3}", self.avg_response_time),
        ]
    }
}

/// Aggregation strategy fed one record at a time
pub trait ReportStrategy {
    /// Column names of the rows produced by `generate_report`
    fn headers(&self) -> &'static [&'static str];

    /// Account for one record that survived filtering.
    ///
    /// An `Err` rejects only this record; implementations must leave their
    /// state untouched in that case.
    fn process_record(&mut self, record: &Record) -> crate::Result<()>;

    /// Produce the sorted report for everything processed so far.
    ///
    /// Calling this repeatedly without new records yields identical rows.
    fn generate_report(&self) -> crate::Result<Vec<ReportRow>>;
}

/// Report types that can be requested by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Average,
    UserAgent,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Average, ReportKind::UserAgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Average => "average",
            ReportKind::UserAgent => "user_agent",
        }
    }

    /// Whether the report aggregates anything yet
    pub fn is_implemented(&self) -> bool {
        match self {
            ReportKind::Average => true,
            ReportKind::UserAgent => false,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = crate::Error;

    /// Names are matched exactly; `Average` is not `average`
    fn from_str(s: &str) -> crate::Result<Self> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| crate::Error::UnknownReportType(s.to_string()))
    }
}

/// A constructed strategy, one variant per `ReportKind`
#[derive(Debug, Clone)]
pub enum Report {
    Average(AverageReport),
    UserAgent(UserAgentReport),
}

impl Report {
    /// Fresh, empty strategy for the given kind
    pub fn new(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Average => Report::Average(AverageReport::new()),
            ReportKind::UserAgent => Report::UserAgent(UserAgentReport::new()),
        }
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Average(_) => ReportKind::Average,
            Report::UserAgent(_) => ReportKind::UserAgent,
        }
    }
}

impl ReportStrategy for Report {
    fn headers(&self) -> &'static [&'static str] {
        match self {
            Report::Average(report) => report.headers(),
            Report::UserAgent(report) => report.headers(),
        }
    }

    fn process_record(&mut self, record: &Record) -> crate::Result<()> {
        match self {
            Report::Average(report) => report.process_record(record),
            Report::UserAgent(report) => report.process_record(record),
        }
    }

    fn generate_report(&self) -> crate::Result<Vec<ReportRow>> {
        match self {
            Report::Average(report) => report.generate_report(),
            Report::UserAgent(report) => report.generate_report(),
        }
    }
}

/// Build a strategy from its report-type name
pub fn select_strategy(name: &str) -> crate::Result<Report> {
    let kind: ReportKind = name.parse()?;
    tracing::debug!("Selected report strategy: {}", kind);
    Ok(Report::new(kind))
}
