use super::{ReportRow, ReportStrategy};
use crate::record::Record;

/// Browser popularity report.
///
/// The report type is selectable so that its name stays reserved, but it does
/// not aggregate anything yet: records are accepted and dropped, and
/// `generate_report` fails with `Error::Unimplemented`.
#[derive(Debug, Clone, Default)]
pub struct UserAgentReport;

impl UserAgentReport {
    pub fn new() -> Self {
        Self
    }
}

impl ReportStrategy for UserAgentReport {
    fn headers(&self) -> &'static [&'static str] {
        &[]
    }

    fn process_record(&mut self, _record: &Record) -> crate::Result<()> {
        Ok(())
    }

    fn generate_report(&self) -> crate::Result<Vec<ReportRow>> {
        Err(crate::Error::Unimplemented("user_agent".to_string()))
    }
}
