use super::{ReportRow, ReportStrategy};
use crate::record::{Record, RESPONSE_TIME_FIELD, URL_FIELD};
use std::collections::HashMap;

/// Running totals for one endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointStat {
    pub total: u64,
    pub sum_response_time: f64,
}

/// Request count and mean response time per endpoint.
///
/// Endpoints are kept in the order they were first seen so that endpoints
/// with equal totals are reported in ingestion order.
#[derive(Debug, Clone, Default)]
pub struct AverageReport {
    stats: Vec<(String, EndpointStat)>,
    index: HashMap<String, usize>,
}

impl AverageReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator for an endpoint, if it has been seen
    pub fn stat(&self, endpoint: &str) -> Option<&EndpointStat> {
        self.index.get(endpoint).map(|&i| &self.stats[i].1)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    fn stat_mut(&mut self, endpoint: &str) -> &mut EndpointStat {
        let i = match self.index.get(endpoint) {
            Some(&i) => i,
            None => {
                self.stats
                    .push((endpoint.to_string(), EndpointStat::default()));
                self.index.insert(endpoint.to_string(), self.stats.len() - 1);
                self.stats.len() - 1
            }
        };
        &mut self.stats[i].1
    }
}

impl ReportStrategy for AverageReport {
    fn headers(&self) -> &'static [&'static str] {
        &["", "handler", "total", "avg_response_time"]
    }

    fn process_record(&mut self, record: &Record) -> crate::Result<()> {
        let endpoint = record
            .url()
            .ok_or(crate::Error::MissingField(URL_FIELD))?;
        let response_time = record
            .response_time()
            .ok_or(crate::Error::MissingField(RESPONSE_TIME_FIELD))?;

        let stat = self.stat_mut(endpoint);
        stat.total += 1;
        stat.sum_response_time += response_time;

        Ok(())
    }

    fn generate_report(&self) -> crate::Result<Vec<ReportRow>> {
        let mut sorted: Vec<_> = self.stats.iter().collect();
        // Stable: ties keep first-seen order
        sorted.sort_by(|a, b| b.1.total.cmp(&a.1.total));

        let rows = sorted
            .into_iter()
            .enumerate()
            .map(|(rank, (endpoint, stat))| ReportRow {
                rank,
                endpoint: endpoint.clone(),
                total: stat.total,
                avg_response_time: round3(stat.sum_response_time / stat.total as f64),
            })
            .collect();

        Ok(rows)
    }
}

/// Round to 3 decimals based on the exact binary value, ties to even.
///
/// Scaling by 1000 first would push values like 0.0055 (stored just below
/// the half) up to exactly 5.5 and round them the wrong way.
fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}
