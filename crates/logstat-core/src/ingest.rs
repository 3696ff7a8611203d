use crate::filter::DateFilter;
use crate::record::Record;
use crate::report::ReportStrategy;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counters describing what happened during one ingestion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub lines_read: usize,
    pub malformed_lines: usize,
    pub filtered_out: usize,
    pub rejected_records: usize,
    pub accepted_records: usize,
}

/// Feed every record from `paths` through `filter` into `strategy`.
///
/// Files are read in the order given and lines in file order. A file that
/// cannot be opened or read, a line that is not a JSON object, and a record
/// the strategy rejects are each reported with `tracing::warn!` and skipped;
/// none of them stop the run.
pub fn ingest<P, S>(paths: &[P], strategy: &mut S, filter: &DateFilter) -> IngestSummary
where
    P: AsRef<Path>,
    S: ReportStrategy + ?Sized,
{
    let mut summary = IngestSummary::default();

    for path in paths {
        let path = path.as_ref();
        tracing::debug!("Reading log file: {}", path.display());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Failed to process {}: {}", path.display(), e);
                summary.files_failed += 1;
                continue;
            }
        };

        let source = path.display().to_string();
        match ingest_reader(BufReader::new(file), &source, strategy, filter, &mut summary) {
            Ok(()) => summary.files_processed += 1,
            Err(e) => {
                tracing::warn!("Failed to process {}: {}", source, e);
                summary.files_failed += 1;
            }
        }
    }

    tracing::debug!(
        "Ingestion complete: {} files, {} lines, {} records accepted",
        summary.files_processed,
        summary.lines_read,
        summary.accepted_records
    );

    summary
}

/// Feed newline-delimited JSON from any buffered reader into `strategy`.
///
/// Per-line problems are logged against `source` and skipped. Only a failure
/// of the reader itself is returned, after which the rest of the source is
/// abandoned.
pub fn ingest_reader<R, S>(
    mut reader: R,
    source: &str,
    strategy: &mut S,
    filter: &DateFilter,
    summary: &mut IngestSummary,
) -> crate::Result<()>
where
    R: BufRead,
    S: ReportStrategy + ?Sized,
{
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("{}:{}: line is not valid UTF-8: {}", source, line_no, e);
                summary.lines_read += 1;
                summary.malformed_lines += 1;
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        summary.lines_read += 1;

        let record = match Record::from_line(line) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("{}:{}: invalid JSON object: {}", source, line_no, e);
                summary.malformed_lines += 1;
                continue;
            }
        };

        if !filter.passes(&record) {
            summary.filtered_out += 1;
            continue;
        }

        match strategy.process_record(&record) {
            Ok(()) => summary.accepted_records += 1,
            Err(e) => {
                tracing::warn!("{}:{}: skipping record: {}", source, line_no, e);
                summary.rejected_records += 1;
            }
        }
    }

    Ok(())
}
