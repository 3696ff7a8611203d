use crate::record::Record;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a caller-supplied date strictly as `YYYY-MM-DD`
///
/// Unlike timestamp extraction from records, any deviation here is an error:
/// the value must be exactly ten characters with `-` separators and name a
/// real calendar day.
pub fn parse_date(input: &str) -> crate::Result<NaiveDate> {
    let bytes = input.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_shaped {
        return Err(crate::Error::InvalidDateFormat(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| crate::Error::InvalidDateFormat(input.to_string()))
}

/// Calendar date of a record, taken from the part of `@timestamp` before `T`
///
/// Returns `None` when the field is missing, not a string, or not a valid date.
pub fn record_date(record: &Record) -> Option<NaiveDate> {
    let timestamp = record.timestamp()?;
    let date_part = timestamp.split('T').next().unwrap_or(timestamp);

    match NaiveDate::parse_from_str(date_part, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!("Unparseable timestamp {}: {}", timestamp, e);
            None
        }
    }
}

/// Check a record against an optional target date
pub fn passes(record: &Record, target_date: Option<NaiveDate>) -> bool {
    match target_date {
        None => true,
        Some(target) => record_date(record) == Some(target),
    }
}

/// Date predicate applied to every decoded record before aggregation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    /// Day to keep; `None` keeps everything
    pub target: Option<NaiveDate>,
}

impl DateFilter {
    pub fn new(target: Option<NaiveDate>) -> Self {
        Self { target }
    }

    /// A filter that lets every record through
    pub fn any() -> Self {
        Self::default()
    }

    pub fn passes(&self, record: &Record) -> bool {
        passes(record, self.target)
    }
}
