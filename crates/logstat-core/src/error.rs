use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON object: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown report type: '{0}' (expected one of: average, user_agent)")]
    UnknownReportType(String),

    #[error("Invalid date format: '{0}' (use YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("Record is missing field '{0}' or it has the wrong type")]
    MissingField(&'static str),

    #[error("The '{0}' report is not implemented yet")]
    Unimplemented(String),
}

pub type Result<T> = std::result::Result<T, Error>;
