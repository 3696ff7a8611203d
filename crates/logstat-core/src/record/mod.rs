use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TIMESTAMP_FIELD: &str = "@timestamp";
pub const URL_FIELD: &str = "url";
pub const RESPONSE_TIME_FIELD: &str = "response_time";

/// A single decoded log line.
///
/// Only JSON objects decode into a `Record`; any other JSON value is rejected
/// by the deserializer. Fields are read on demand and unknown keys are kept
/// but never inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Decode one line of newline-delimited JSON
    pub fn from_line(line: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Raw `@timestamp` value, if it is a string
    pub fn timestamp(&self) -> Option<&str> {
        self.get(TIMESTAMP_FIELD).and_then(Value::as_str)
    }

    /// Endpoint the request was made against
    pub fn url(&self) -> Option<&str> {
        self.get(URL_FIELD).and_then(Value::as_str)
    }

    /// Response time in seconds, if present and numeric
    pub fn response_time(&self) -> Option<f64> {
        self.get(RESPONSE_TIME_FIELD).and_then(Value::as_f64)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
