use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, Read};
use thiserror::Error;

// One aggregated point as served by the measures API:
// `["2020-01-01T00:00:00+00:00", 300.0, 4.2]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Value, f64)", into = "(String, Value, f64)")]
pub struct Measure {
    pub timestamp: String,
    // Opaque to charting. The measures API puts the aggregation granularity
    // (seconds) here, other producers a series label.
    pub label: Value,
    pub value: f64,
}

impl Measure {
    pub fn new(timestamp: impl Into<String>, label: impl Into<Value>, value: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            label: label.into(),
            value,
        }
    }
}

impl From<(String, Value, f64)> for Measure {
    fn from((timestamp, label, value): (String, Value, f64)) -> Self {
        Self {
            timestamp,
            label,
            value,
        }
    }
}

impl From<Measure> for (String, Value, f64) {
    fn from(measure: Measure) -> Self {
        (measure.timestamp, measure.label, measure.value)
    }
}

#[derive(Error, Debug)]
pub enum MeasureError {
    #[error("error reading measures")]
    Read(#[from] io::Error),
    #[error("error decoding measures")]
    Decode(#[from] serde_json::Error),
}

pub fn parse_measures(s: &str) -> Result<Vec<Measure>, MeasureError> {
    Ok(serde_json::from_str(s)?)
}

pub fn read_measures<R: Read>(mut readable: R) -> Result<Vec<Measure>, MeasureError> {
    let mut buf = String::new();
    readable.read_to_string(&mut buf)?;
    parse_measures(&buf)
}
