use crate::{column::Column, timestamp::ParsedTime};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_X_NAME: &str = "x";
pub const DEFAULT_SERIES_NAME: &str = "Measure";
pub const DEFAULT_TICK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_HEIGHT: u32 = 600;

// Declarative chart description handed to the charting engine. Field names
// follow the engine's configuration object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub bindto: String,
    pub data: ChartData,
    pub axis: Axis,
    pub zoom: Zoom,
    pub padding: Padding,
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    // Name of the column driving the x axis.
    pub x: String,
    pub columns: Columns,
    pub types: BTreeMap<String, SeriesType>,
}

// Serialized as `[x_column, series_column]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
    pub x: Column<ParsedTime>,
    pub series: Column<f64>,
}

impl Serialize for Columns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.x, &self.series).serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    #[default]
    Bar,
    Line,
    Spline,
    Step,
    Area,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub x: XAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    #[serde(rename = "type")]
    pub kind: AxisType,
    pub tick: Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Timeseries,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zoom {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            left: 100,
            right: 100,
            top: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    // Name marker of the x axis column.
    pub x_name: String,
    // Name marker of the plotted column, also its legend label.
    pub series_name: String,
    pub series_type: SeriesType,
    // strftime-style format for x axis tick labels.
    pub tick_format: String,
    pub zoom: bool,
    pub padding: Padding,
    // Rendered height in pixels.
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            x_name: DEFAULT_X_NAME.to_string(),
            series_name: DEFAULT_SERIES_NAME.to_string(),
            series_type: SeriesType::default(),
            tick_format: DEFAULT_TICK_FORMAT.to_string(),
            zoom: true,
            padding: Padding::default(),
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("x axis column name is empty")]
    EmptyAxisName,
    #[error("series column name is empty")]
    EmptySeriesName,
    #[error("series column name {0:?} collides with the x axis column name")]
    DuplicateColumnName(String),
    #[error("chart height must be greater than zero")]
    InvalidHeight,
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x_name.is_empty() {
            return Err(ConfigError::EmptyAxisName);
        }
        if self.series_name.is_empty() {
            return Err(ConfigError::EmptySeriesName);
        }
        if self.series_name == self.x_name {
            return Err(ConfigError::DuplicateColumnName(self.series_name.clone()));
        }
        if self.height == 0 {
            return Err(ConfigError::InvalidHeight);
        }
        Ok(())
    }
}
