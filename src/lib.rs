pub mod backend;
pub mod config;
pub use column::Column;
pub use measure::{parse_measures, read_measures, Measure, MeasureError};
pub use render::{build_config, build_config_with, render, Renderer};
pub use timestamp::{parse_timestamp, ParsedTime};

mod column;
mod measure;
mod render;
mod timestamp;
