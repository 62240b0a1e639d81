use crate::{
    backend::ChartBackend,
    column::Column,
    config::{
        Axis, AxisType, ChartConfig, ChartData, Columns, ConfigError, RenderOptions, Size, Tick,
        XAxis, Zoom,
    },
    measure::Measure,
    timestamp::parse_timestamp,
};
use anyhow::Result;
use log::debug;
use std::collections::BTreeMap;

// Turns measures into a time-series chart and hands it to a backend. Holds no
// state between renders besides the backend itself.
pub struct Renderer<B: ChartBackend> {
    backend: B,
    options: RenderOptions,
}

impl<B: ChartBackend> Renderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(backend: B, options: RenderOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { backend, options })
    }

    // Builds the configuration and invokes the backend exactly once. Backend
    // errors are returned as-is.
    pub fn render(&mut self, mount_point: &str, measures: &[Measure]) -> Result<()> {
        let config = build_config_with(mount_point, measures, &self.options);
        debug!(
            "generating chart on {:?} with {} points",
            mount_point,
            measures.len()
        );
        self.backend.generate(&config)
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

pub fn render<B: ChartBackend>(
    backend: &mut B,
    mount_point: &str,
    measures: &[Measure],
) -> Result<()> {
    Renderer::new(backend).render(mount_point, measures)
}

pub fn build_config(mount_point: &str, measures: &[Measure]) -> ChartConfig {
    build_config_with(mount_point, measures, &RenderOptions::default())
}

pub fn build_config_with(
    mount_point: &str,
    measures: &[Measure],
    options: &RenderOptions,
) -> ChartConfig {
    let x = Column::new(
        options.x_name.as_str(),
        measures
            .iter()
            .map(|m| parse_timestamp(&m.timestamp))
            .collect(),
    );
    let series = Column::new(
        options.series_name.as_str(),
        measures.iter().map(|m| m.value).collect(),
    );

    let mut types = BTreeMap::new();
    types.insert(options.series_name.clone(), options.series_type);

    ChartConfig {
        bindto: mount_point.to_string(),
        data: ChartData {
            x: options.x_name.clone(),
            columns: Columns { x, series },
            types,
        },
        axis: Axis {
            x: XAxis {
                kind: AxisType::Timeseries,
                tick: Tick {
                    format: options.tick_format.clone(),
                },
            },
        },
        zoom: Zoom {
            enabled: options.zoom,
        },
        padding: options.padding,
        size: Size {
            height: options.height,
        },
    }
}
