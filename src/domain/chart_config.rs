//! Declarative chart configuration, serialised in the camelCase shape the
//! charting library reads.

use crate::domain::model::ChartSeries;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    /// Offsets outside `0.0..=1.0` are clamped to the nearest edge.
    pub fn add_color_stop(&mut self, offset: f64, color: impl Into<String>) {
        let color = color.into();
        let clamped = offset.clamp(0.0, 1.0);
        if clamped != offset {
            tracing::warn!("⚠️ Color stop {} at offset {} clamped to {}", color, offset, clamped);
        }
        self.stops.push(ColorStop {
            offset: clamped,
            color,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(String),
    Gradient(LinearGradient),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: Fill,
    pub border_width: u32,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: u32,
    pub point_background_color: String,
    pub point_border_color: String,
    pub point_border_width: u32,
    pub point_hover_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

/// Tooltip label formatter: `"<prefix>: <value to N decimals>"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipLabel {
    pub prefix: String,
    pub decimals: usize,
}

impl TooltipLabel {
    pub fn format(&self, value: f64) -> String {
        format!("{}: {:.*}", self.prefix, self.decimals, value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipCallbacks {
    pub label: TooltipLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: String,
    pub padding: u32,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub display_colors: bool,
    pub callbacks: TooltipCallbacks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub draw_border: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticks {
    pub color: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub grid: Grid,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
    pub x: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Replaces the labels and the first data set's values.
    /// Returns `false` when the chart has no data set to receive them.
    pub fn set_series(&mut self, series: &ChartSeries) -> bool {
        let Some(dataset) = self.data.datasets.first_mut() else {
            return false;
        };
        dataset.data = series.values.clone();
        self.data.labels = series.labels.clone();
        true
    }

    pub fn series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.data.labels.clone(),
            values: self
                .data
                .datasets
                .first()
                .map(|d| d.data.clone())
                .unwrap_or_default(),
        }
    }
}
