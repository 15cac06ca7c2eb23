//! GPA history chart: builds the line-chart configuration from the academic
//! table and hands it to the charting library.

use crate::config::ChartSettings;
use crate::data::academic;
use crate::domain::chart_config::{
    Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Fill, Font, Grid, Legend,
    Plugins, Scales, Ticks, Tooltip, TooltipCallbacks, TooltipLabel,
};
use crate::domain::model::ChartSeries;
use crate::domain::ports::{ChartInstance, ChartLibrary, PresentationSurface};
use crate::utils::error::{Result, SiteError};

pub const ACCENT: &str = "#8b5cf6";
pub const GRADIENT_TOP: &str = "rgba(139, 92, 246, 0.5)";
pub const GRADIENT_BOTTOM: &str = "rgba(139, 92, 246, 0.0)";
pub const TICK_COLOR: &str = "#b0b3b8";
pub const TOOLTIP_BACKGROUND: &str = "rgba(26, 31, 58, 0.95)";
pub const TOOLTIP_TITLE: &str = "#e4e6eb";
pub const GRID_COLOR: &str = "rgba(255, 255, 255, 0.05)";

fn ticks() -> Ticks {
    Ticks {
        color: TICK_COLOR.to_string(),
        font: Font { size: 12 },
    }
}

pub fn gpa_chart_config(series: &ChartSeries, background: Fill, settings: &ChartSettings) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![Dataset {
                label: "GPA".to_string(),
                data: series.values.clone(),
                border_color: ACCENT.to_string(),
                background_color: background,
                border_width: 3,
                fill: true,
                tension: 0.4,
                point_radius: 5,
                point_background_color: ACCENT.to_string(),
                point_border_color: "#fff".to_string(),
                point_border_width: 2,
                point_hover_radius: 7,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend { display: false },
                tooltip: Tooltip {
                    background_color: TOOLTIP_BACKGROUND.to_string(),
                    padding: 12,
                    title_color: TOOLTIP_TITLE.to_string(),
                    body_color: TICK_COLOR.to_string(),
                    border_color: ACCENT.to_string(),
                    border_width: 1,
                    display_colors: false,
                    callbacks: TooltipCallbacks {
                        label: TooltipLabel {
                            prefix: "GPA".to_string(),
                            decimals: 2,
                        },
                    },
                },
            },
            scales: Scales {
                y: Axis {
                    begin_at_zero: Some(false),
                    min: Some(settings.y_min),
                    max: Some(settings.y_max),
                    grid: Grid {
                        display: None,
                        color: Some(GRID_COLOR.to_string()),
                        draw_border: false,
                    },
                    ticks: ticks(),
                },
                x: Axis {
                    begin_at_zero: None,
                    min: None,
                    max: None,
                    grid: Grid {
                        display: Some(false),
                        color: None,
                        draw_border: false,
                    },
                    ticks: ticks(),
                },
            },
        },
    }
}

/// Creates the GPA chart on the canvas named by `settings.canvas_id`.
///
/// A missing canvas is logged and returned as [`SiteError::TargetNotFound`];
/// callers treat the chart as optional.
pub fn init_gpa_chart<S, L>(
    surface: &S,
    library: &mut L,
    settings: &ChartSettings,
) -> Result<Box<dyn ChartInstance>>
where
    S: PresentationSurface + ?Sized,
    L: ChartLibrary + ?Sized,
{
    let Some(canvas) = surface.element_by_id(&settings.canvas_id) else {
        tracing::error!("Canvas element with id \"{}\" not found", settings.canvas_id);
        return Err(SiteError::target_not_found(format!("#{}", settings.canvas_id)));
    };

    let context = surface.drawing_context(canvas).ok_or_else(|| {
        SiteError::chart_setup(format!(
            "element #{} has no 2D drawing context",
            settings.canvas_id
        ))
    })?;

    let mut gradient = context.create_linear_gradient(0.0, 0.0, 0.0, settings.gradient_height);
    gradient.add_color_stop(0.0, GRADIENT_TOP);
    gradient.add_color_stop(1.0, GRADIENT_BOTTOM);

    let series = academic::gpa_chart_data();
    tracing::debug!("Building GPA chart with {} semesters", series.len());

    library.create_chart(
        &context,
        gpa_chart_config(&series, Fill::Gradient(gradient), settings),
    )
}

/// Replaces the chart's labels and values and redraws. `None` is a no-op.
pub fn update_chart_data(chart: Option<&mut dyn ChartInstance>, series: &ChartSeries) -> Result<()> {
    let Some(chart) = chart else {
        return Ok(());
    };

    if !chart.config_mut().set_series(series) {
        return Err(SiteError::chart_setup("chart has no data set to update"));
    }
    chart.update()
}
