//! Chart library that renders nothing and records what it was asked to draw.

use crate::domain::chart_config::ChartConfig;
use crate::domain::ports::{ChartInstance, ChartLibrary, DrawingContext, ElementId};
use crate::utils::error::{Result, SiteError};
use std::cell::RefCell;
use std::rc::Rc;

/// One draw call: the canvas and the configuration as the library would
/// receive it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub canvas: ElementId,
    pub config: serde_json::Value,
}

#[derive(Debug, Default)]
pub struct ChartLog {
    pub created: usize,
    pub frames: Vec<Frame>,
}

impl ChartLog {
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Redraws after the initial render.
    pub fn redraws(&self) -> usize {
        self.frames.len().saturating_sub(self.created)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingChartLibrary {
    log: Rc<RefCell<ChartLog>>,
    failure: Option<String>,
}

impl RecordingChartLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// A library whose constructor always fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Shared view of everything drawn through this library.
    pub fn log(&self) -> Rc<RefCell<ChartLog>> {
        Rc::clone(&self.log)
    }
}

fn draw(log: &RefCell<ChartLog>, canvas: ElementId, config: &ChartConfig) -> Result<()> {
    let config = serde_json::to_value(config)?;
    log.borrow_mut().frames.push(Frame { canvas, config });
    Ok(())
}

impl ChartLibrary for RecordingChartLibrary {
    fn create_chart(
        &mut self,
        context: &DrawingContext,
        config: ChartConfig,
    ) -> Result<Box<dyn ChartInstance>> {
        if let Some(reason) = &self.failure {
            return Err(SiteError::chart_setup(reason.clone()));
        }

        draw(&self.log, context.canvas, &config)?;
        self.log.borrow_mut().created += 1;
        tracing::debug!("Chart created on canvas {:?}", context.canvas);

        Ok(Box::new(RecordedChart {
            canvas: context.canvas,
            config,
            log: Rc::clone(&self.log),
        }))
    }
}

pub struct RecordedChart {
    canvas: ElementId,
    config: ChartConfig,
    log: Rc<RefCell<ChartLog>>,
}

impl ChartInstance for RecordedChart {
    fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    fn update(&mut self) -> Result<()> {
        draw(&self.log, self.canvas, &self.config)
    }
}
