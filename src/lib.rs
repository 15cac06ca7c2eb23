pub mod adapters;
pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;

pub use adapters::{portfolio_page, MemoryDocument, RecordingChartLibrary};
pub use config::SiteConfig;
pub use crate::core::app::{ChartOutcome, InitReport, Launch, Portfolio};
pub use crate::core::chart::{init_gpa_chart, update_chart_data};
pub use domain::ports::{ChartInstance, ChartLibrary, PresentationSurface};
pub use utils::error::{Result, SiteError};
