// Adapters layer: concrete implementations of the presentation surface and
// chart library ports, plus the page structure they are exercised against.

pub mod layout;
pub mod memory_document;
pub mod recording_chart;

pub use layout::{build_portfolio_page, portfolio_page};
pub use memory_document::{ElementSpec, MemoryDocument, ScrollRequest};
pub use recording_chart::{ChartLog, Frame, RecordedChart, RecordingChartLibrary};
