pub mod animation;
pub mod app;
pub mod chart;
pub mod navigation;

pub use crate::domain::model::{ChartSeries, GradeLevel, Project, Semester, SkillCategory};
pub use crate::domain::ports::{ChartInstance, ChartLibrary, PresentationSurface};
pub use crate::utils::error::Result;
