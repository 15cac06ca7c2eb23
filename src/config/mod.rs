pub mod site;

pub use site::{AnimationSettings, ChartSettings, NavigationSettings, SiteConfig};
