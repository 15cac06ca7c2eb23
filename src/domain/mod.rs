// Domain layer: static models, the chart configuration shape, selectors and
// the ports the site's behaviours are written against.

pub mod chart_config;
pub mod model;
pub mod ports;
pub mod selector;
