use crate::utils::error::Result;
use crate::utils::validation::{
    validate_class_name, validate_non_empty_string, validate_ordered, validate_range,
    validate_selector, Validate,
};
use serde::{Deserialize, Serialize};

/// Static site settings. Every field defaults to the values the site ships
/// with; a TOML document only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub chart: ChartSettings,
    pub navigation: NavigationSettings,
    pub animation: AnimationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub canvas_id: String,
    pub gradient_height: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            canvas_id: "gpaChart".to_string(),
            gradient_height: 400.0,
            y_min: 2.5,
            y_max: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    pub anchor_selector: String,
    pub section_selector: String,
    pub nav_link_selector: String,
    pub header_selector: String,
    pub active_class: String,
    pub scrolled_class: String,
    /// Sections count as reached this many units before their top edge.
    pub lookahead_margin: f64,
    /// Scroll offset past which the header is marked scrolled.
    pub header_threshold: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            anchor_selector: r##"a[href^="#"]"##.to_string(),
            section_selector: "section[id]".to_string(),
            nav_link_selector: ".nav-links a".to_string(),
            header_selector: "header".to_string(),
            active_class: "active".to_string(),
            scrolled_class: "scrolled".to_string(),
            lookahead_margin: 100.0,
            header_threshold: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub class: String,
    /// Visible fraction of an element that triggers its animation.
    pub threshold: f64,
    pub targets: Vec<String>,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            class: "fade-in-up".to_string(),
            threshold: 0.1,
            targets: vec![
                ".project-card".to_string(),
                ".skill-category".to_string(),
                ".cert-item".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Parses overrides on top of the defaults and validates the result.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("chart.canvas_id", &self.chart.canvas_id)?;
        validate_range(
            "chart.gradient_height",
            self.chart.gradient_height,
            1.0,
            f64::MAX,
        )?;
        validate_ordered("chart.y_min..chart.y_max", self.chart.y_min, self.chart.y_max)?;

        let nav = &self.navigation;
        validate_selector("navigation.anchor_selector", &nav.anchor_selector)?;
        validate_selector("navigation.section_selector", &nav.section_selector)?;
        validate_selector("navigation.nav_link_selector", &nav.nav_link_selector)?;
        validate_selector("navigation.header_selector", &nav.header_selector)?;
        validate_class_name("navigation.active_class", &nav.active_class)?;
        validate_class_name("navigation.scrolled_class", &nav.scrolled_class)?;
        validate_range("navigation.lookahead_margin", nav.lookahead_margin, 0.0, f64::MAX)?;
        validate_range("navigation.header_threshold", nav.header_threshold, 0.0, f64::MAX)?;

        validate_class_name("animation.class", &self.animation.class)?;
        validate_range("animation.threshold", self.animation.threshold, 0.0, 1.0)?;
        for target in &self.animation.targets {
            validate_selector("animation.targets", target)?;
        }

        Ok(())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chart.canvas_id, "gpaChart");
        assert_eq!(config.animation.targets.len(), 3);
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let toml_content = r#"
[chart]
canvas_id = "historyChart"

[navigation]
header_threshold = 40.0
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.chart.canvas_id, "historyChart");
        assert_eq!(config.chart.y_max, 4.0);
        assert_eq!(config.navigation.header_threshold, 40.0);
        assert_eq!(config.navigation.active_class, "active");
        assert_eq!(config.animation, AnimationSettings::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = SiteConfig::default();
        config.chart.y_min = 4.0;
        config.chart.y_max = 2.5;
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.animation.class = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_overrides_are_rejected_on_parse() {
        for content in [
            "[chart]\ny_min = 4.0\ny_max = 2.5\n",
            "[animation]\ntargets = [\".card\", \"#\"]\n",
            "[animation]\nthreshold = 2.0\n",
        ] {
            let err = SiteConfig::from_toml_str(content).unwrap_err();
            assert!(
                matches!(err, crate::utils::error::SiteError::InvalidConfigValue { .. }),
                "{}: {}",
                content,
                err
            );
        }
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = SiteConfig::from_toml_str("[chart\ncanvas_id = 1").unwrap_err();
        assert!(matches!(err, crate::utils::error::SiteError::ConfigParse(_)));
    }
}
