use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Target not found: {target}")]
    TargetNotFound { target: String },

    #[error("Chart setup failed: {message}")]
    ChartSetup { message: String },

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SiteError {
    pub fn target_not_found(target: impl Into<String>) -> Self {
        Self::TargetNotFound {
            target: target.into(),
        }
    }

    pub fn chart_setup(message: impl Into<String>) -> Self {
        Self::ChartSetup {
            message: message.into(),
        }
    }

    /// A missing element or canvas, as opposed to a failure inside a feature.
    pub fn is_missing_target(&self) -> bool {
        matches!(self, Self::TargetNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
