use crate::domain::selector::Selector;
use crate::utils::error::{Result, SiteError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A CSS class name: non-empty, no whitespace, no selector punctuation.
pub fn validate_class_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '.' | '#' | '[' | ']'))
    {
        return Err(SiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Class names cannot contain whitespace or selector syntax".to_string(),
        });
    }
    Ok(())
}

pub fn validate_selector(field_name: &str, value: &str) -> Result<()> {
    value
        .parse::<Selector>()
        .map(|_| ())
        .map_err(|e| SiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_ordered(field_name: &str, low: f64, high: f64) -> Result<()> {
    if low >= high {
        return Err(SiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: format!("{}..{}", low, high),
            reason: "Lower bound must be below upper bound".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_class_name() {
        assert!(validate_class_name("animation.class", "fade-in-up").is_ok());
        assert!(validate_class_name("animation.class", "").is_err());
        assert!(validate_class_name("animation.class", "fade in").is_err());
        assert!(validate_class_name("animation.class", ".fade").is_err());
    }

    #[test]
    fn test_validate_selector() {
        assert!(validate_selector("navigation.nav_link_selector", ".nav-links a").is_ok());
        assert!(validate_selector("navigation.nav_link_selector", "a[href^=\"#\"]").is_ok());
        assert!(validate_selector("navigation.nav_link_selector", "#").is_err());
        assert!(validate_selector("navigation.nav_link_selector", "   ").is_err());
    }

    #[test]
    fn test_validate_range_and_order() {
        assert!(validate_range("animation.threshold", 0.1, 0.0, 1.0).is_ok());
        assert!(validate_range("animation.threshold", 1.5, 0.0, 1.0).is_err());
        assert!(validate_ordered("chart.y_axis", 2.5, 4.0).is_ok());
        assert!(validate_ordered("chart.y_axis", 4.0, 4.0).is_err());
    }
}
