use crate::domain::model::Topic;
use crate::utils::error::{Result, TourError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_topic_name(field_name: &str, name: &str) -> Result<Topic> {
    Topic::from_slug(name).ok_or_else(|| TourError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: name.to_string(),
        reason: format!(
            "Unknown topic. Valid topics: {}",
            Topic::ALL
                .iter()
                .map(|t| t.slug())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    })
}

pub fn validate_topic_names(field_name: &str, names: &[String]) -> Result<Vec<Topic>> {
    names
        .iter()
        .map(|name| validate_topic_name(field_name, name))
        .collect()
}
