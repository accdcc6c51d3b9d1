use crate::domain::model::Topic;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub tour: TourSection,
    pub presentation: Option<PresentationSection>,
    pub topics: Option<TopicsSection>,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourSection {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationSection {
    pub rule_width: Option<usize>,
    pub pause_between: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicsSection {
    pub enabled: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TourError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TourError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values.
    /// Unset variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("tour.name", &self.tour.name)?;

        if let Some(presentation) = &self.presentation {
            if let Some(width) = presentation.rule_width {
                validation::validate_range("presentation.rule_width", width, 20, 120)?;
            }
        }

        if let Some(topics) = &self.topics {
            if let Some(enabled) = &topics.enabled {
                if enabled.is_empty() {
                    return Err(TourError::InvalidConfigValueError {
                        field: "topics.enabled".to_string(),
                        value: "[]".to_string(),
                        reason: "At least one topic must be enabled".to_string(),
                    });
                }
                validation::validate_topic_names("topics.enabled", enabled)?;
            }
        }

        Ok(())
    }

    pub fn rule_width(&self) -> usize {
        self.presentation
            .as_ref()
            .and_then(|p| p.rule_width)
            .unwrap_or(60)
    }

    pub fn pause_between(&self) -> bool {
        self.presentation
            .as_ref()
            .and_then(|p| p.pause_between)
            .unwrap_or(true)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn rule_width(&self) -> usize {
        self.rule_width()
    }

    fn pause_between(&self) -> bool {
        self.pause_between()
    }

    fn timings_enabled(&self) -> bool {
        self.monitoring_enabled()
    }

    fn enabled_topics(&self) -> Vec<Topic> {
        // validate_config has already rejected unknown names
        match self.topics.as_ref().and_then(|t| t.enabled.as_ref()) {
            Some(enabled) => enabled
                .iter()
                .filter_map(|name| Topic::from_slug(name))
                .collect(),
            None => Topic::ALL.to_vec(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[tour]
name = "rust-tour"
description = "Collections and formatting tour"
version = "1.0.0"

[presentation]
rule_width = 72
pause_between = false

[topics]
enabled = ["arrays", "maps"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.tour.name, "rust-tour");
        assert_eq!(config.rule_width(), 72);
        assert!(!config.pause_between());
        assert_eq!(
            config.enabled_topics(),
            vec![Topic::ArraysAndVectors, Topic::Maps]
        );
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let toml_content = r#"
[tour]
name = "rust-tour"
description = "minimal"
version = "1.0"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.rule_width(), 60);
        assert!(config.pause_between());
        assert!(!config.monitoring_enabled());
        assert_eq!(config.enabled_topics(), Topic::ALL.to_vec());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_TOUR_NAME", "env-tour");

        let toml_content = r#"
[tour]
name = "${TEST_TOUR_NAME}"
description = "test"
version = "1.0"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.tour.name, "env-tour");

        std::env::remove_var("TEST_TOUR_NAME");
    }

    #[test]
    fn test_config_validation_rejects_unknown_topics() {
        let toml_content = r#"
[tour]
name = "rust-tour"
description = "test"
version = "1.0"

[topics]
enabled = ["arrays", "goroutines"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_narrow_rule() {
        let toml_content = r#"
[tour]
name = "rust-tour"
description = "test"
version = "1.0"

[presentation]
rule_width = 4
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[tour]
name = "file-tour"
description = "File test"
version = "1.0"

[monitoring]
enabled = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.tour.name, "file-tour");
        assert!(config.monitoring_enabled());
    }
}
