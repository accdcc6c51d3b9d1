pub mod toml_config;

use crate::domain::model::Topic;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rust-tour")]
#[command(about = "An interactive tour of Rust's formatting and core collections")]
pub struct CliConfig {
    /// Run a single topic non-interactively and exit
    #[arg(long)]
    pub topic: Option<String>,

    /// Run every topic in order and exit
    #[arg(long)]
    pub all: bool,

    /// Print the available topic names and exit
    #[arg(long)]
    pub list: bool,

    /// Width of the rules drawn around banners and menus
    #[arg(long, default_value = "60")]
    pub rule_width: usize,

    /// Skip the "Press ENTER to continue" prompt between topics
    #[arg(long)]
    pub no_pause: bool,

    /// Log per-topic wall-clock timings at the end of the session
    #[arg(long)]
    pub timings: bool,

    /// Path to an optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The topic requested with `--topic`, if any.
    ///
    /// `validate` has already rejected unknown names, so this only returns
    /// `None` when the flag was not given.
    pub fn requested_topic(&self) -> Option<Topic> {
        self.topic.as_deref().and_then(Topic::from_slug)
    }
}

impl ConfigProvider for CliConfig {
    fn rule_width(&self) -> usize {
        self.rule_width
    }

    fn pause_between(&self) -> bool {
        !self.no_pause
    }

    fn timings_enabled(&self) -> bool {
        self.timings
    }

    fn enabled_topics(&self) -> Vec<Topic> {
        Topic::ALL.to_vec()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("rule_width", self.rule_width, 20, 120)?;

        if let Some(name) = &self.topic {
            validation::validate_non_empty_string("topic", name)?;
            validation::validate_topic_name("topic", name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            topic: None,
            all: false,
            list: false,
            rule_width: 60,
            no_pause: false,
            timings: false,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_rule_width_out_of_range_is_rejected() {
        let mut config = base_config();
        config.rule_width = 10;
        assert!(config.validate().is_err());

        config.rule_width = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_topic_is_rejected() {
        let mut config = base_config();
        config.topic = Some("interfaces".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_known_topic_resolves() {
        let mut config = base_config();
        config.topic = Some("maps".to_string());
        assert!(config.validate().is_ok());
        assert_eq!(config.requested_topic(), Some(Topic::Maps));
    }
}
