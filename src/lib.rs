pub mod config;
pub mod core;
pub mod domain;
pub mod lessons;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::{engine::TourEngine, menu::MenuSession};
pub use domain::model::{MenuCommand, Topic};
pub use domain::ports::{ConfigProvider, Lesson};
pub use utils::error::{Result, TourError};
