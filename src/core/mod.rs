pub mod engine;
pub mod menu;

pub use crate::domain::model::{MenuCommand, Topic};
pub use crate::domain::ports::{ConfigProvider, Lesson};
pub use crate::utils::error::Result;
