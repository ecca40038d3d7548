pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{fs::LocalStorage, http::HttpSource};
pub use crate::app::{PortfolioApp, Runtime, RuntimeHandle};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::loader::ContentLoader;
pub use crate::utils::error::{PortfolioError, Result};
