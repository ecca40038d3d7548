pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio")]
#[command(about = "Headless preview of a portfolio carousel and its content")]
pub struct CliConfig {
    /// Content directory or base URL (overrides the config file)
    #[arg(long)]
    pub content: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "1280")]
    pub width: f32,

    #[arg(long, default_value = "800")]
    pub height: f32,

    /// Comma separated key script, e.g. "d,d,Enter,0,Escape"; digits click a blog post
    #[arg(long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Skip the modal open delay
    #[arg(long)]
    pub instant: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（若有）並套用命令列覆寫
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(content) = &self.content {
            config.content.base = content.clone();
        }
        if self.instant {
            config.timing.open_delay_ms = 0;
        }

        config.validate()?;
        Ok(config)
    }
}
