use crate::core::carousel::{CarouselSettings, LayoutParams};
use crate::domain::model::{ContentPaths, TimingSettings, TILES};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_content_base, validate_non_empty_string, validate_positive, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub content: ContentConfig,
    pub carousel: CarouselConfig,
    pub timing: TimingSettings,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// 本地目錄或 http(s) 網址
    pub base: String,
    #[serde(flatten)]
    pub paths: ContentPaths,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base: ".".to_string(),
            paths: ContentPaths::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub initial_index: Option<usize>,
    pub mobile_breakpoint: Option<f32>,
    pub desktop: Option<LayoutOverrides>,
    pub mobile: Option<LayoutOverrides>,
}

/// 只覆寫有設定的欄位，其餘沿用該裝置類型的預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutOverrides {
    pub tile_width: Option<f32>,
    pub tile_height: Option<f32>,
    pub gap: Option<f32>,
    pub depth_step: Option<f32>,
    pub scale_step: Option<f32>,
    pub opacity_step: Option<f32>,
    pub visible_range: Option<u32>,
    pub hidden_scale: Option<f32>,
}

impl LayoutOverrides {
    pub fn apply(&self, base: LayoutParams) -> LayoutParams {
        LayoutParams {
            tile_width: self.tile_width.unwrap_or(base.tile_width),
            tile_height: self.tile_height.unwrap_or(base.tile_height),
            gap: self.gap.unwrap_or(base.gap),
            depth_step: self.depth_step.unwrap_or(base.depth_step),
            scale_step: self.scale_step.unwrap_or(base.scale_step),
            opacity_step: self.opacity_step.unwrap_or(base.opacity_step),
            visible_range: self.visible_range.unwrap_or(base.visible_range),
            hidden_scale: self.hidden_scale.or(base.hidden_scale),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub swipe_threshold: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn carousel_settings(&self) -> CarouselSettings {
        let defaults = CarouselSettings::default();
        let overrides = &self.carousel;
        CarouselSettings {
            initial_index: overrides.initial_index.unwrap_or(defaults.initial_index),
            mobile_breakpoint: overrides
                .mobile_breakpoint
                .unwrap_or(defaults.mobile_breakpoint),
            desktop: overrides
                .desktop
                .as_ref()
                .map(|o| o.apply(defaults.desktop))
                .unwrap_or(defaults.desktop),
            mobile: overrides
                .mobile
                .as_ref()
                .map(|o| o.apply(defaults.mobile))
                .unwrap_or(defaults.mobile),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_content_base("content.base", &self.content.base)?;
        validate_non_empty_string("content.blog_dir", &self.content.paths.blog_dir)?;
        validate_non_empty_string("content.blog_index", &self.content.paths.blog_index)?;

        let carousel = self.carousel_settings();
        validate_range(
            "carousel.initial_index",
            carousel.initial_index,
            0,
            TILES.len() - 1,
        )?;
        validate_positive("carousel.mobile_breakpoint", carousel.mobile_breakpoint)?;

        for (name, params) in [("desktop", &carousel.desktop), ("mobile", &carousel.mobile)] {
            validate_positive(&format!("carousel.{}.tile_width", name), params.tile_width)?;
            validate_positive(&format!("carousel.{}.tile_height", name), params.tile_height)?;
            validate_range(
                &format!("carousel.{}.scale_step", name),
                params.scale_step,
                0.0,
                1.0,
            )?;
            validate_range(
                &format!("carousel.{}.opacity_step", name),
                params.opacity_step,
                0.0,
                1.0,
            )?;
        }

        validate_positive("input.swipe_threshold", self.input.swipe_threshold)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn content_base(&self) -> &str {
        &self.content.base
    }

    fn content_paths(&self) -> ContentPaths {
        self.content.paths.clone()
    }

    fn carousel(&self) -> CarouselSettings {
        self.carousel_settings()
    }

    fn timing(&self) -> TimingSettings {
        self.timing
    }

    fn swipe_threshold(&self) -> f32 {
        self.input.swipe_threshold
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
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.content.base, ".");
        assert_eq!(config.content.paths, ContentPaths::default());
        assert_eq!(config.carousel_settings(), CarouselSettings::default());
        assert_eq!(config.timing.hover_delay_ms, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[content]
base = "https://me.dev"
blog_dir = "posts"

[carousel]
initial_index = 0

[carousel.mobile]
tile_width = 200.0

[timing]
open_delay_ms = 0

[input]
swipe_threshold = 30.0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.content_base(), "https://me.dev");
        assert_eq!(config.content_paths().blog_index_path(), "posts/index.json");
        assert_eq!(config.content_paths().projects, "projects.json");

        let carousel = config.carousel();
        assert_eq!(carousel.initial_index, 0);
        assert_eq!(carousel.mobile.tile_width, 200.0);
        // 未覆寫的欄位沿用行動版預設值
        assert_eq!(carousel.mobile.gap, LayoutParams::mobile().gap);
        assert_eq!(carousel.desktop, LayoutParams::desktop());

        assert_eq!(config.timing().open_delay_ms, 0);
        assert_eq!(config.timing().hover_delay_ms, 200);
        assert_eq!(config.swipe_threshold(), 30.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FOLIO_TEST_SITE_URL", "https://test.example.com");

        let toml_content = r#"
[content]
base = "${FOLIO_TEST_SITE_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.content.base, "https://test.example.com");

        std::env::remove_var("FOLIO_TEST_SITE_URL");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[carousel]\ninitial_index = 7\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[content]\nbase = \"ftp://x\"\n").unwrap();
        // ftp 不是遠端網址，會被當成路徑
        assert!(config.validate().is_ok());

        let config = TomlConfig::from_toml_str("[content]\nbase = \"https://\"\n").unwrap();
        assert!(config.validate().is_err());

        let config =
            TomlConfig::from_toml_str("[carousel.desktop]\nscale_step = 2.0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[content\nbase = 1").unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[content]\nbase = \"./site\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.content.base, "./site");
    }
}
