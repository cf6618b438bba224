//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::display::DEFAULT_VISIBLE_CHARS;
use crate::infrastructure::i18n::{Language, StaticLocalizer};

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

/// 地址展示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// 短地址首尾显示的字符数
    pub visible_chars: usize,
}

/// 语言配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    pub language: Language,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            visible_chars: std::env::var("ADDRESS_VISIBLE_CHARS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_VISIBLE_CHARS),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: std::env::var("APP_LANGUAGE")
                .map(|s| Language::parse(&s))
                .unwrap_or_default(),
        }
    }
}

impl I18nConfig {
    pub fn localizer(&self) -> StaticLocalizer {
        StaticLocalizer::new(self.language)
    }
}

impl Config {
    /// 从环境变量加载配置（会先读取 .env）
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            logging: LoggingConfig::default(),
            display: DisplayConfig::default(),
            i18n: I18nConfig::default(),
        })
    }

    /// 从配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高）
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        // 短地址窗口超过 20 字节地址本身就没有意义
        if self.display.visible_chars == 0 || self.display.visible_chars > 20 {
            anyhow::bail!("ADDRESS_VISIBLE_CHARS must be between 1 and 20");
        }

        Ok(())
    }
}
