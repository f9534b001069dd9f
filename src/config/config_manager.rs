// ==========================================
// 材料属性浏览器 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 优先级: 命令行参数 > config.json > 内置默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// 配置键（与 config.json 字段一致）
pub mod config_keys {
    pub const SOURCE_PATH: &str = "source_path";
    pub const LOCALE: &str = "locale";
    pub const LOG_FILTER: &str = "log_filter";
}

/// 默认数据文件
pub const DEFAULT_SOURCE_PATH: &str = "materials.xlsx";

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置读取失败 ({}): {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置格式错误 ({}): {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置序列化失败: {0}")]
    SnapshotError(#[from] serde_json::Error),
}

// ==========================================
// BrowserConfig - 浏览器配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub source_path: PathBuf, // 材料数据文件路径
    pub locale: String,       // 界面语言（zh-CN / en）
    pub log_filter: String,   // 日志过滤器（RUST_LOG 优先）
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            locale: "zh-CN".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: BrowserConfig,
    loaded_from: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用内置默认值
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 配置文件加载
    ///
    /// # 返回
    /// - 文件不存在: 默认配置
    /// - 文件存在但无法读取/解析: ConfigError
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self::new());
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BrowserConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "配置文件加载完成");
        Ok(Self {
            config,
            loaded_from: Some(path.to_path_buf()),
        })
    }

    /// 从用户配置目录加载（无配置目录时使用默认值）
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_config_path() {
            Some(path) => Self::load(path),
            None => Ok(Self::new()),
        }
    }

    /// 默认配置文件路径: <config_dir>/material-browser/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("material-browser").join("config.json"))
    }

    /// 应用命令行覆写
    pub fn with_overrides(mut self, source_path: Option<PathBuf>, locale: Option<String>) -> Self {
        if let Some(path) = source_path {
            self.config.source_path = path;
        }
        if let Some(locale) = locale {
            self.config.locale = locale;
        }
        self
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }

    /// 按键读取配置值（字符串形式）
    pub fn get_config_value(&self, key: &str) -> Option<String> {
        match key {
            config_keys::SOURCE_PATH => Some(self.config.source_path.display().to_string()),
            config_keys::LOCALE => Some(self.config.locale.clone()),
            config_keys::LOG_FILTER => Some(self.config.log_filter.clone()),
            _ => None,
        }
    }

    /// 获取当前配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}
