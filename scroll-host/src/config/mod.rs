//! # Config 模块
//!
//! 宿主配置管理，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (scroll-host.json)
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use scroll_runtime::LibraryAssets;

/// 宿主配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// 设置存储文件路径
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,

    /// 动画库资源
    #[serde(default)]
    pub library: LibraryAssets,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别：trace / debug / info / warn / error
    #[serde(default = "default_log_level")]
    pub level: String,
}

// 默认值函数
fn default_settings_path() -> PathBuf {
    PathBuf::from("settings.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            library: LibraryAssets::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl HostConfig {
    /// 加载配置文件
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 加载配置文件，失败时回落为默认配置
    ///
    /// 日志系统在配置加载之后才初始化，因此错误随结果一起返回，由调用方在
    /// 初始化日志后记录。
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::try_load(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, json).map_err(ConfigError::Io)?;
        Ok(())
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.settings_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "settings_path 不能为空".to_string(),
            ));
        }

        if self.library.version.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "library.version 不能为空".to_string(),
            ));
        }

        if self.library.cdn_base.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "library.cdn_base 不能为空".to_string(),
            ));
        }

        if parse_level(&self.log.level).is_none() {
            return Err(ConfigError::ValidationFailed(format!(
                "未知日志级别: {}",
                self.log.level
            )));
        }

        Ok(())
    }

    /// 配置的日志级别，无法识别时为 `INFO`
    pub fn log_level(&self) -> tracing::Level {
        parse_level(&self.log.level).unwrap_or(tracing::Level::INFO)
    }
}

fn parse_level(level: &str) -> Option<tracing::Level> {
    level.trim().parse().ok()
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件不存在
    #[error("配置文件不存在: {0:?}")]
    NotFound(PathBuf),
    /// 读取失败
    #[error("配置文件读取失败: {path:?} - {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 解析失败
    #[error("配置文件解析失败: {path:?} - {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// 序列化失败
    #[error("配置序列化失败: {0}")]
    Serialize(#[source] serde_json::Error),
    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    Io(#[source] std::io::Error),
    /// 验证失败
    #[error("配置验证失败: {0}")]
    ValidationFailed(String),
}
