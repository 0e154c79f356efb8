//! # Store 模块
//!
//! 键值设置存储。真实部署中由宿主 CMS 提供，这里定义最小接口和两个实现：
//!
//! - [`JsonFileStore`]：单个 JSON 对象文件（CLI 使用）
//! - [`MemoryStore`]：内存存储（测试使用）
//!
//! ## 文件布局
//!
//! ```text
//! settings.json
//! {
//!   "gsap_scroll_animations": [ { "id": "hero", "type": "fadeUp", ... } ],
//!   "gsap_scroll_animations_class_based_enabled": true
//! }
//! ```

mod adapter;
mod error;

pub use adapter::{CLASS_BASED_KEY, DIRECTIVES_KEY, load_settings, save_settings};
pub use error::StoreError;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// 键值设置存储
pub trait SettingsStore {
    /// 读取设置项，不存在时返回 `None`
    fn get(&self, key: &str) -> Option<Value>;

    /// 写入设置项
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// 读取设置项，不存在时返回默认值
    fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).unwrap_or(default)
    }
}

/// 内存存储
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON 文件存储
///
/// 打开时整体读入内存，每次写入都会回写整个文件。
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// 打开存储文件
    ///
    /// 文件不存在时视为空存储，首次写入时创建。
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "设置存储不存在，使用空存储");
            return Ok(Self {
                path,
                values: Map::new(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let values = if content.trim().is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(values)) => values,
                Ok(_) => {
                    return Err(StoreError::InvalidFormat {
                        path: path.display().to_string(),
                        message: "顶层必须是 JSON 对象".to_string(),
                    });
                }
                Err(e) => {
                    return Err(StoreError::InvalidFormat {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        };

        tracing::debug!(path = %path.display(), keys = values.len(), "设置存储已加载");
        Ok(Self { path, values })
    }

    /// 存储文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, key: &str) -> Result<(), StoreError> {
        let write_error = |source| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_error)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.values).map_err(|source| {
            StoreError::Encode {
                key: key.to_string(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(write_error)
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.flush(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
        assert_eq!(store.get_or("missing", json!([])), json!([]));

        store.set("flag", json!(true)).unwrap();
        assert_eq!(store.get("flag"), Some(json!(true)));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("flag"), None);
        store.set("flag", json!(true)).unwrap();
        assert!(path.exists());

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("flag"), Some(json!(true)));
    }

    #[test]
    fn test_file_store_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::InvalidFormat { .. }));
    }

    #[test]
    fn test_file_store_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("anything"), None);
    }
}
