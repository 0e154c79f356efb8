//! # Store Error 模块
//!
//! 定义设置存储相关的错误类型。

use thiserror::Error;

/// 设置存储错误
#[derive(Error, Debug)]
pub enum StoreError {
    /// 存储文件读取失败
    #[error("读取设置存储失败: {path} - {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 存储文件写入失败
    #[error("写入设置存储失败: {path} - {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 存储文件格式无效
    #[error("设置存储格式无效: {path} - {message}")]
    InvalidFormat { path: String, message: String },

    /// 设置项编码失败
    #[error("设置项 '{key}' 编码失败: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
