//! # Error 模块
//!
//! 定义 scroll-runtime 中使用的错误类型。
//!
//! 领域路径本身不产生错误：未知动画类型、空行等情况都是"静默跳过"，
//! 通过 [`Diagnostic`](crate::diagnostic::Diagnostic) 报告。这里只覆盖输出阶段的失败。

use thiserror::Error;

/// 脚本/配置输出错误
#[derive(Error, Debug)]
pub enum EmitError {
    /// 指令列表 JSON 编码失败
    #[error("动画配置序列化失败: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result 类型别名
pub type EmitResult<T> = Result<T, EmitError>;
