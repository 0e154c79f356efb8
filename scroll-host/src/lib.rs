//! # Scroll Host
//!
//! 滚动动画桥接的宿主层实现。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 设置存储的读写（键值 ↔ [`scroll_runtime::ScrollSettings`]）
//! - 后台表单提交处理
//! - 宿主配置加载
//! - 页面渲染入口与诊断日志
//!
//! Host 层不包含动画逻辑，清洗、序列化、门控与脚本输出都在 `scroll-runtime` 中完成。

pub mod admin;
pub mod config;
pub mod page;
pub mod store;

pub use admin::{FormSubmission, admin_view, handle_submission};
pub use config::{ConfigError, HostConfig, LogConfig};
pub use page::{log_diagnostics, render_for_store};
pub use store::{
    CLASS_BASED_KEY, DIRECTIVES_KEY, JsonFileStore, MemoryStore, SettingsStore, StoreError,
    load_settings, save_settings,
};
