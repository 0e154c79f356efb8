//! # Scroll Runtime
//!
//! 滚动动画配置桥接的核心库。
//!
//! ## 架构概述
//!
//! `scroll-runtime` 是纯逻辑核心，不依赖任何 IO 或存储。
//! 宿主层（Host）负责读写设置存储，并把 [`ScrollSettings`] 显式传入渲染路径：
//!
//! ```text
//! Host                                   Runtime
//!   │                                       │
//!   │──── SubmittedRows ──────────────────►│ sanitize_rows()
//!   │◄─── Vec<AnimationDirective> ─────────│
//!   │                                       │
//!   │──── ScrollSettings + PageView ──────►│ render_page()
//!   │◄─── RenderedPage (assets, scripts) ──│
//! ```
//!
//! ## 模块结构
//!
//! - [`preset`]：动画类型与初始状态属性包
//! - [`directive`]：动画指令与持久化格式
//! - [`sanitize`]：表单行清洗
//! - [`serialize`]：指令序列化
//! - [`gate`]：动画库加载门控
//! - [`emit`]：资源与脚本输出
//! - [`admin`]：后台设置页视图模型
//! - [`diagnostic`]：被跳过指令的诊断信息
//! - [`error`]：错误类型定义

pub mod admin;
pub mod diagnostic;
pub mod directive;
pub mod emit;
pub mod error;
pub mod gate;
pub mod preset;
pub mod sanitize;
pub mod serialize;
pub mod settings;

// 重导出核心类型
pub use admin::{AdminView, SAVED_NOTICE, SelectOption};
pub use diagnostic::{Diagnostic, DiagnosticLevel, SkipReason};
pub use directive::AnimationDirective;
pub use emit::{CATALOGUE, Category, ClassRecipe, PageAsset, RenderedPage, render_page};
pub use error::{EmitError, EmitResult};
pub use gate::{CLASS_MARKER, PageView, should_activate};
pub use preset::{AnimationType, PresetBag};
pub use sanitize::{SubmittedRows, sanitize_rows};
pub use serialize::{SerializedDirective, SerializedDirectives, serialize_directives};
pub use settings::{LibraryAssets, ScrollSettings};
