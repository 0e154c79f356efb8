//! # Settings 模块
//!
//! 渲染路径使用的显式配置结构。
//!
//! 键值存储只在宿主层的 load/save 适配器中出现，
//! runtime 内部只处理 [`ScrollSettings`]。

use serde::{Deserialize, Serialize};

use crate::directive::AnimationDirective;
use crate::sanitize::{SubmittedRows, sanitize_rows};

/// 滚动动画设置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollSettings {
    /// ID 指令列表（可能包含空白模板行）
    #[serde(default)]
    pub directives: Vec<AnimationDirective>,
    /// 是否启用 class 动画系统
    #[serde(default)]
    pub class_based_enabled: bool,
}

impl ScrollSettings {
    pub fn new(directives: Vec<AnimationDirective>, class_based_enabled: bool) -> Self {
        Self {
            directives,
            class_based_enabled,
        }
    }

    /// 由后台表单提交构造
    ///
    /// 复选框未勾选时表单中不存在该字段，调用方以 `false` 传入。
    pub fn from_submission(rows: &SubmittedRows, class_based_enabled: bool) -> Self {
        Self::new(sanitize_rows(rows), class_based_enabled)
    }
}

/// 动画库资源配置
///
/// GSAP 核心与 ScrollTrigger 插件的脚本地址，以及 class 动画样式表。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryAssets {
    /// 库版本号
    #[serde(default = "default_version")]
    pub version: String,
    /// CDN 根地址
    #[serde(default = "default_cdn_base")]
    pub cdn_base: String,
    /// class 动画样式表地址
    #[serde(default = "default_stylesheet_href")]
    pub stylesheet_href: String,
}

pub const DEFAULT_LIBRARY_VERSION: &str = "3.12.5";

fn default_version() -> String {
    DEFAULT_LIBRARY_VERSION.to_string()
}

fn default_cdn_base() -> String {
    "https://cdn.jsdelivr.net/npm".to_string()
}

fn default_stylesheet_href() -> String {
    "assets/css/gsap-scrolltrigger.css".to_string()
}

impl Default for LibraryAssets {
    fn default() -> Self {
        Self {
            version: default_version(),
            cdn_base: default_cdn_base(),
            stylesheet_href: default_stylesheet_href(),
        }
    }
}

impl LibraryAssets {
    /// GSAP 核心脚本地址
    pub fn core_src(&self) -> String {
        self.dist_url("gsap.min.js")
    }

    /// ScrollTrigger 插件脚本地址
    pub fn scroll_trigger_src(&self) -> String {
        self.dist_url("ScrollTrigger.min.js")
    }

    fn dist_url(&self, file: &str) -> String {
        format!(
            "{}/gsap@{}/dist/{}",
            self.cdn_base.trim_end_matches('/'),
            self.version,
            file
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_asset_urls() {
        let assets = LibraryAssets::default();
        assert_eq!(
            assets.core_src(),
            "https://cdn.jsdelivr.net/npm/gsap@3.12.5/dist/gsap.min.js"
        );
        assert_eq!(
            assets.scroll_trigger_src(),
            "https://cdn.jsdelivr.net/npm/gsap@3.12.5/dist/ScrollTrigger.min.js"
        );
    }

    #[test]
    fn test_cdn_base_trailing_slash() {
        let assets = LibraryAssets {
            cdn_base: "https://example.test/npm/".to_string(),
            ..LibraryAssets::default()
        };
        assert_eq!(
            assets.core_src(),
            "https://example.test/npm/gsap@3.12.5/dist/gsap.min.js"
        );
    }

    #[test]
    fn test_from_submission() {
        let mut rows = SubmittedRows::default();
        rows.push("hero", "fadeUp", "1", "0", "power1.out");
        rows.push("", "fadeIn", "1", "0", "power1.out");

        let settings = ScrollSettings::from_submission(&rows, true);
        assert_eq!(settings.directives.len(), 1);
        assert!(settings.class_based_enabled);
    }
}
