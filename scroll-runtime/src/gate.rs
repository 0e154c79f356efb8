//! # Gate 模块
//!
//! 加载门控：决定一次页面访问是否需要加载动画库。
//!
//! 没有任何动画需求的页面不加载第三方动画运行时，这是整个系统最主要的性能优化点。

use crate::serialize::SerializedDirectives;
use crate::settings::ScrollSettings;

/// class 动画标记子串
///
/// 页面内容包含该子串时才认为页面使用了 class 动画。
pub const CLASS_MARKER: &str = "gsap-";

/// 当前页面视图
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    /// 是否为单篇内容页
    pub singular: bool,
    /// 页面原始内容（非单篇页或不可用时为 `None`）
    pub content: Option<String>,
}

impl PageView {
    /// 单篇内容页
    pub fn singular(content: impl Into<String>) -> Self {
        Self {
            singular: true,
            content: Some(content.into()),
        }
    }

    /// 列表/归档等非单篇页
    pub fn listing() -> Self {
        Self::default()
    }

    /// 页面内容是否包含 class 动画标记
    pub fn has_class_marker(&self) -> bool {
        self.content
            .as_deref()
            .is_some_and(|content| content.contains(CLASS_MARKER))
    }
}

/// class 动画脚本是否适用于该页面（不含 ID 指令条件）
pub fn class_animations_apply(settings: &ScrollSettings, page: &PageView) -> bool {
    settings.class_based_enabled && page.singular && page.has_class_marker()
}

/// 是否需要加载动画库
///
/// 满足任一条件即为 `true`：
/// - 过滤后的 ID 指令列表非空
/// - 启用了 class 动画，当前是单篇页，且内容包含 [`CLASS_MARKER`]
pub fn should_activate(
    serialized: &SerializedDirectives,
    settings: &ScrollSettings,
    page: &PageView,
) -> bool {
    !serialized.is_empty() || class_animations_apply(settings, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::AnimationDirective;
    use crate::serialize::serialize_directives;

    fn gate(settings: &ScrollSettings, page: &PageView) -> bool {
        should_activate(&serialize_directives(&settings.directives), settings, page)
    }

    #[test]
    fn test_nothing_configured() {
        let settings = ScrollSettings::default();
        assert!(!gate(&settings, &PageView::singular("<div class=\"gsap-fade\">")));
        assert!(!gate(&settings, &PageView::listing()));
    }

    #[test]
    fn test_directives_activate_everywhere() {
        let settings = ScrollSettings::new(vec![AnimationDirective::new("hero", "fadeIn")], false);
        assert!(gate(&settings, &PageView::listing()));
        assert!(gate(&settings, &PageView::singular("plain text")));
    }

    #[test]
    fn test_blank_directives_do_not_activate() {
        let settings = ScrollSettings::new(
            vec![
                AnimationDirective::blank(),
                AnimationDirective::new("hero", "wobble"),
            ],
            false,
        );
        assert!(!gate(&settings, &PageView::listing()));
    }

    #[test]
    fn test_class_marker() {
        let settings = ScrollSettings::new(Vec::new(), true);
        assert!(gate(
            &settings,
            &PageView::singular("<div class=\"gsap-fade-up\">Hi</div>")
        ));
        assert!(!gate(&settings, &PageView::singular("<div class=\"fade-up\">")));
        // 非单篇页不扫描内容
        let listing = PageView {
            singular: false,
            content: Some("gsap-parallax".to_string()),
        };
        assert!(!gate(&settings, &listing));
        assert!(!gate(
            &settings,
            &PageView {
                singular: true,
                content: None,
            }
        ));
    }

    #[test]
    fn test_class_marker_requires_flag() {
        let settings = ScrollSettings::default();
        assert!(!class_animations_apply(
            &settings,
            &PageView::singular("gsap-parallax")
        ));
    }
}
