//! # Admin 模块
//!
//! 后台设置页的视图模型。页面 HTML 由宿主 CMS 渲染，这里只提供数据：
//! 可编辑行、下拉框选项、保存成功提示。
//!
//! 行的增删是纯前端状态，不进入领域模型。

use crate::directive::AnimationDirective;
use crate::preset::{AnimationType, EASING_CHOICES};
use crate::settings::ScrollSettings;

/// 保存成功提示
pub const SAVED_NOTICE: &str = "Settings saved!";

/// 下拉框选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// 设置页视图
#[derive(Debug, Clone, PartialEq)]
pub struct AdminView {
    /// 可编辑行，至少一行
    pub rows: Vec<AnimationDirective>,
    pub class_based_enabled: bool,
}

impl AdminView {
    pub fn new(settings: &ScrollSettings) -> Self {
        Self {
            rows: editable_rows(&settings.directives),
            class_based_enabled: settings.class_based_enabled,
        }
    }
}

/// 可编辑行
///
/// 存储为空时返回一行空白模板，保证表单始终可以直接填写。
pub fn editable_rows(stored: &[AnimationDirective]) -> Vec<AnimationDirective> {
    if stored.is_empty() {
        vec![AnimationDirective::blank()]
    } else {
        stored.to_vec()
    }
}

/// 动画类型选项
pub fn animation_type_options() -> Vec<SelectOption> {
    AnimationType::ALL
        .into_iter()
        .map(|ty| SelectOption {
            value: ty.name(),
            label: ty.label(),
        })
        .collect()
}

/// 缓动选项
pub fn easing_options() -> Vec<SelectOption> {
    EASING_CHOICES
        .into_iter()
        .map(|(value, label)| SelectOption { value, label })
        .collect()
}
