//! # Serialize 模块
//!
//! 将存储的指令列表与预设表合并，生成客户端使用的 `{target, properties}` 记录。
//!
//! ## 处理流程
//!
//! ```text
//! AnimationDirective (from store)
//!   → 过滤空 target / 空类型
//!   → 预设表查找（未命中则丢弃）
//!   → 合并 duration / delay / ease
//!   → SerializedDirective
//! ```

use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, SkipReason};
use crate::directive::AnimationDirective;
use crate::error::EmitResult;
use crate::preset::{self, PresetBag, defaults};
use crate::sanitize::sanitize_html_class;

/// 客户端动画属性：预设属性包 + 时序参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationProperties {
    #[serde(flatten)]
    pub preset: PresetBag,
    pub duration: f64,
    /// 仅在延迟大于 0 时输出
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    pub ease: String,
}

/// 单条输出记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedDirective {
    /// DOM 元素 ID
    pub target: String,
    pub properties: AnimationProperties,
}

/// 序列化结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerializedDirectives {
    /// 有效记录（保持存储顺序）
    pub entries: Vec<SerializedDirective>,
    /// 被跳过的指令
    pub diagnostics: Vec<Diagnostic>,
}

impl SerializedDirectives {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 编码为 JSON 数组
    pub fn to_json(&self) -> EmitResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}

/// 序列化单条指令
///
/// 返回 `Err(SkipReason)` 表示该指令应被静默丢弃。
pub fn serialize_directive(directive: &AnimationDirective) -> Result<SerializedDirective, SkipReason> {
    // 旧数据可能未经清洗
    let target = sanitize_html_class(&directive.target);
    if target.is_empty() {
        return Err(SkipReason::EmptyTarget);
    }
    if directive.animation_type.is_empty() {
        return Err(SkipReason::EmptyType);
    }

    let preset = preset::lookup(&directive.animation_type)
        .ok_or_else(|| SkipReason::UnknownType(directive.animation_type.clone()))?;

    let ease = if directive.easing.is_empty() {
        defaults::EASING.to_string()
    } else {
        directive.easing.clone()
    };

    Ok(SerializedDirective {
        target,
        properties: AnimationProperties {
            preset,
            duration: directive.duration,
            delay: (directive.delay > 0.0).then_some(directive.delay),
            ease,
        },
    })
}

/// 序列化指令列表
pub fn serialize_directives(directives: &[AnimationDirective]) -> SerializedDirectives {
    let mut result = SerializedDirectives::default();

    for (index, directive) in directives.iter().enumerate() {
        match serialize_directive(directive) {
            Ok(entry) => result.entries.push(entry),
            Err(reason) => result
                .diagnostics
                .push(Diagnostic::skipped(index, directive.target.clone(), reason)),
        }
    }

    result
}
