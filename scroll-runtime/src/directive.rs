//! # Directive 模块
//!
//! 后台配置的一行动画指令，以及持久化格式。
//!
//! ## 持久化格式
//!
//! 与既有存储数据兼容：
//!
//! ```text
//! [{ "id": "hero", "type": "fadeUp", "duration": 1.2, "delay": 0.3, "easing": "power2.out" }]
//! ```
//!
//! 旧数据中的数字可能以字符串形式保存，字段也可能缺失；读取时统一回落到默认值。

use serde::{Deserialize, Deserializer, Serialize};

use crate::preset::defaults;

/// 动画指令
///
/// 存储层可能包含空 `target` / `animation_type` 的模板行，
/// 这些行只在渲染时过滤，保存时保留。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDirective {
    /// DOM 元素 ID（不含 `#`）
    #[serde(rename = "id", default)]
    pub target: String,
    /// 动画类型名称
    #[serde(rename = "type", default)]
    pub animation_type: String,
    /// 时长（秒）
    #[serde(default = "default_duration", deserialize_with = "lenient_duration")]
    pub duration: f64,
    /// 延迟（秒）
    #[serde(default, deserialize_with = "lenient_delay")]
    pub delay: f64,
    /// 缓动曲线名称
    #[serde(default = "default_easing")]
    pub easing: String,
}

impl AnimationDirective {
    /// 创建使用默认时序的指令
    pub fn new(target: impl Into<String>, animation_type: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            animation_type: animation_type.into(),
            duration: defaults::DURATION,
            delay: defaults::DELAY,
            easing: defaults::EASING.to_string(),
        }
    }

    /// 后台空白模板行
    pub fn blank() -> Self {
        Self::new("", defaults::ANIMATION_TYPE)
    }

    /// 设置时长
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// 设置延迟
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// 设置缓动
    pub fn with_easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = easing.into();
        self
    }

    /// 是否为空白行（缺少 target 或类型）
    pub fn is_blank(&self) -> bool {
        self.target.is_empty() || self.animation_type.is_empty()
    }
}

fn default_duration() -> f64 {
    defaults::DURATION
}

fn default_easing() -> String {
    defaults::EASING.to_string()
}

/// 存储中的数字字段：JSON 数字或数字字符串
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredNumber {
    Number(f64),
    Text(String),
    Missing(()),
}

impl StoredNumber {
    fn resolve(self, fallback: f64) -> f64 {
        match self {
            Self::Number(value) if value.is_finite() => value,
            Self::Text(text) => crate::sanitize::parse_float(&text).unwrap_or(fallback),
            _ => fallback,
        }
    }
}

fn lenient_duration<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(StoredNumber::deserialize(deserializer)?.resolve(defaults::DURATION))
}

fn lenient_delay<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(StoredNumber::deserialize(deserializer)?.resolve(defaults::DELAY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_layout() {
        let directive = AnimationDirective::new("hero", "fadeUp")
            .with_duration(1.2)
            .with_delay(0.3)
            .with_easing("power2.out");

        let json = serde_json::to_value(&directive).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "hero",
                "type": "fadeUp",
                "duration": 1.2,
                "delay": 0.3,
                "easing": "power2.out"
            })
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let directive: AnimationDirective = serde_json::from_str(r#"{ "id": "intro" }"#).unwrap();
        assert_eq!(directive.target, "intro");
        assert_eq!(directive.animation_type, "");
        assert_eq!(directive.duration, 1.0);
        assert_eq!(directive.delay, 0.0);
        assert_eq!(directive.easing, "power1.out");
        assert!(directive.is_blank());
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let directive: AnimationDirective = serde_json::from_str(
            r#"{ "id": "a", "type": "fadeIn", "duration": "2.5", "delay": "abc" }"#,
        )
        .unwrap();
        assert_eq!(directive.duration, 2.5);
        assert_eq!(directive.delay, 0.0);

        let directive: AnimationDirective =
            serde_json::from_str(r#"{ "id": "a", "type": "fadeIn", "duration": null }"#).unwrap();
        assert_eq!(directive.duration, 1.0);
    }

    #[test]
    fn test_blank_row() {
        let blank = AnimationDirective::blank();
        assert!(blank.is_blank());
        assert_eq!(blank.animation_type, "fadeIn");
    }
}
