//! # Admin 模块
//!
//! 后台设置表单的提交处理。
//!
//! 表单以并行数组提交每一行的 target / type / duration / delay / easing，
//! 外加一个 class 动画复选框。CSRF 校验与权限检查由宿主 CMS 完成，
//! 到达这里的提交都视为已通过校验。

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use scroll_runtime::{AdminView, SAVED_NOTICE, ScrollSettings, SubmittedRows};

use crate::store::{SettingsStore, StoreError, load_settings, save_settings};

/// 后台表单提交
///
/// 字段名同时接受 `animation_id` 与 PHP 风格的 `animation_id[]`。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormSubmission {
    #[serde(default, alias = "animation_id[]", deserialize_with = "lenient_strings")]
    pub animation_id: Vec<String>,

    #[serde(default, alias = "animation_type[]", deserialize_with = "lenient_strings")]
    pub animation_type: Vec<String>,

    #[serde(
        default,
        alias = "animation_duration[]",
        deserialize_with = "lenient_strings"
    )]
    pub animation_duration: Vec<String>,

    #[serde(default, alias = "animation_delay[]", deserialize_with = "lenient_strings")]
    pub animation_delay: Vec<String>,

    #[serde(
        default,
        alias = "animation_easing[]",
        deserialize_with = "lenient_strings"
    )]
    pub animation_easing: Vec<String>,

    /// 复选框：存在即为勾选，值无关
    #[serde(default)]
    pub class_based_enabled: Option<Value>,
}

impl FormSubmission {
    /// 转换为 runtime 的行数据
    pub fn rows(&self) -> SubmittedRows {
        SubmittedRows {
            targets: self.animation_id.clone(),
            types: self.animation_type.clone(),
            durations: self.animation_duration.clone(),
            delays: self.animation_delay.clone(),
            easings: self.animation_easing.clone(),
        }
    }

    /// 复选框是否勾选
    pub fn class_based_checked(&self) -> bool {
        self.class_based_enabled.is_some()
    }
}

/// 表单值可能是字符串、数字或 null
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .map(|value| match value {
            Value::String(text) => text,
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect())
}

/// 处理一次表单提交
///
/// 清洗所有行后整体覆盖存储中的设置。返回保存后的设置，调用方在成功后
/// 展示 [`SAVED_NOTICE`]。
pub fn handle_submission<S: SettingsStore + ?Sized>(
    store: &mut S,
    submission: &FormSubmission,
) -> Result<ScrollSettings, StoreError> {
    let rows = submission.rows();
    let settings = ScrollSettings::from_submission(&rows, submission.class_based_checked());

    let dropped = rows.targets.len().saturating_sub(settings.directives.len());
    if dropped > 0 {
        tracing::debug!(dropped, "丢弃 target 为空的行");
    }

    save_settings(store, &settings)?;
    tracing::info!(notice = SAVED_NOTICE, "后台设置已提交");
    Ok(settings)
}

/// 设置页视图
pub fn admin_view<S: SettingsStore + ?Sized>(store: &S) -> AdminView {
    AdminView::new(&load_settings(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use scroll_runtime::AnimationDirective;
    use serde_json::json;

    fn submission(value: Value) -> FormSubmission {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_form_field_aliases() {
        let form = submission(json!({
            "animation_id[]": ["hero"],
            "animation_type[]": ["fadeUp"],
            "animation_duration[]": [1.2],
            "animation_delay[]": ["0.3"],
            "animation_easing[]": ["power2.out"],
            "class_based_enabled": "1"
        }));

        assert_eq!(form.animation_id, ["hero"]);
        assert_eq!(form.animation_duration, ["1.2"]);
        assert!(form.class_based_checked());
    }

    #[test]
    fn test_unchecked_box_is_absent() {
        let form = submission(json!({ "animation_id": ["hero"] }));
        assert!(!form.class_based_checked());
        assert!(form.animation_type.is_empty());

        let form = submission(json!({ "class_based_enabled": null }));
        assert!(!form.class_based_checked());
    }

    #[test]
    fn test_handle_submission_saves_sanitized_rows() {
        let mut store = MemoryStore::new();
        let form = submission(json!({
            "animation_id": ["hero", "", "foot er"],
            "animation_type": ["fadeUp", "fadeIn", "zoomIn"],
            "animation_duration": ["1.2", "1", "0"],
            "animation_delay": ["0.3", "0", "-2"],
            "animation_easing": ["power2.out", "power1.out", "back.out"]
        }));

        let settings = handle_submission(&mut store, &form).unwrap();
        assert!(!settings.class_based_enabled);
        assert_eq!(
            settings.directives,
            vec![
                AnimationDirective::new("hero", "fadeUp")
                    .with_duration(1.2)
                    .with_delay(0.3)
                    .with_easing("power2.out"),
                AnimationDirective::new("footer", "zoomIn")
                    .with_duration(0.1)
                    .with_delay(0.0)
                    .with_easing("back.out"),
            ]
        );
        assert_eq!(load_settings(&store), settings);
    }

    #[test]
    fn test_submission_replaces_previous_settings() {
        let mut store = MemoryStore::new();
        handle_submission(
            &mut store,
            &submission(json!({ "animation_id": ["hero"], "class_based_enabled": "on" })),
        )
        .unwrap();

        let settings = handle_submission(&mut store, &FormSubmission::default()).unwrap();
        assert_eq!(settings, ScrollSettings::default());
        assert_eq!(load_settings(&store), ScrollSettings::default());
    }

    #[test]
    fn test_admin_view_from_store() {
        let mut store = MemoryStore::new();
        assert_eq!(admin_view(&store).rows, vec![AnimationDirective::blank()]);

        handle_submission(
            &mut store,
            &submission(json!({ "animation_id": ["hero"], "animation_type": ["flipIn"] })),
        )
        .unwrap();

        let view = admin_view(&store);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].target, "hero");
        assert_eq!(view.rows[0].animation_type, "flipIn");
    }
}
