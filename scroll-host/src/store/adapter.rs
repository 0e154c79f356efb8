//! 存储键 ↔ [`ScrollSettings`] 的读写适配。
//!
//! 这是唯一接触存储键名的地方。

use serde_json::Value;

use scroll_runtime::{AnimationDirective, ScrollSettings};

use super::{SettingsStore, StoreError};

/// ID 指令列表
pub const DIRECTIVES_KEY: &str = "gsap_scroll_animations";
/// class 动画开关
pub const CLASS_BASED_KEY: &str = "gsap_scroll_animations_class_based_enabled";

/// 读取设置
///
/// 键不存在时使用默认值（空列表 / `false`）。无法解析的单条记录会被跳过并记录警告，
/// 不影响其他记录。
pub fn load_settings<S: SettingsStore + ?Sized>(store: &S) -> ScrollSettings {
    let directives = match store.get(DIRECTIVES_KEY) {
        Some(Value::Array(records)) => decode_directives(records),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            tracing::warn!(key = DIRECTIVES_KEY, value = %other, "指令列表不是数组，按空列表处理");
            Vec::new()
        }
    };

    let class_based_enabled = store
        .get(CLASS_BASED_KEY)
        .is_some_and(|value| truthy(&value));

    ScrollSettings::new(directives, class_based_enabled)
}

/// 保存设置
pub fn save_settings<S: SettingsStore + ?Sized>(
    store: &mut S,
    settings: &ScrollSettings,
) -> Result<(), StoreError> {
    let directives =
        serde_json::to_value(&settings.directives).map_err(|source| StoreError::Encode {
            key: DIRECTIVES_KEY.to_string(),
            source,
        })?;

    store.set(DIRECTIVES_KEY, directives)?;
    store.set(CLASS_BASED_KEY, Value::Bool(settings.class_based_enabled))?;

    tracing::info!(
        directives = settings.directives.len(),
        class_based = settings.class_based_enabled,
        "设置已保存"
    );
    Ok(())
}

fn decode_directives(records: Vec<Value>) -> Vec<AnimationDirective> {
    records
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, record)| match serde_json::from_value::<AnimationDirective>(record) {
                Ok(directive) => Some(directive),
                Err(e) => {
                    tracing::warn!(index, error = %e, "跳过无法解析的指令记录");
                    None
                }
            },
        )
        .collect()
}

/// 旧数据中的开关可能是布尔值、数字或 `"1"` 之类的字符串
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !matches!(text.trim(), "" | "0" | "false"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_missing_keys_use_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_settings(&store), ScrollSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let settings = ScrollSettings::new(
            vec![
                AnimationDirective::new("hero", "fadeUp").with_delay(0.3),
                AnimationDirective::blank(),
            ],
            true,
        );

        save_settings(&mut store, &settings).unwrap();
        assert_eq!(store.get(CLASS_BASED_KEY), Some(json!(true)));
        assert_eq!(load_settings(&store), settings);
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let mut store = MemoryStore::new();
        store
            .set(
                DIRECTIVES_KEY,
                json!([
                    { "id": "hero", "type": "fadeIn" },
                    "not a record",
                    { "id": "footer", "type": "zoomIn", "duration": "2" }
                ]),
            )
            .unwrap();

        let settings = load_settings(&store);
        let targets: Vec<_> = settings.directives.iter().map(|d| d.target.as_str()).collect();
        assert_eq!(targets, ["hero", "footer"]);
        assert_eq!(settings.directives[1].duration, 2.0);
    }

    #[test]
    fn test_legacy_flag_values() {
        let mut store = MemoryStore::new();
        for (value, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!("1"), true),
            (json!(""), false),
            (json!(1), true),
            (json!(0), false),
            (json!(null), false),
        ] {
            store.set(CLASS_BASED_KEY, value.clone()).unwrap();
            assert_eq!(load_settings(&store).class_based_enabled, expected, "{value}");
        }
    }

    #[test]
    fn test_non_array_directives() {
        let mut store = MemoryStore::new();
        store.set(DIRECTIVES_KEY, json!("")).unwrap();
        assert!(load_settings(&store).directives.is_empty());
    }
}
