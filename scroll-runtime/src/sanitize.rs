//! # Sanitize 模块
//!
//! 将后台表单提交的原始行清洗为规范的 [`AnimationDirective`] 列表。
//!
//! 表单以"平行数组"的形式提交：第 `i` 行的各字段分别位于
//! `targets[i]`、`types[i]`、`durations[i]`……中，任何一列都可能比其他列短。

use serde::{Deserialize, Serialize};

use crate::directive::AnimationDirective;
use crate::preset::defaults;

/// 表单提交的原始行（平行数组）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmittedRows {
    pub targets: Vec<String>,
    pub types: Vec<String>,
    pub durations: Vec<String>,
    pub delays: Vec<String>,
    pub easings: Vec<String>,
}

impl SubmittedRows {
    /// 追加一行（测试与 CLI 使用）
    pub fn push(
        &mut self,
        target: impl Into<String>,
        animation_type: impl Into<String>,
        duration: impl Into<String>,
        delay: impl Into<String>,
        easing: impl Into<String>,
    ) {
        self.targets.push(target.into());
        self.types.push(animation_type.into());
        self.durations.push(duration.into());
        self.delays.push(delay.into());
        self.easings.push(easing.into());
    }
}

/// 清洗提交的行
///
/// - target 为空（清洗后）的行整行丢弃
/// - 缺失的类型字段回落为 `fadeIn`，缺失的缓动回落为 `power1.out`
/// - 时长缺失或无法解析时为 1，再钳制到 `>= 0.1`；延迟缺失为 0，钳制到 `>= 0`
/// - 输出保持提交顺序
pub fn sanitize_rows(rows: &SubmittedRows) -> Vec<AnimationDirective> {
    rows.targets
        .iter()
        .enumerate()
        .filter_map(|(index, raw_target)| {
            let target = sanitize_html_class(raw_target);
            if target.is_empty() {
                return None;
            }

            let animation_type = rows
                .types
                .get(index)
                .map(|t| sanitize_text_field(t))
                .unwrap_or_else(|| defaults::ANIMATION_TYPE.to_string());
            let easing = rows
                .easings
                .get(index)
                .map(|e| sanitize_text_field(e))
                .unwrap_or_else(|| defaults::EASING.to_string());
            let duration = rows
                .durations
                .get(index)
                .and_then(|d| parse_float(d))
                .unwrap_or(defaults::DURATION);
            let delay = rows
                .delays
                .get(index)
                .and_then(|d| parse_float(d))
                .unwrap_or(defaults::DELAY);

            Some(AnimationDirective {
                target,
                animation_type,
                duration: clamp_duration(duration),
                delay: clamp_delay(delay),
                easing,
            })
        })
        .collect()
}

/// 时长下限钳制
pub fn clamp_duration(duration: f64) -> f64 {
    duration.max(defaults::MIN_DURATION)
}

/// 延迟下限钳制
pub fn clamp_delay(delay: f64) -> f64 {
    delay.max(0.0)
}

/// 清洗为 HTML class/ID 安全字符串
///
/// 先去掉百分号编码的字节（`%3C` 等），再只保留 `[A-Za-z0-9_-]`。
pub fn sanitize_html_class(raw: &str) -> String {
    strip_percent_octets(raw)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// 清洗为纯文本
///
/// 去掉标签，孤立的 `<` 转义为 `&lt;`；去掉百分号编码字节；
/// 连续空白（含换行、制表符）折叠为单个空格并去除首尾空白。
pub fn sanitize_text_field(raw: &str) -> String {
    let stripped = strip_percent_octets(&strip_tags(raw));
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '<' {
            out.push(c);
            continue;
        }

        let opens_tag = chars
            .peek()
            .is_some_and(|next| next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?'));
        if !opens_tag {
            out.push_str("&lt;");
            continue;
        }

        // 未闭合的标签吞掉到结尾
        for skipped in chars.by_ref() {
            if skipped == '>' {
                break;
            }
        }
    }

    out
}

fn strip_percent_octets(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'%'
            && index + 2 < bytes.len()
            && bytes[index + 1].is_ascii_hexdigit()
            && bytes[index + 2].is_ascii_hexdigit()
        {
            index += 3;
            continue;
        }

        // 非 ASCII 字符按完整 UTF-8 序列复制
        let ch_len = raw[index..].chars().next().map_or(1, char::len_utf8);
        out.push_str(&raw[index..index + ch_len]);
        index += ch_len;
    }

    out
}

/// 解析字符串开头的浮点数
///
/// 接受前导空白、可选符号、小数与指数部分，忽略其后的任意内容（`"1.5s"` → 1.5）。
/// 没有数字前缀或结果非有限值时返回 `None`。
pub fn parse_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if frac_end > frac_start || digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
