//! # ID 动画脚本
//!
//! 内联序列化后的指令列表，页面加载后按元素 ID 逐条调用 `gsap.from`。
//!
//! 客户端行为：
//! - 动画库未加载或用户偏好减少动态效果时整段脚本不执行
//! - 找不到的元素静默跳过
//! - 触发点为元素顶部到达视口 80% 处，只正向播放一次

use crate::error::EmitResult;
use crate::serialize::SerializedDirectives;

use super::{escape_script_json, js_string};

/// 触发起点：元素顶部到达视口 80% 高度
pub const TRIGGER_START: &str = "top 80%";
/// 只播放一次，不反向、不重播
pub const TOGGLE_ACTIONS: &str = "play none none none";

const TEMPLATE: &str = r#"document.addEventListener('DOMContentLoaded', function() {
    if (typeof gsap === 'undefined' || window.matchMedia('(prefers-reduced-motion: reduce)').matches) {
        return;
    }

    gsap.registerPlugin(ScrollTrigger);

    var animations = @ANIMATIONS@;

    animations.forEach(function(anim) {
        var element = document.getElementById(anim.target);
        if (!element) {
            return;
        }

        var config = Object.assign({}, anim.properties);
        config.scrollTrigger = {
            trigger: element,
            start: @START@,
            toggleActions: @TOGGLE_ACTIONS@
        };
        gsap.from(element, config);
    });
});"#;

/// 生成 ID 动画脚本
///
/// 序列化结果为空时返回 `None`，调用方不应输出任何脚本（包括空数组脚本）。
pub fn render_id_script(serialized: &SerializedDirectives) -> EmitResult<Option<String>> {
    if serialized.is_empty() {
        return Ok(None);
    }

    let animations = escape_script_json(&serialized.to_json()?);
    let script = TEMPLATE
        .replace("@ANIMATIONS@", &animations)
        .replace("@START@", &js_string(TRIGGER_START)?)
        .replace("@TOGGLE_ACTIONS@", &js_string(TOGGLE_ACTIONS)?);

    Ok(Some(script))
}
