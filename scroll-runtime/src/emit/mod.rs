//! # Emit 模块
//!
//! 页面渲染路径：把 [`ScrollSettings`] 转换为页面需要注入的资源与脚本。
//!
//! ## 输出内容
//!
//! ```text
//! ScrollSettings + PageView
//!   → serialize_directives()
//!   → should_activate()?  否 → 空输出
//!   → 资源：GSAP 核心、ScrollTrigger、（class 动画启用时）样式表
//!   → 脚本：ID 动画脚本（指令非空时）、class 动画脚本（页面含标记时）
//! ```

mod class_script;
mod id_script;

pub use class_script::{
    CATALOGUE, Category, ClassRecipe, DataAttribute, Fallback, MOBILE_BREAKPOINT_PX,
    RESIZE_DEBOUNCE_MS, Scope, render_class_script,
};
pub use id_script::{TOGGLE_ACTIONS, TRIGGER_START, render_id_script};

use crate::diagnostic::Diagnostic;
use crate::error::EmitResult;
use crate::gate::{PageView, class_animations_apply, should_activate};
use crate::serialize::serialize_directives;
use crate::settings::{LibraryAssets, ScrollSettings};

/// 样式表版本号
pub const STYLESHEET_VERSION: &str = "1.0.0";

/// 页面资源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAsset {
    /// 外部脚本（页脚加载）
    Script {
        handle: &'static str,
        src: String,
        version: String,
        depends_on: Option<&'static str>,
    },
    /// 样式表
    Stylesheet {
        handle: &'static str,
        href: String,
        version: String,
    },
}

impl PageAsset {
    pub fn handle(&self) -> &'static str {
        match self {
            Self::Script { handle, .. } | Self::Stylesheet { handle, .. } => *handle,
        }
    }

    fn to_html(&self) -> String {
        match self {
            Self::Script { handle, src, .. } => format!(
                r#"<script id="{}-js" src="{}"></script>"#,
                handle,
                escape_attr(src)
            ),
            Self::Stylesheet {
                handle,
                href,
                version,
            } => format!(
                r#"<link rel="stylesheet" id="{}-css" href="{}?ver={}" media="all">"#,
                handle,
                escape_attr(href),
                escape_attr(version)
            ),
        }
    }
}

/// 一次页面渲染的输出
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedPage {
    /// 需要注入的资源（门控未通过时为空）
    pub assets: Vec<PageAsset>,
    /// ID 动画脚本
    pub id_script: Option<String>,
    /// class 动画脚本
    pub class_script: Option<String>,
    /// 被跳过的指令
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderedPage {
    /// 是否加载了动画库
    pub fn is_active(&self) -> bool {
        !self.assets.is_empty()
    }

    /// 内联脚本（输出顺序）
    pub fn scripts(&self) -> impl Iterator<Item = &str> {
        self.id_script
            .as_deref()
            .into_iter()
            .chain(self.class_script.as_deref())
    }

    /// 拼接为 HTML 片段
    pub fn to_html(&self) -> String {
        let mut parts: Vec<String> = self.assets.iter().map(PageAsset::to_html).collect();
        parts.extend(
            self.scripts()
                .map(|script| format!("<script>\n{}\n</script>", script)),
        );
        parts.join("\n")
    }
}

/// 渲染页面
pub fn render_page(
    settings: &ScrollSettings,
    library: &LibraryAssets,
    page: &PageView,
) -> EmitResult<RenderedPage> {
    let serialized = serialize_directives(&settings.directives);
    let diagnostics = serialized.diagnostics.clone();

    if !should_activate(&serialized, settings, page) {
        return Ok(RenderedPage {
            diagnostics,
            ..RenderedPage::default()
        });
    }

    let mut assets = vec![
        PageAsset::Script {
            handle: "gsap",
            src: library.core_src(),
            version: library.version.clone(),
            depends_on: None,
        },
        PageAsset::Script {
            handle: "gsap-scrolltrigger",
            src: library.scroll_trigger_src(),
            version: library.version.clone(),
            depends_on: Some("gsap"),
        },
    ];
    if settings.class_based_enabled {
        assets.insert(
            0,
            PageAsset::Stylesheet {
                handle: "gsap-scrolltrigger-styles",
                href: library.stylesheet_href.clone(),
                version: STYLESHEET_VERSION.to_string(),
            },
        );
    }

    let class_script = if class_animations_apply(settings, page) {
        Some(render_class_script()?)
    } else {
        None
    };

    Ok(RenderedPage {
        assets,
        id_script: render_id_script(&serialized)?,
        class_script,
        diagnostics,
    })
}

/// 编码为 JS 字符串字面量
pub(crate) fn js_string(value: &str) -> EmitResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// 转义内联到 `<script>` 中的 JSON
///
/// `<` `>` `&` 与 U+2028/U+2029 只可能出现在 JSON 字符串内部，统一替换为 `\uXXXX`。
pub(crate) fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// 转义 HTML 属性值
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
