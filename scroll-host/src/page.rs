//! 页面渲染入口
//!
//! 从存储读出设置后交给 runtime 渲染，并把诊断写入日志。

use scroll_runtime::{
    Diagnostic, DiagnosticLevel, EmitResult, LibraryAssets, PageView, RenderedPage, render_page,
};

use crate::store::{SettingsStore, load_settings};

/// 渲染一次页面访问
pub fn render_for_store<S: SettingsStore + ?Sized>(
    store: &S,
    library: &LibraryAssets,
    page: &PageView,
) -> EmitResult<RenderedPage> {
    let settings = load_settings(store);
    let rendered = render_page(&settings, library, page)?;

    log_diagnostics(&rendered.diagnostics);
    tracing::debug!(
        active = rendered.is_active(),
        id_script = rendered.id_script.is_some(),
        class_script = rendered.class_script.is_some(),
        "页面渲染完成"
    );

    Ok(rendered)
}

/// 按级别记录诊断
pub fn log_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        match diagnostic.level() {
            DiagnosticLevel::Info => tracing::debug!(
                index = diagnostic.index,
                target = %diagnostic.target,
                "跳过指令: {}",
                diagnostic.reason
            ),
            DiagnosticLevel::Warn => tracing::warn!(
                index = diagnostic.index,
                target = %diagnostic.target,
                "跳过指令: {}",
                diagnostic.reason
            ),
        }
    }
}
