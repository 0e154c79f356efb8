//! # 诊断模块
//!
//! 渲染路径中被静默跳过的指令会记录为诊断条目，由宿主层决定是否写日志。
//!
//! ## 设计原则
//!
//! - 纯数据，不依赖 IO
//! - 跳过行为本身不变：诊断只是附带信息，不会让渲染失败

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    /// 信息提示（如空白模板行）
    Info,
    /// 警告（如未知动画类型）
    Warn,
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
        }
    }
}

/// 指令被跳过的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// target 为空（或清洗后为空）
    EmptyTarget,
    /// 动画类型为空
    EmptyType,
    /// 动画类型不在预设表中
    UnknownType(String),
}

impl SkipReason {
    /// 对应的诊断级别
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            Self::EmptyTarget | Self::EmptyType => DiagnosticLevel::Info,
            Self::UnknownType(_) => DiagnosticLevel::Warn,
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTarget => write!(f, "目标元素 ID 为空"),
            Self::EmptyType => write!(f, "动画类型为空"),
            Self::UnknownType(name) => write!(f, "未知动画类型 '{}'", name),
        }
    }
}

/// 诊断条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 指令在存储列表中的下标（从 0 开始）
    pub index: usize,
    /// 指令的 target（可能为空）
    pub target: String,
    /// 跳过原因
    pub reason: SkipReason,
}

impl Diagnostic {
    pub fn skipped(index: usize, target: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            index,
            target: target.into(),
            reason,
        }
    }

    pub fn level(&self) -> DiagnosticLevel {
        self.reason.level()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] #{}", self.level(), self.index)?;
        if !self.target.is_empty() {
            write!(f, " ({})", self.target)?;
        }
        write!(f, ": {}", self.reason)
    }
}
