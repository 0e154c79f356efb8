//! # Preset 模块
//!
//! 动画类型与初始状态属性包（preset bag）的静态映射。
//! 这是所有动画类型名称、默认参数的**唯一来源**。
//!
//! 属性包描述的是元素动画的**起始状态**：动画库的 `from` 语义会先把元素设为
//! 这些值，再补间回元素的自然状态。

use serde::{Deserialize, Serialize};

/// 动画类型
///
/// 名称大小写敏感，与存储数据中的 `type` 字段一一对应。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationType {
    FadeIn,
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    ScaleIn,
    ZoomIn,
    RotateIn,
    FlipIn,
}

impl AnimationType {
    /// 全部动画类型（后台下拉框顺序）
    pub const ALL: [AnimationType; 13] = [
        Self::FadeIn,
        Self::FadeUp,
        Self::FadeDown,
        Self::FadeLeft,
        Self::FadeRight,
        Self::SlideUp,
        Self::SlideDown,
        Self::SlideLeft,
        Self::SlideRight,
        Self::ScaleIn,
        Self::ZoomIn,
        Self::RotateIn,
        Self::FlipIn,
    ];

    /// 按名称查找，未知名称返回 `None`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    /// 存储/传输使用的名称
    pub fn name(self) -> &'static str {
        match self {
            Self::FadeIn => "fadeIn",
            Self::FadeUp => "fadeUp",
            Self::FadeDown => "fadeDown",
            Self::FadeLeft => "fadeLeft",
            Self::FadeRight => "fadeRight",
            Self::SlideUp => "slideUp",
            Self::SlideDown => "slideDown",
            Self::SlideLeft => "slideLeft",
            Self::SlideRight => "slideRight",
            Self::ScaleIn => "scaleIn",
            Self::ZoomIn => "zoomIn",
            Self::RotateIn => "rotateIn",
            Self::FlipIn => "flipIn",
        }
    }

    /// 后台显示名称
    pub fn label(self) -> &'static str {
        match self {
            Self::FadeIn => "Fade In",
            Self::FadeUp => "Fade Up",
            Self::FadeDown => "Fade Down",
            Self::FadeLeft => "Fade Left",
            Self::FadeRight => "Fade Right",
            Self::SlideUp => "Slide Up",
            Self::SlideDown => "Slide Down",
            Self::SlideLeft => "Slide Left",
            Self::SlideRight => "Slide Right",
            Self::ScaleIn => "Scale In",
            Self::ZoomIn => "Zoom In",
            Self::RotateIn => "Rotate In",
            Self::FlipIn => "Flip In",
        }
    }

    /// 该类型的初始状态属性包
    pub fn preset(self) -> PresetBag {
        let hidden = PresetBag {
            opacity: Some(0.0),
            ..PresetBag::default()
        };

        match self {
            Self::FadeIn => hidden,
            Self::FadeUp => hidden.with_y(defaults::FADE_DISTANCE),
            Self::FadeDown => hidden.with_y(-defaults::FADE_DISTANCE),
            Self::FadeLeft => hidden.with_x(defaults::FADE_DISTANCE),
            Self::FadeRight => hidden.with_x(-defaults::FADE_DISTANCE),
            Self::SlideUp => hidden.with_y(defaults::SLIDE_DISTANCE),
            Self::SlideDown => hidden.with_y(-defaults::SLIDE_DISTANCE),
            Self::SlideLeft => hidden.with_x(defaults::SLIDE_DISTANCE),
            Self::SlideRight => hidden.with_x(-defaults::SLIDE_DISTANCE),
            Self::ScaleIn => PresetBag {
                scale: Some(0.8),
                ..hidden
            },
            Self::ZoomIn => PresetBag {
                scale: Some(1.2),
                ..hidden
            },
            Self::RotateIn => PresetBag {
                rotation: Some(180.0),
                ..hidden
            },
            Self::FlipIn => PresetBag {
                rotation_y: Some(90.0),
                ..hidden
            },
        }
    }
}

impl std::fmt::Display for AnimationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 按名称查找预设属性包
///
/// 未知名称返回 `None`，调用方应静默丢弃对应指令。
pub fn lookup(name: &str) -> Option<PresetBag> {
    AnimationType::from_name(name).map(AnimationType::preset)
}

/// 初始状态属性包
///
/// 未设置的属性不会出现在序列化结果中。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetBag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(
        default,
        rename = "rotationY",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_y: Option<f64>,
}

impl PresetBag {
    fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }
}

/// 指令字段的默认值与约束
///
/// 任何需要默认时长/缓动的地方都应使用这些常量，而非硬编码数字。
pub mod defaults {
    /// 默认动画类型（表单缺失类型字段时）
    pub const ANIMATION_TYPE: &str = "fadeIn";
    /// 默认时长（秒）
    pub const DURATION: f64 = 1.0;
    /// 最小时长（秒），保存时钳制
    pub const MIN_DURATION: f64 = 0.1;
    /// 默认延迟（秒）
    pub const DELAY: f64 = 0.0;
    /// 默认缓动曲线
    pub const EASING: &str = "power1.out";
    /// fade* 系列位移距离
    pub const FADE_DISTANCE: f64 = 60.0;
    /// slide* 系列位移距离
    pub const SLIDE_DISTANCE: f64 = 100.0;
}

/// 后台可选的缓动曲线 `(值, 显示名称)`
pub const EASING_CHOICES: [(&str, &str); 6] = [
    ("power1.out", "Power1 Out"),
    ("power2.out", "Power2 Out"),
    ("power3.out", "Power3 Out"),
    ("back.out", "Back Out"),
    ("elastic.out", "Elastic Out"),
    ("bounce.out", "Bounce Out"),
];
