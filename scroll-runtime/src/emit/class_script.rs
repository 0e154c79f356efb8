//! # Class 动画脚本
//!
//! 固定的 class 滚动效果目录。每个条目对应一个 CSS class，
//! 运行时通过 `gsap.utils.toArray('.class')` 自行选择元素，页面中没有对应元素时不做任何事。
//!
//! 每个元素的参数从 `data-*` 属性读取：数字属性用 `parseFloat` 解析，
//! 缺失或无法解析时使用表中的默认值。
//!
//! 目录是静态的，不受存储配置影响。

use crate::error::EmitResult;

use super::js_string;

/// 视口宽度不超过该值时，`gsap-mobile-disable` 元素的触发器会被销毁
pub const MOBILE_BREAKPOINT_PX: u32 = 768;
/// 视口尺寸变化后重新计算触发边界的防抖间隔
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// 效果分类（后台文档面板分组）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Parallax,
    Fade,
    ScaleZoom,
    Rotation,
    Pinning,
    Advanced,
    Mobile,
}

impl Category {
    pub fn title(self) -> &'static str {
        match self {
            Self::Parallax => "Parallax Effects",
            Self::Fade => "Fade Animations",
            Self::ScaleZoom => "Scale & Zoom Effects",
            Self::Rotation => "Rotation Effects",
            Self::Pinning => "Pinning & Sticky",
            Self::Advanced => "Advanced Effects",
            Self::Mobile => "Mobile Optimizations",
        }
    }
}

/// `data-*` 属性的默认值
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    /// 数字属性
    Number(f64),
    /// 文本属性（如触发起点 `'top 85%'`）
    Text(&'static str),
    /// 开关属性：除非写成 `"false"`，否则为真
    FlagUnlessFalse,
}

/// 元素级配置属性
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataAttribute {
    /// `data-` 之后的名称，同时用作脚本中的局部变量名
    pub name: &'static str,
    pub fallback: Fallback,
}

const fn number(name: &'static str, value: f64) -> DataAttribute {
    DataAttribute {
        name,
        fallback: Fallback::Number(value),
    }
}

const fn text(name: &'static str, value: &'static str) -> DataAttribute {
    DataAttribute {
        name,
        fallback: Fallback::Text(value),
    }
}

/// 效果生效范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// 始终生效
    Always,
    /// 仅在窄视口（`<= MOBILE_BREAKPOINT_PX`）下生效
    NarrowViewport,
}

/// class 效果条目
#[derive(Debug, Clone, Copy)]
pub struct ClassRecipe {
    /// CSS class 名
    pub class: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub attributes: &'static [DataAttribute],
    pub scope: Scope,
    /// 对单个元素 `elem` 执行的脚本，可引用 `attributes` 中声明的局部变量
    body: &'static str,
}

impl ClassRecipe {
    /// 按 class 名查找
    pub fn find(class: &str) -> Option<&'static ClassRecipe> {
        CATALOGUE.iter().find(|recipe| recipe.class == class)
    }
}

const FADE_ATTRIBUTES: &[DataAttribute] = &[
    number("distance", 60.0),
    number("duration", 1.0),
    number("delay", 0.0),
    text("start", "top 85%"),
];

/// class 效果目录（输出顺序）
pub const CATALOGUE: &[ClassRecipe] = &[
    ClassRecipe {
        class: "gsap-parallax",
        category: Category::Parallax,
        description: "Vertical parallax",
        attributes: &[number("speed", -5.0)],
        scope: Scope::Always,
        body: r#"
            gsap.to(elem, {
                yPercent: speed * 10,
                ease: 'none',
                scrollTrigger: {
                    trigger: elem,
                    start: 'top bottom',
                    end: 'bottom top',
                    scrub: true
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-horizontal",
        category: Category::Parallax,
        description: "Horizontal parallax",
        attributes: &[number("hspeed", 50.0)],
        scope: Scope::Always,
        body: r#"
            gsap.to(elem, {
                xPercent: hspeed,
                ease: 'none',
                scrollTrigger: {
                    trigger: elem,
                    start: 'top bottom',
                    end: 'bottom top',
                    scrub: true
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-diagonal",
        category: Category::Parallax,
        description: "Diagonal movement (combined)",
        attributes: &[number("speed", -5.0), number("hspeed", 5.0)],
        scope: Scope::Always,
        body: r#"
            const tl = gsap.timeline({
                scrollTrigger: {
                    trigger: elem,
                    start: 'top bottom',
                    end: 'bottom top',
                    scrub: 1
                }
            });
            tl.to(elem, {
                yPercent: speed * 10,
                xPercent: hspeed * 10,
                ease: 'none'
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-fade-up",
        category: Category::Fade,
        description: "Fade in from bottom",
        attributes: FADE_ATTRIBUTES,
        scope: Scope::Always,
        body: r#"
            gsap.from(elem, {
                y: distance,
                opacity: 0,
                duration: duration,
                delay: delay,
                scrollTrigger: {
                    trigger: elem,
                    start: start,
                    toggleActions: 'play none none reverse'
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-fade-down",
        category: Category::Fade,
        description: "Fade in from top",
        attributes: FADE_ATTRIBUTES,
        scope: Scope::Always,
        body: r#"
            gsap.from(elem, {
                y: -distance,
                opacity: 0,
                duration: duration,
                delay: delay,
                scrollTrigger: {
                    trigger: elem,
                    start: start,
                    toggleActions: 'play none none reverse'
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-fade-left",
        category: Category::Fade,
        description: "Fade in from left",
        attributes: FADE_ATTRIBUTES,
        scope: Scope::Always,
        body: r#"
            gsap.from(elem, {
                x: -distance,
                opacity: 0,
                duration: duration,
                delay: delay,
                scrollTrigger: {
                    trigger: elem,
                    start: start,
                    toggleActions: 'play none none reverse'
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-fade-right",
        category: Category::Fade,
        description: "Fade in from right",
        attributes: FADE_ATTRIBUTES,
        scope: Scope::Always,
        body: r#"
            gsap.from(elem, {
                x: distance,
                opacity: 0,
                duration: duration,
                delay: delay,
                scrollTrigger: {
                    trigger: elem,
                    start: start,
                    toggleActions: 'play none none reverse'
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-fade",
        category: Category::Fade,
        description: "Simple fade (no movement)",
        attributes: &[
            number("duration", 1.5),
            number("delay", 0.0),
            text("start", "top 85%"),
        ],
        scope: Scope::Always,
        body: r#"
            gsap.from(elem, {
                opacity: 0,
                duration: duration,
                delay: delay,
                scrollTrigger: {
                    trigger: elem,
                    start: start,
                    toggleActions: 'play none none reverse'
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-scale",
        category: Category::ScaleZoom,
        description: "Scale in",
        attributes: &[
            number("scale", 0.8),
            number("duration", 1.0),
            text("start", "top 80%"),
        ],
        scope: Scope::Always,
        body: r#"
            gsap.from(elem, {
                scale: scale,
                opacity: 0,
                duration: duration,
                scrollTrigger: {
                    trigger: elem,
                    start: start
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-zoom",
        category: Category::ScaleZoom,
        description: "Zoom in on scroll",
        attributes: &[number("scale", 1.2)],
        scope: Scope::Always,
        body: r#"
            gsap.to(elem, {
                scale: scale,
                ease: 'none',
                scrollTrigger: {
                    trigger: elem,
                    start: 'top bottom',
                    end: 'bottom top',
                    scrub: true
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-rotate",
        category: Category::Rotation,
        description: "Rotate on scroll",
        attributes: &[number("rotate", 360.0)],
        scope: Scope::Always,
        body: r#"
            gsap.to(elem, {
                rotation: rotate,
                ease: 'none',
                scrollTrigger: {
                    trigger: elem,
                    start: 'top bottom',
                    end: 'bottom top',
                    scrub: true
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-flip",
        category: Category::Rotation,
        description: "3D flip",
        attributes: &[
            number("flip", 90.0),
            number("duration", 1.2),
            text("start", "top 80%"),
        ],
        scope: Scope::Always,
        body: r#"
            gsap.from(elem, {
                rotationY: flip,
                opacity: 0,
                duration: duration,
                scrollTrigger: {
                    trigger: elem,
                    start: start
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-pin",
        category: Category::Pinning,
        description: "Pin sections",
        attributes: &[
            text("pinstart", "top top"),
            text("pinend", "bottom top"),
            DataAttribute {
                name: "pinspacing",
                fallback: Fallback::FlagUnlessFalse,
            },
        ],
        scope: Scope::Always,
        body: r#"
            ScrollTrigger.create({
                trigger: elem,
                start: pinstart,
                end: pinend,
                pin: true,
                pinSpacing: pinspacing
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-sticky-fade",
        category: Category::Pinning,
        description: "Sticky with fade",
        attributes: &[],
        scope: Scope::Always,
        body: r#"
            ScrollTrigger.create({
                trigger: elem,
                start: 'top top',
                end: 'bottom top',
                pin: true,
                pinSpacing: false,
                onUpdate: (self) => {
                    gsap.to(elem, {
                        opacity: 1 - self.progress,
                        duration: 0.1
                    });
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-stagger",
        category: Category::Advanced,
        description: "Stagger children animations",
        attributes: &[
            number("distance", 30.0),
            number("duration", 0.6),
            number("stagger", 0.1),
            number("delay", 0.0),
            text("start", "top 80%"),
        ],
        scope: Scope::Always,
        body: r#"
            const children = gsap.utils.toArray(elem.children);
            gsap.set(children, {
                opacity: 0,
                y: distance
            });
            gsap.to(children, {
                y: 0,
                opacity: 1,
                duration: duration,
                stagger: stagger,
                delay: delay,
                scrollTrigger: {
                    trigger: elem,
                    start: start,
                    toggleActions: 'play none none reverse'
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-text-reveal",
        category: Category::Advanced,
        description: "Text reveal (line by line)",
        attributes: &[],
        scope: Scope::Always,
        body: r#"
            const lines = elem.querySelectorAll('.line, p, h1, h2, h3, h4, h5, h6');
            gsap.from(lines, {
                y: 100,
                opacity: 0,
                duration: 0.8,
                stagger: 0.1,
                scrollTrigger: {
                    trigger: elem,
                    start: 'top 80%'
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-counter",
        category: Category::Advanced,
        description: "Counter animation",
        attributes: &[number("target", 100.0), number("duration", 2.0)],
        scope: Scope::Always,
        body: r#"
            const counter = { value: 0 };
            gsap.to(counter, {
                value: target,
                duration: duration,
                ease: 'power1.inOut',
                scrollTrigger: {
                    trigger: elem,
                    start: 'top 80%',
                    once: true
                },
                onUpdate: () => {
                    elem.textContent = Math.round(counter.value);
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-progress",
        category: Category::Advanced,
        description: "Progress bar fill",
        attributes: &[number("percent", 100.0), number("duration", 1.5)],
        scope: Scope::Always,
        body: r#"
            gsap.to(elem, {
                width: percent + '%',
                duration: duration,
                ease: 'power2.out',
                scrollTrigger: {
                    trigger: elem,
                    start: 'top 85%'
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-skew",
        category: Category::Advanced,
        description: "Skew on scroll velocity",
        attributes: &[],
        scope: Scope::Always,
        body: r#"
            const proxy = { skew: 0 };
            gsap.to(proxy, {
                skew: 0,
                ease: 'none',
                scrollTrigger: {
                    trigger: elem,
                    start: 'top bottom',
                    end: 'bottom top',
                    onUpdate: (self) => {
                        const skew = gsap.utils.clamp(-20, 20, self.getVelocity() / -300);
                        if (Math.abs(skew) > Math.abs(proxy.skew)) {
                            proxy.skew = skew;
                            gsap.to(proxy, {
                                skew: 0,
                                duration: 0.8,
                                ease: 'power3',
                                overwrite: true,
                                onUpdate: () => gsap.set(elem, { skewY: proxy.skew })
                            });
                        }
                    }
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-blur",
        category: Category::Advanced,
        description: "Blur on scroll",
        attributes: &[],
        scope: Scope::Always,
        body: r#"
            gsap.to(elem, {
                filter: 'blur(10px)',
                ease: 'none',
                scrollTrigger: {
                    trigger: elem,
                    start: 'top bottom',
                    end: 'bottom top',
                    scrub: true
                }
            });
        "#,
    },
    ClassRecipe {
        class: "gsap-mobile-disable",
        category: Category::Mobile,
        description: "Disable animations on narrow viewports",
        attributes: &[],
        scope: Scope::NarrowViewport,
        body: r#"
            ScrollTrigger.getAll().forEach((st) => {
                if (st.trigger === elem) {
                    st.kill();
                }
            });
        "#,
    },
];

const PROLOGUE: &str = r#"
document.addEventListener('DOMContentLoaded', function() {
    if (typeof gsap === 'undefined' || window.matchMedia('(prefers-reduced-motion: reduce)').matches) {
        return;
    }

    gsap.registerPlugin(ScrollTrigger);

    function readNumber(elem, key, fallback) {
        const value = parseFloat(elem.dataset[key]);
        return isNaN(value) ? fallback : value;
    }

    function readText(elem, key, fallback) {
        const value = elem.dataset[key];
        return value ? value : fallback;
    }
"#;

const EPILOGUE: &str = r#"
    let resizeTimer;
    window.addEventListener('resize', () => {
        clearTimeout(resizeTimer);
        resizeTimer = setTimeout(() => {
            ScrollTrigger.refresh();
        }, @DEBOUNCE@);
    });
});
"#;

/// 生成完整的 class 动画脚本
///
/// 目录中的每个条目都会输出，与页面实际使用了哪些 class 无关。
pub fn render_class_script() -> EmitResult<String> {
    let mut script = dedent(PROLOGUE);

    for recipe in CATALOGUE {
        script.push_str("\n\n");
        script.push_str(&render_recipe(recipe)?);
    }

    script.push_str("\n\n");
    script.push_str(&dedent(EPILOGUE).replace("@DEBOUNCE@", &RESIZE_DEBOUNCE_MS.to_string()));
    Ok(script)
}

fn render_recipe(recipe: &ClassRecipe) -> EmitResult<String> {
    let mut lines = vec![format!("// {}", recipe.description)];
    lines.push(format!(
        "gsap.utils.toArray({}).forEach((elem) => {{",
        js_string(&format!(".{}", recipe.class))?
    ));
    for attribute in recipe.attributes {
        lines.push(indent(&read_attribute(attribute)?, 1));
    }
    lines.push(indent(&dedent(recipe.body), 1));
    lines.push("});".to_string());

    let block = lines.join("\n");
    let block = match recipe.scope {
        Scope::Always => block,
        Scope::NarrowViewport => format!(
            "if (window.innerWidth <= {}) {{\n{}\n}}",
            MOBILE_BREAKPOINT_PX,
            indent(&block, 1)
        ),
    };

    // 整体位于 DOMContentLoaded 回调内
    Ok(indent(&block, 1))
}

fn read_attribute(attribute: &DataAttribute) -> EmitResult<String> {
    let key = js_string(attribute.name)?;
    Ok(match attribute.fallback {
        Fallback::Number(value) => format!(
            "const {} = readNumber(elem, {}, {});",
            attribute.name, key, value
        ),
        Fallback::Text(value) => format!(
            "const {} = readText(elem, {}, {});",
            attribute.name,
            key,
            js_string(value)?
        ),
        Fallback::FlagUnlessFalse => format!(
            "const {} = elem.dataset[{}] !== 'false';",
            attribute.name, key
        ),
    })
}

/// 去掉首尾空行与公共缩进
fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect();
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |pos| pos + 1);
    let lines = &lines[..end];

    let margin = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| line.get(margin..).unwrap_or("").trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// 每个非空行增加 `level` 级（4 空格）缩进
fn indent(text: &str, level: usize) -> String {
    let prefix = "    ".repeat(level);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
