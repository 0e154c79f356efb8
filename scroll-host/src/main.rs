//! # Scroll Host CLI
//!
//! 在命令行上模拟宿主 CMS：保存后台表单、渲染页面、查看设置与 class 动画目录。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p scroll-host -- save form.json
//! cargo run -p scroll-host -- render --content post.html
//! cargo run -p scroll-host -- render --listing
//! cargo run -p scroll-host -- show
//! cargo run -p scroll-host -- catalogue
//! cargo run -p scroll-host -- --config site.json --store data/settings.json -vv show
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use scroll_host::{
    FormSubmission, HostConfig, JsonFileStore, handle_submission, load_settings, log_diagnostics,
    render_for_store,
};
use scroll_runtime::{
    AdminView, CATALOGUE, Category, PageView, SAVED_NOTICE, emit::Fallback, serialize_directives,
};

#[derive(Parser)]
#[command(name = "scroll-host")]
#[command(about = "滚动动画桥接宿主 - 保存设置并渲染页面脚本")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 配置文件（默认：scroll-host.json）
    #[arg(short, long, default_value = "scroll-host.json", global = true)]
    config: PathBuf,

    /// 设置存储文件（覆盖配置文件中的 settings_path）
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// 日志详细程度（-v: debug，-vv: trace）
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// 保存一次后台表单提交
    Save {
        /// 表单 JSON 文件
        form: PathBuf,
    },

    /// 渲染页面注入片段
    Render {
        /// 单篇页内容文件
        #[arg(long, conflicts_with = "listing")]
        content: Option<PathBuf>,

        /// 渲染列表页（非单篇页）
        #[arg(long)]
        listing: bool,
    },

    /// 查看已保存的设置与诊断
    Show,

    /// 列出 class 动画目录
    Catalogue,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_error) = HostConfig::load_or_default(&cli.config);
    init_logging(&config, cli.verbose);

    match config_error {
        Some(scroll_host::ConfigError::NotFound(path)) => {
            tracing::debug!(path = %path.display(), "配置文件不存在，使用默认配置");
        }
        Some(e) => tracing::warn!("{}，使用默认配置", e),
        None => tracing::info!(path = %cli.config.display(), "配置文件加载成功"),
    }
    config.validate().context("配置无效")?;

    if let Some(store) = cli.store {
        config.settings_path = store;
    }

    match cli.command {
        Commands::Save { form } => save(&config, &form),
        Commands::Render { content, listing } => render(&config, content, listing),
        Commands::Show => show(&config),
        Commands::Catalogue => {
            print_catalogue();
            Ok(())
        }
    }
}

fn init_logging(config: &HostConfig, verbose: u8) {
    let level = match verbose {
        0 => config.log_level(),
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(config: &HostConfig) -> Result<JsonFileStore> {
    JsonFileStore::open(&config.settings_path)
        .with_context(|| format!("无法打开设置存储: {:?}", config.settings_path))
}

fn save(config: &HostConfig, form: &Path) -> Result<()> {
    let content =
        fs::read_to_string(form).with_context(|| format!("无法读取表单文件: {:?}", form))?;
    let submission: FormSubmission =
        serde_json::from_str(&content).with_context(|| format!("表单格式无效: {:?}", form))?;

    let mut store = open_store(config)?;
    let settings = handle_submission(&mut store, &submission).context("保存设置失败")?;

    println!("{}", SAVED_NOTICE);
    println!(
        "  {} 条指令，class 动画{}",
        settings.directives.len(),
        if settings.class_based_enabled {
            "已启用"
        } else {
            "未启用"
        }
    );
    Ok(())
}

fn render(config: &HostConfig, content: Option<PathBuf>, listing: bool) -> Result<()> {
    let page = match content {
        Some(path) if !listing => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("无法读取页面内容: {:?}", path))?;
            PageView::singular(content)
        }
        _ => PageView::listing(),
    };

    let store = open_store(config)?;
    let rendered = render_for_store(&store, &config.library, &page).context("页面渲染失败")?;

    if !rendered.is_active() {
        tracing::info!("当前页面无需加载动画库");
        return Ok(());
    }

    println!("{}", rendered.to_html());
    Ok(())
}

fn show(config: &HostConfig) -> Result<()> {
    let store = open_store(config)?;
    let settings = load_settings(&store);
    let view = AdminView::new(&settings);

    println!("设置存储: {:?}", config.settings_path);
    println!(
        "class 动画: {}",
        if view.class_based_enabled {
            "启用"
        } else {
            "禁用"
        }
    );
    println!();
    println!(
        "{:<4} {:<20} {:<12} {:>8} {:>8}  {}",
        "#", "target", "type", "duration", "delay", "easing"
    );
    for (index, row) in view.rows.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:<12} {:>8} {:>8}  {}",
            index, row.target, row.animation_type, row.duration, row.delay, row.easing
        );
    }

    let serialized = serialize_directives(&settings.directives);
    log_diagnostics(&serialized.diagnostics);
    if !serialized.diagnostics.is_empty() {
        println!();
        println!("渲染时跳过:");
        for diagnostic in &serialized.diagnostics {
            println!("  {}", diagnostic);
        }
    }
    Ok(())
}

fn print_catalogue() {
    let mut current: Option<Category> = None;

    for recipe in CATALOGUE {
        if current != Some(recipe.category) {
            println!();
            println!("## {}", recipe.category.title());
            current = Some(recipe.category);
        }

        println!("  .{:<22} {}", recipe.class, recipe.description);
        for attribute in recipe.attributes {
            let fallback = match attribute.fallback {
                Fallback::Number(value) => value.to_string(),
                Fallback::Text(value) => format!("\"{}\"", value),
                Fallback::FlagUnlessFalse => "true".to_string(),
            };
            println!("      data-{:<16} 默认 {}", attribute.name, fallback);
        }
    }
}
