//! # 设置流程集成测试
//!
//! 测试 表单提交 → 设置存储 → 页面渲染 的完整链路。
//! 存储使用临时目录中的 JSON 文件。

use std::fs;

use scroll_host::{
    CLASS_BASED_KEY, DIRECTIVES_KEY, FormSubmission, HostConfig, JsonFileStore, SettingsStore,
    handle_submission, load_settings, render_for_store,
};
use scroll_runtime::{LibraryAssets, PageAsset, PageView};
use serde_json::{Value, json};

fn submission(value: Value) -> FormSubmission {
    serde_json::from_value(value).unwrap()
}

/// 提取 ID 脚本中内联的指令 JSON
fn inlined_animations(script: &str) -> Value {
    let start = script.find("var animations = ").unwrap() + "var animations = ".len();
    let end = script[start..].find(";\n").unwrap() + start;
    serde_json::from_str(&script[start..end]).unwrap()
}

/// 测试空配置不加载任何资源
#[test]
fn test_empty_settings_emit_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("settings.json")).unwrap();
    let library = LibraryAssets::default();

    for page in [
        PageView::listing(),
        PageView::singular("<div class=\"gsap-fade-up\">hi</div>"),
    ] {
        let rendered = render_for_store(&store, &library, &page).unwrap();
        assert!(!rendered.is_active());
        assert!(rendered.assets.is_empty());
        assert_eq!(rendered.scripts().count(), 0);
        assert_eq!(rendered.to_html(), "");
    }
}

/// 测试保存后重新打开存储并渲染
#[test]
fn test_save_reopen_render() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("settings.json");

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        handle_submission(
            &mut store,
            &submission(json!({
                "animation_id[]": ["hero", "", "cta"],
                "animation_type[]": ["fadeUp", "fadeIn", "spin"],
                "animation_duration[]": ["1.2", "", "2"],
                "animation_delay[]": ["0.3", "", "0"],
                "animation_easing[]": ["power2.out", "", "back.out"]
            })),
        )
        .unwrap();
    }

    // 持久化格式
    let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        raw[DIRECTIVES_KEY],
        json!([
            { "id": "hero", "type": "fadeUp", "duration": 1.2, "delay": 0.3, "easing": "power2.out" },
            { "id": "cta", "type": "spin", "duration": 2.0, "delay": 0.0, "easing": "back.out" }
        ])
    );
    assert_eq!(raw[CLASS_BASED_KEY], json!(false));

    let store = JsonFileStore::open(&path).unwrap();
    let rendered =
        render_for_store(&store, &LibraryAssets::default(), &PageView::listing()).unwrap();

    assert!(rendered.is_active());
    assert!(rendered.class_script.is_none());
    assert_eq!(rendered.diagnostics.len(), 1);
    assert_eq!(rendered.diagnostics[0].target, "cta");

    let script = rendered.id_script.as_deref().unwrap();
    assert_eq!(
        inlined_animations(script),
        json!([{
            "target": "hero",
            "properties": { "opacity": 0.0, "y": 60.0, "duration": 1.2, "delay": 0.3, "ease": "power2.out" }
        }])
    );

    let handles: Vec<_> = rendered.assets.iter().map(PageAsset::handle).collect();
    assert_eq!(handles, ["gsap", "gsap-scrolltrigger"]);
}

/// 测试只启用 class 动画的单篇页
#[test]
fn test_class_only_page() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("settings.json")).unwrap();
    handle_submission(
        &mut store,
        &submission(json!({ "class_based_enabled": "1" })),
    )
    .unwrap();

    let library = LibraryAssets::default();
    let page = PageView::singular("<section class=\"gsap-fade-up\">Hello</section>");
    let rendered = render_for_store(&store, &library, &page).unwrap();

    assert!(rendered.is_active());
    assert!(rendered.id_script.is_none());
    let class_script = rendered.class_script.as_deref().unwrap();
    assert!(class_script.contains(r#"gsap.utils.toArray(".gsap-fade-up")"#));

    let handles: Vec<_> = rendered.assets.iter().map(PageAsset::handle).collect();
    assert_eq!(
        handles,
        ["gsap-scrolltrigger-styles", "gsap", "gsap-scrolltrigger"]
    );

    let html = rendered.to_html();
    assert!(html.contains(
        r#"<script id="gsap-js" src="https://cdn.jsdelivr.net/npm/gsap@3.12.5/dist/gsap.min.js"></script>"#
    ));
    assert_eq!(html.matches("<script>").count(), 1);

    // 列表页与不含标记的单篇页都不加载
    for page in [PageView::listing(), PageView::singular("<p>plain</p>")] {
        assert!(!render_for_store(&store, &library, &page).unwrap().is_active());
    }
}

/// 测试保存时的时长与延迟钳制
#[test]
fn test_timing_is_clamped_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("settings.json")).unwrap();

    let settings = handle_submission(
        &mut store,
        &submission(json!({
            "animation_id": ["a", "b", "c"],
            "animation_type": ["fadeIn", "fadeIn", "fadeIn"],
            "animation_duration": ["0", "-3", "abc"],
            "animation_delay": ["-1", "0.5", ""],
            "animation_easing": ["power1.out", "power1.out", "power1.out"]
        })),
    )
    .unwrap();

    let timings: Vec<_> = settings
        .directives
        .iter()
        .map(|d| (d.duration, d.delay))
        .collect();
    assert_eq!(timings, [(0.1, 0.0), (0.1, 0.5), (1.0, 0.0)]);

    for directive in &load_settings(&store).directives {
        assert!(directive.duration >= 0.1);
        assert!(directive.delay >= 0.0);
    }
}

/// 测试存储中的模板行在渲染时被过滤
#[test]
fn test_stored_blank_rows_are_filtered() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("settings.json")).unwrap();
    store
        .set(
            DIRECTIVES_KEY,
            json!([
                { "id": "", "type": "fadeIn" },
                { "id": "gallery", "type": "" }
            ]),
        )
        .unwrap();

    let rendered =
        render_for_store(&store, &LibraryAssets::default(), &PageView::listing()).unwrap();
    assert!(!rendered.is_active());
    assert_eq!(rendered.diagnostics.len(), 2);
}

/// 测试配置文件中的资源地址作用于渲染结果
#[test]
fn test_config_library_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("scroll-host.json");
    fs::write(
        &config_path,
        r#"{ "library": { "version": "3.12.2", "cdn_base": "https://assets.example.test/" } }"#,
    )
    .unwrap();
    let config = HostConfig::try_load(&config_path).unwrap();

    let mut store = JsonFileStore::open(dir.path().join("settings.json")).unwrap();
    handle_submission(
        &mut store,
        &submission(json!({ "animation_id": ["hero"], "animation_type": ["zoomIn"] })),
    )
    .unwrap();

    let rendered = render_for_store(&store, &config.library, &PageView::listing()).unwrap();
    match &rendered.assets[1] {
        PageAsset::Script {
            src, depends_on, ..
        } => {
            assert_eq!(
                src,
                "https://assets.example.test/gsap@3.12.2/dist/ScrollTrigger.min.js"
            );
            assert_eq!(*depends_on, Some("gsap"));
        }
        other => panic!("unexpected asset: {:?}", other),
    }
}
