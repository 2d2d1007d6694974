use std::cell::RefCell;
use std::rc::Rc;

use lumen::{
    AdaptivePalette, AuthLayout, ColorMode, FileStore, ManualPreference, MemoryStore, OutputMode,
    PreferenceStore, Renderer, RootLayout, StaticOutlet, Theme, ThemeConfig, ThemeContext,
    ThemeToggle, TogglePolicy,
};
use tempfile::TempDir;

fn text_root(app: &str) -> (RootLayout, AuthLayout) {
    let renderer = Renderer::with_output(AdaptivePalette::default(), OutputMode::Text).unwrap();
    let root = RootLayout::with_renderer(ThemeConfig::for_app(app), renderer.clone());
    let auth = AuthLayout::new(renderer).with_width(32);
    (root, auth)
}

#[test]
fn test_set_then_reload_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let (root, _) = text_root("tanstack-ui");

    for theme in Theme::ALL {
        let mut provider = root.mount(
            Box::new(FileStore::new(&path)),
            Box::new(ManualPreference::default()),
        );
        provider.set_theme(theme);
        drop(provider);

        let reloaded = root.mount(
            Box::new(FileStore::new(&path)),
            Box::new(ManualPreference::default()),
        );
        assert_eq!(reloaded.theme(), theme);
    }

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"tanstack-ui-theme\""));
}

#[test]
fn test_reload_through_returned_storage() {
    let (root, _) = text_root("app");
    let mut provider = root.mount(
        Box::new(MemoryStore::new()),
        Box::new(ManualPreference::default()),
    );
    provider.set_theme(Theme::Dark);

    let storage = provider.into_store().into_storage();
    let reloaded = root.mount(storage, Box::new(ManualPreference::default()));
    assert_eq!(reloaded.theme(), Theme::Dark);
}

#[test]
fn test_invalid_or_corrupt_storage_uses_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let (root, _) = text_root("app");

    std::fs::write(&path, r#"{"app-theme": "purple"}"#).unwrap();
    let provider = root.mount(
        Box::new(FileStore::new(&path)),
        Box::new(ManualPreference::default()),
    );
    assert_eq!(provider.theme(), Theme::System);

    std::fs::write(&path, "{{{").unwrap();
    let provider = root.mount(
        Box::new(FileStore::new(&path)),
        Box::new(ManualPreference::default()),
    );
    assert_eq!(provider.theme(), Theme::System);
}

#[test]
fn test_unwritable_storage_still_renders() {
    let (root, auth) = text_root("app");
    let mut provider = root.mount(
        Box::new(MemoryStore::unavailable()),
        Box::new(ManualPreference::new(ColorMode::Light)),
    );

    provider.set_theme(Theme::Dark);
    let page = root
        .render(&provider, &auth.page(&StaticOutlet::new("Sign in"), None))
        .unwrap();

    assert!(page.contains("[☾ dark]"));
    assert!(page.contains("Sign in"));
}

#[test]
fn test_system_theme_follows_host_without_set_theme() {
    let (root, auth) = text_root("app");
    let host = ManualPreference::new(ColorMode::Light);
    let mut provider = root.mount(Box::new(MemoryStore::new()), Box::new(host.clone()));

    let renders = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&renders);
    provider.subscribe(move |change| sink.borrow_mut().push(change.mode));

    assert_eq!(provider.document().class(), "light");
    host.set(ColorMode::Dark);
    provider.host_preference_changed();

    assert_eq!(provider.document().class(), "dark");
    assert_eq!(provider.theme(), Theme::System);
    assert_eq!(*renders.borrow(), vec![ColorMode::Dark]);

    let page = root
        .render(&provider, &auth.page(&StaticOutlet::new("x"), None))
        .unwrap();
    assert!(page.contains("[◑ system]"));
}

#[test]
fn test_applied_mode_selects_palette() {
    let renderer = Renderer::with_output(AdaptivePalette::default(), OutputMode::Term).unwrap();
    let root = RootLayout::with_renderer(ThemeConfig::for_app("app"), renderer.clone());
    let auth = AuthLayout::new(renderer).with_width(20);
    let host = ManualPreference::new(ColorMode::Light);
    let mut provider = root.mount(Box::new(MemoryStore::new()), Box::new(host.clone()));
    let router = StaticOutlet::new("hello");

    // Built-in light palette: blue toggle; dark palette: yellow toggle.
    let light = root.render(&provider, &auth.page(&router, None)).unwrap();
    assert!(light.contains("\x1b[34"));

    provider.set_theme(Theme::Dark);
    let dark = root.render(&provider, &auth.page(&router, None)).unwrap();
    assert!(dark.contains("\x1b[33"));
    assert!(!dark.contains("\x1b[34"));
}

#[test]
fn test_binary_toggle_twice_from_light() {
    let (root, _) = text_root("app");
    let mut provider = root.mount(
        Box::new(MemoryStore::new().with_value("app-theme", "light")),
        Box::new(ManualPreference::default()),
    );
    let toggle = ThemeToggle::new(TogglePolicy::Binary);

    toggle.activate(&mut provider);
    assert_eq!(provider.theme(), Theme::Dark);
    toggle.activate(&mut provider);
    assert_eq!(provider.theme(), Theme::Light);
}

#[test]
fn test_cycle_toggle_persists_each_step() {
    let (root, auth) = text_root("app");
    let mut provider = root.mount(
        Box::new(MemoryStore::new().with_value("app-theme", "light")),
        Box::new(ManualPreference::default()),
    );

    let mut seen = Vec::new();
    for _ in 0..3 {
        auth.activate_toggle(&mut provider);
        seen.push(provider.store().storage().get("app-theme").unwrap());
    }

    assert_eq!(
        seen,
        vec![
            Some("dark".to_string()),
            Some("system".to_string()),
            Some("light".to_string()),
        ]
    );
}

#[test]
fn test_auth_layout_content_paths_inside_root() {
    let (root, auth) = text_root("app");
    let provider = root.mount(
        Box::new(MemoryStore::new()),
        Box::new(ManualPreference::default()),
    );
    let router = StaticOutlet::new("routed page");

    let explicit = root
        .render(&provider, &auth.page(&router, Some("explicit page")))
        .unwrap();
    assert!(explicit.contains("explicit page"));
    assert!(!explicit.contains("routed page"));
    assert!(explicit.contains("[◐ system]"));

    let routed = root.render(&provider, &auth.page(&router, None)).unwrap();
    assert!(routed.contains("routed page"));
    assert!(routed.contains("[◐ system]"));
}
