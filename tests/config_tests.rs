use std::io::Write;
use tempfile::NamedTempFile;

use arcana::render::animate::Easing;
use arcana::util::config::{AppConfig, ConfigError};

fn load_str(toml: &str) -> anyhow::Result<AppConfig> {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();
    AppConfig::load(Some(f.path()))
}

#[test]
fn test_load_full_config() {
    let toml = r#"
[catalog]
search_debounce_ms = 250
filters = [
    { label = "Tudo" },
    { label = "Contos", token = "conto" },
]

[carousel]
slides_per_view = 2
speed_ms = 900
breakpoints = [{ min_width = 100, slides_per_view = 4 }]

[history]
looping = false
autoplay = { delay_ms = 1000 }

[animation]
duration_ms = 300
easing = "ease-in-out"
once = false
offset = 0

[scroll]
header_threshold = 5
spy_offset = 0

[page]
sections = ["catalogo", "contato"]
detail_overlay = false

[ui]
tick_ms = 50
"#;
    let config = load_str(toml).unwrap();
    assert_eq!(config.catalog.search_debounce_ms, 250);
    assert_eq!(config.catalog.filters.len(), 2);
    assert_eq!(config.catalog.filters[0].token, None);
    assert_eq!(config.catalog.filters[1].token.as_deref(), Some("conto"));
    assert_eq!(config.carousel.slides_per_view, 2);
    assert_eq!(config.carousel.speed_ms, 900);
    assert_eq!(config.carousel.slides_per_view_at(120), 4);
    assert!(!config.history.looping);
    assert_eq!(config.history.autoplay.map(|a| a.delay_ms), Some(1000));
    assert_eq!(config.animation.duration_ms, 300);
    assert_eq!(config.animation.easing, Easing::EaseInOut);
    assert!(!config.animation.once);
    assert_eq!(config.scroll.header_threshold, 5);
    assert_eq!(config.page.sections, vec!["catalogo", "contato"]);
    assert!(!config.page.detail_overlay);
    assert_eq!(config.ui.tick_ms, 50);
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let toml = r#"
[catalog]
search_debounce_ms = 80
"#;
    let config = load_str(toml).unwrap();
    assert_eq!(config.catalog.search_debounce_ms, 80);
    assert_eq!(config.catalog.filters.len(), 6);
    assert_eq!(config.carousel.speed_ms, 6000);
    assert_eq!(config.history.autoplay.map(|a| a.delay_ms), Some(4200));
    assert_eq!(config.scroll.spy_offset, 3);
    assert!(config.page.detail_overlay);
}

#[test]
fn test_load_empty_config_uses_all_defaults() {
    let config = load_str("").unwrap();
    let default = AppConfig::default();
    assert_eq!(config.catalog.filters, default.catalog.filters);
    assert_eq!(config.page.sections, default.page.sections);
    assert_eq!(config.ui.tick_ms, 100);
}

#[test]
fn test_load_nonexistent_file_fails() {
    let result = AppConfig::load(Some(std::path::Path::new("/nonexistent/path/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let result = load_str("this is not [valid toml {{");
    assert!(result.is_err());
}

#[test]
fn test_load_rejects_zero_slides_per_view() {
    let err = load_str("[carousel]\nslides_per_view = 0\n").unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::ZeroSlidesPerView("carousel"))
    );

    let err = load_str("[history]\nbreakpoints = [{ min_width = 10, slides_per_view = 0 }]\n")
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::ZeroSlidesPerView("history"))
    );
}

#[test]
fn test_load_rejects_zero_tick_and_blank_labels() {
    let err = load_str("[ui]\ntick_ms = 0\n").unwrap_err();
    assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::ZeroTick));

    let err = load_str("[catalog]\nfilters = [{ label = \"Todos\" }, { label = \"  \" }]\n")
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::EmptyFilterLabel(1))
    );
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.catalog.search_debounce_ms, 120);
    assert_eq!(config.catalog.filters[0].label, "Todos");
    assert_eq!(config.carousel.space_between, 2);
    assert_eq!(config.carousel.slides_per_view_at(80), 2);
    assert_eq!(config.history.slides_per_view_at(200), 1);
    assert_eq!(config.scroll.header_threshold, 1);
    assert_eq!(
        config.page.sections,
        vec!["inicio", "historia", "catalogo", "contato"]
    );
    assert!(config.log_dir().ends_with("logs"));
}
