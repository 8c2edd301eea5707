use ratatui::style::Color;
use std::fs;
use tempfile::TempDir;
use tui_carousel::config::{Config, ConfigError};
use tui_carousel::ui::carousel::{CarouselState, DefaultSelected};
use tui_carousel::ui::icons::IconStyle;
use tui_carousel::ui::theme::{COMPLEMENTARY_COLOR, MAIN_COLOR};

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.carousel.default_selected, DefaultSelected::Index(0));
    assert!(!config.carousel.show_title);
    assert_eq!(config.icons.style, IconStyle::Unicode);
    assert_eq!(config.page.padding, 0);

    let theme = config.theme.theme().unwrap();
    assert_eq!(theme.main, MAIN_COLOR);
    assert_eq!(theme.complementary, COMPLEMENTARY_COLOR);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("tui-carousel/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = write_config(
        r##"
[carousel]
default_selected = "2"
show_title = true

[theme]
main = "#112233"
complementary = "yellow"

[icons]
style = "ascii"

[page]
foreground = "white"
background = "#000000"
padding = 1
"##,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.carousel.default_selected,
        DefaultSelected::Text("2".to_string())
    );
    assert!(config.carousel.props().show_title);
    assert_eq!(config.icons.style, IconStyle::Ascii);

    let theme = config.theme.theme().unwrap();
    assert_eq!(theme.main, Color::Rgb(0x11, 0x22, 0x33));
    assert_eq!(theme.complementary, Color::Yellow);

    let style = config.page.global_style().unwrap();
    assert_eq!(style.foreground, Color::White);
    assert_eq!(style.background, Color::Rgb(0, 0, 0));
    assert_eq!(style.padding, 1);
}

#[test]
fn test_integer_default_selected() {
    let (_dir, path) = write_config("[carousel]\ndefault_selected = 1\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.carousel.default_selected, DefaultSelected::Index(1));
}

#[test]
fn test_integral_float_default_selected() {
    let (_dir, path) = write_config("[carousel]\ndefault_selected = 1.0\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.carousel.default_selected, DefaultSelected::Number(1.0));
    let state = CarouselState::seeded(3, &config.carousel.default_selected);
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn test_fractional_default_selected_falls_back() {
    let (_dir, path) = write_config("[carousel]\ndefault_selected = 2.5\n");
    let config = Config::load_from(&path).unwrap();
    let state = CarouselState::seeded(3, &config.carousel.props().default_selected);
    assert_eq!(state.selected(), Some(0));
}

#[test]
fn test_partial_sections_keep_defaults() {
    let (_dir, path) = write_config("[theme]\nmain = \"red\"\n");
    let config = Config::load_from(&path).unwrap();
    let theme = config.theme.theme().unwrap();
    assert_eq!(theme.main, Color::Red);
    assert_eq!(theme.complementary, COMPLEMENTARY_COLOR);
}

#[test]
fn test_bad_color_fails_validation() {
    let (_dir, path) = write_config("[theme]\nmain = \"not-a-color\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("theme.main"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[carousel\nshow_title = true\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_unknown_icon_style_is_parse_error() {
    let (_dir, path) = write_config("[icons]\nstyle = \"emoji\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
