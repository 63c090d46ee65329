//! Integration tests for configuration loading

use scaffold_picker::config::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn parse_complete_config_file() {
    let config_content = r#"
[picker]
default_project_type = "flask"
indent_width = 4
show_ids = true

[tui]
color_scheme = "dark"
tick_ms = 100
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.picker.default_project_type, "flask");
    assert_eq!(config.picker.indent_width, 4);
    assert!(config.picker.show_ids);
    assert_eq!(config.tui.color_scheme, "dark");
    assert_eq!(config.tui.tick_ms, 100);
}

#[test]
fn parse_partial_config_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[tui]\ntick_ms = 500\n").unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.tui.tick_ms, 500);
    assert_eq!(config.picker.default_project_type, "python");
    assert_eq!(config.picker.indent_width, 2);
}

#[test]
fn malformed_toml_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[picker\nbroken").unwrap();

    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn invalid_values_are_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[picker]\nindent_width = 0\n").unwrap();

    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn unknown_color_scheme_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[tui]\ncolor_scheme = \"sepia\"\n").unwrap();

    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn missing_explicit_path_is_an_error() {
    assert!(Config::load(Some(std::path::Path::new("/nonexistent/config.toml"))).is_err());
}
