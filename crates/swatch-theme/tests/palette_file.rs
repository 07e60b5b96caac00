//! Palette loading from disk.

use std::fs;

use swatch_theme::{Palette, Scheme, ThemeError, resolve_color};
use tempfile::TempDir;

const PALETTE: &str = r##"
name: Slate
scheme: dark
background: "#0f172a"
colors:
  text: "#f8fafc"
  muted: "hsl(215, 16%, 47%)"
  link: "rgb(56, 189, 248)"
derived:
  - name: link-hover
    from: link
    lighten: 10
"##;

fn write_palette(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("palette.yaml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_palette(&dir, PALETTE);

    let palette = Palette::from_file(&path).unwrap();
    assert_eq!(palette.name(), "Slate");
    assert_eq!(palette.scheme(), Scheme::Dark);
    assert_eq!(palette.len(), 4);
    assert!(palette.get("link-hover").unwrap().starts_with("rgb("));
    assert_eq!(resolve_color(&palette, "--text"), "#f8fafc");
    assert_eq!(resolve_color(&palette, "background"), "#0f172a");
}

#[test]
fn test_audit_from_file() {
    let dir = TempDir::new().unwrap();
    let palette = Palette::from_file(write_palette(&dir, PALETTE)).unwrap();

    let checks = palette.audit(4.5).unwrap();
    let text = checks.iter().find(|c| c.name == "text").unwrap();
    assert!(text.passes);
    assert!(text.ratio > 15.0);
    let muted = checks.iter().find(|c| c.name == "muted").unwrap();
    assert!(muted.ratio < text.ratio);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Palette::from_file(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ThemeError::PaletteNotFound { .. }));
    assert!(err.is_load_error());
}

#[test]
fn test_bad_color_in_file() {
    let dir = TempDir::new().unwrap();
    let path = write_palette(&dir, "colors:\n  text: \"#12345\"\n");
    let err = Palette::from_file(&path).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidColor { ref name, .. } if name == "text"));
    assert!(!err.is_load_error());
}
