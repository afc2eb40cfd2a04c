use eframe::egui::{self, Color32, Context, Rounding};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::ConfigResult;

pub const DEFAULT_THEME: &str = "assessment_light";

fn default_success() -> String {
    "#10b981".to_string()
}

fn default_warning() -> String {
    "#f59e0b".to_string()
}

fn default_danger() -> String {
    "#ef4444".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    pub name: String,
    pub surface: String,
    pub panel: String,
    pub text: String,
    pub muted_text: String,
    pub accent: String,
    pub accent_soft: String,
    pub border: String,
    #[serde(default = "default_success")]
    pub success: String,
    #[serde(default = "default_warning")]
    pub warning: String,
    #[serde(default = "default_danger")]
    pub danger: String,
    pub radius: f32,
    pub shadow: f32,
    pub font_size_base: f32,
}

impl ThemeConfig {
    pub fn accent_color(&self) -> Color32 {
        parse_color(&self.accent)
    }

    pub fn muted_color(&self) -> Color32 {
        parse_color(&self.muted_text)
    }

    pub fn success_color(&self) -> Color32 {
        parse_color(&self.success)
    }

    pub fn warning_color(&self) -> Color32 {
        parse_color(&self.warning)
    }

    pub fn danger_color(&self) -> Color32 {
        parse_color(&self.danger)
    }
}

pub fn themes_dir(base: &Path) -> PathBuf {
    base.join("themes")
}

pub fn theme_file(base: &Path) -> PathBuf {
    themes_dir(base).join("theme.json")
}

pub fn presets_file(base: &Path) -> PathBuf {
    themes_dir(base).join("presets.json")
}

pub fn ensure_theme_files(base: &Path) -> ConfigResult<()> {
    let dir = themes_dir(base);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    let presets_path = presets_file(base);
    if !presets_path.exists() {
        let json = serde_json::to_string_pretty(&default_presets())?;
        fs::write(&presets_path, json)?;
    }

    let active_path = theme_file(base);
    if !active_path.exists() {
        let json = serde_json::to_string_pretty(&builtin_theme())?;
        fs::write(&active_path, json)?;
    }

    Ok(())
}

pub fn load_presets(base: &Path) -> Vec<ThemeConfig> {
    let presets_path = presets_file(base);
    match fs::read_to_string(&presets_path) {
        Ok(contents) => match serde_json::from_str::<Vec<ThemeConfig>>(&contents) {
            Ok(list) if !list.is_empty() => return list,
            Ok(_) => log::warn!("{} is empty; using built-in presets", presets_path.display()),
            Err(e) => log::warn!("Invalid presets file {}: {e}", presets_path.display()),
        },
        Err(e) => log::debug!("No presets at {}: {e}", presets_path.display()),
    }
    default_presets()
}

pub fn load_theme(base: &Path, preferred: Option<&str>) -> ThemeConfig {
    let presets = load_presets(base);
    if let Some(name) = preferred {
        if let Some(found) = presets.iter().find(|p| p.name == name) {
            return found.clone();
        }
        log::warn!("Theme '{name}' not found among presets");
    }

    let active_path = theme_file(base);
    if let Ok(contents) = fs::read_to_string(&active_path) {
        match serde_json::from_str::<ThemeConfig>(&contents) {
            Ok(theme) => return theme,
            Err(e) => log::warn!("Invalid theme file {}: {e}", active_path.display()),
        }
    }

    presets
        .into_iter()
        .find(|t| t.name == DEFAULT_THEME)
        .unwrap_or_else(builtin_theme)
}

pub fn save_theme(base: &Path, theme: &ThemeConfig) -> ConfigResult<()> {
    let json = serde_json::to_string_pretty(theme)?;
    fs::write(theme_file(base), json)?;
    Ok(())
}

pub fn apply_theme(theme: &ThemeConfig, ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = if is_dark(theme) {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = parse_color(&theme.panel);
    visuals.window_fill = parse_color(&theme.panel);
    visuals.extreme_bg_color = parse_color(&theme.surface);
    visuals.selection.bg_fill = parse_color(&theme.accent_soft);
    visuals.selection.stroke.color = parse_color(&theme.accent);
    visuals.hyperlink_color = parse_color(&theme.accent);

    visuals.widgets.noninteractive.bg_fill = parse_color(&theme.surface);
    visuals.widgets.noninteractive.fg_stroke.color = parse_color(&theme.text);
    visuals.widgets.noninteractive.bg_stroke.color = parse_color(&theme.border);
    visuals.widgets.inactive.bg_fill = parse_color(&theme.surface);
    visuals.widgets.inactive.weak_bg_fill = parse_color(&theme.surface);
    visuals.widgets.inactive.fg_stroke.color = parse_color(&theme.text);
    visuals.widgets.inactive.bg_stroke.color = parse_color(&theme.border);

    for state in [&mut visuals.widgets.hovered, &mut visuals.widgets.active] {
        state.bg_fill = parse_color(&theme.accent_soft);
        state.weak_bg_fill = parse_color(&theme.accent_soft);
        state.bg_stroke.color = parse_color(&theme.accent);
        state.fg_stroke.color = parse_color(&theme.text);
    }

    let rounding = Rounding::same(theme.radius);
    visuals.window_rounding = rounding;
    visuals.widgets.noninteractive.rounding = rounding;
    visuals.widgets.inactive.rounding = rounding;
    visuals.widgets.hovered.rounding = rounding;
    visuals.widgets.active.rounding = rounding;

    visuals.window_shadow = egui::epaint::Shadow {
        offset: egui::vec2(0.0, 6.0),
        blur: theme.shadow,
        spread: 0.0,
        color: Color32::from_black_alpha(40),
    };
    visuals.popup_shadow = visuals.window_shadow;

    style.text_styles = [
        (
            egui::TextStyle::Small,
            egui::FontId::proportional(theme.font_size_base - 3.0),
        ),
        (
            egui::TextStyle::Body,
            egui::FontId::proportional(theme.font_size_base),
        ),
        (
            egui::TextStyle::Button,
            egui::FontId::proportional(theme.font_size_base),
        ),
        (
            egui::TextStyle::Heading,
            egui::FontId::proportional(theme.font_size_base + 8.0),
        ),
        (
            egui::TextStyle::Monospace,
            egui::FontId::monospace(theme.font_size_base - 1.0),
        ),
    ]
    .into();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.visuals = visuals;
    ctx.set_style(style);
}

fn is_dark(theme: &ThemeConfig) -> bool {
    let bg = parse_color(&theme.panel);
    // Rec. 709 luma; below mid-grey counts as a dark theme.
    let luminance = 0.2126 * (bg.r() as f32) + 0.7152 * (bg.g() as f32) + 0.0722 * (bg.b() as f32);
    luminance < 128.0
}

/// Parses `#RRGGBB` or `#RRGGBBAA`. Anything else becomes light grey.
pub fn parse_color(hex: &str) -> Color32 {
    parse_rgb(hex)
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .or_else(|| {
            let h = hex.trim().trim_start_matches('#');
            if h.len() != 8 {
                return None;
            }
            let rgba = u32::from_str_radix(h, 16).ok()?;
            Some(Color32::from_rgba_unmultiplied(
                ((rgba >> 24) & 0xFF) as u8,
                ((rgba >> 16) & 0xFF) as u8,
                ((rgba >> 8) & 0xFF) as u8,
                (rgba & 0xFF) as u8,
            ))
        })
        .unwrap_or(Color32::LIGHT_GRAY)
}

pub fn parse_rgb(hex: &str) -> Option<[u8; 3]> {
    let h = hex.trim().trim_start_matches('#');
    if h.len() != 6 {
        return None;
    }
    let rgb = u32::from_str_radix(h, 16).ok()?;
    Some([
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ])
}

pub fn format_rgb(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Green for high scores, shading to red as the score drops.
pub fn score_color(score: f32) -> Color32 {
    let t = (score / 100.0).clamp(0.0, 1.0);
    let r = ((1.0 - t) * 255.0) as u8;
    let g = (t * 200.0 + 55.0).min(255.0) as u8;
    Color32::from_rgb(r, g, 64)
}

fn builtin_theme() -> ThemeConfig {
    ThemeConfig {
        name: DEFAULT_THEME.to_string(),
        surface: "#f9fafb".to_string(),
        panel: "#ffffff".to_string(),
        text: "#111827".to_string(),
        muted_text: "#6b7280".to_string(),
        accent: "#2563eb".to_string(),
        accent_soft: "#dbeafe".to_string(),
        border: "#e5e7eb".to_string(),
        success: default_success(),
        warning: default_warning(),
        danger: default_danger(),
        radius: 8.0,
        shadow: 10.0,
        font_size_base: 15.0,
    }
}

pub fn default_presets() -> Vec<ThemeConfig> {
    vec![
        builtin_theme(),
        ThemeConfig {
            name: "slate_dark".to_string(),
            surface: "#1e293b".to_string(),
            panel: "#0f172a".to_string(),
            text: "#e2e8f0".to_string(),
            muted_text: "#94a3b8".to_string(),
            accent: "#60a5fa".to_string(),
            accent_soft: "#1e3a8a".to_string(),
            border: "#334155".to_string(),
            success: "#34d399".to_string(),
            warning: "#fbbf24".to_string(),
            danger: "#f87171".to_string(),
            radius: 8.0,
            shadow: 12.0,
            font_size_base: 15.0,
        },
        ThemeConfig {
            name: "high_contrast".to_string(),
            surface: "#000000".to_string(),
            panel: "#0d0d0d".to_string(),
            text: "#ffffff".to_string(),
            muted_text: "#c7c7c7".to_string(),
            accent: "#ffcc00".to_string(),
            accent_soft: "#4d3b00".to_string(),
            border: "#ffffff".to_string(),
            success: "#00ff66".to_string(),
            warning: "#ffcc00".to_string(),
            danger: "#ff4d4d".to_string(),
            radius: 0.0,
            shadow: 4.0,
            font_size_base: 17.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_formats() {
        assert_eq!(parse_color("#2563eb"), Color32::from_rgb(0x25, 0x63, 0xeb));
        assert_eq!(parse_color("bogus"), Color32::LIGHT_GRAY);
        assert_eq!(parse_rgb("#10B981"), Some([0x10, 0xb9, 0x81]));
        assert_eq!(parse_rgb("#123"), None);
    }

    #[test]
    fn test_format_rgb_is_inverse_of_parse() {
        assert_eq!(format_rgb([0x3b, 0x82, 0xf6]), "#3B82F6");
        assert_eq!(parse_rgb(&format_rgb([1, 2, 3])), Some([1, 2, 3]));
    }

    #[test]
    fn test_dark_detection() {
        let presets = default_presets();
        assert!(!is_dark(&presets[0]));
        assert!(is_dark(&presets[1]));
    }

    #[test]
    fn test_load_theme_prefers_named_preset() {
        let dir = tempfile::tempdir().unwrap();
        ensure_theme_files(dir.path()).unwrap();

        assert_eq!(load_theme(dir.path(), Some("slate_dark")).name, "slate_dark");
        assert_eq!(load_theme(dir.path(), Some("missing")).name, DEFAULT_THEME);
        assert_eq!(load_theme(dir.path(), None).name, DEFAULT_THEME);
    }

    #[test]
    fn test_corrupt_presets_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(themes_dir(dir.path())).unwrap();
        fs::write(presets_file(dir.path()), "[oops").unwrap();

        assert_eq!(load_presets(dir.path()), default_presets());
    }
}
