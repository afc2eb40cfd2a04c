use eframe::egui::{self, Color32, ProgressBar, RichText, Ui};

use crate::theme::{parse_color, ThemeConfig};

/// Bordered panel used for every card on every page.
pub fn card<R>(ui: &mut Ui, theme: &ThemeConfig, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::none()
        .fill(parse_color(&theme.panel))
        .stroke(egui::Stroke {
            width: 1.0,
            color: parse_color(&theme.border),
        })
        .rounding(egui::Rounding::same(theme.radius))
        .inner_margin(egui::vec2(14.0, 12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub fn page_header(ui: &mut Ui, theme: &ThemeConfig, title: &str, subtitle: &str) {
    ui.label(RichText::new(title).size(theme.font_size_base + 12.0).strong());
    ui.label(RichText::new(subtitle).color(theme.muted_color()));
    ui.add_space(8.0);
}

pub fn card_title(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).strong().size(16.0));
    ui.add_space(4.0);
}

pub fn stat_card(ui: &mut Ui, theme: &ThemeConfig, title: &str, value: &str, note: &str, icon: &str) {
    card(ui, theme, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(title).color(theme.muted_color()));
                ui.label(RichText::new(value).size(26.0).strong());
                if !note.is_empty() {
                    ui.label(RichText::new(note).small().color(theme.success_color()));
                }
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(icon).size(28.0).color(theme.accent_color()));
            });
        });
    });
}

pub fn badge(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.15))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::vec2(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(color));
        });
}

/// One row of a horizontal bar chart.
pub fn labelled_bar(ui: &mut Ui, label: &str, value: f32, max: f32, text: String, color: Color32) {
    ui.horizontal(|ui| {
        ui.add_sized([130.0, 18.0], egui::Label::new(label));
        let fraction = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
        ui.add(ProgressBar::new(fraction).fill(color).text(text));
    });
}

pub fn swatch(ui: &mut Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 6.0, color);
}

pub fn status_line(ui: &mut Ui, theme: &ThemeConfig, status: &Option<String>) {
    if let Some(msg) = status {
        ui.label(RichText::new(msg).color(theme.success_color()));
    }
}

pub fn danger_button(ui: &mut Ui, theme: &ThemeConfig, text: &str) -> egui::Response {
    ui.button(RichText::new(text).color(theme.danger_color()))
}

pub fn primary_button(ui: &mut Ui, theme: &ThemeConfig, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).color(Color32::WHITE))
            .fill(theme.accent_color()),
    )
}
