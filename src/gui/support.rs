use eframe::egui::{self, RichText, Ui};

use super::widgets::{card, card_title, page_header, primary_button, status_line};
use crate::assessment::{Difficulty, QuestionCount, QuestionType};
use crate::support::{Role, SettingsSection, SupportState, SupportTab, FAQ_ITEMS};
use crate::theme::ThemeConfig;

pub struct SupportPage {
    state: SupportState,
}

impl SupportPage {
    pub fn new() -> Self {
        Self {
            state: SupportState::default(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &ThemeConfig) {
        page_header(
            ui,
            theme,
            "Support & Settings",
            "Get help and configure your preferences",
        );
        ui.horizontal(|ui| {
            for (tab, label) in [(SupportTab::Support, "Support"), (SupportTab::Settings, "Settings")] {
                if ui.selectable_label(self.state.tab == tab, label).clicked() {
                    self.state.tab = tab;
                    self.state.status = None;
                }
            }
        });
        ui.separator();

        match self.state.tab {
            SupportTab::Support => self.show_support(ui, theme),
            SupportTab::Settings => self.show_settings(ui, theme),
        }
    }

    fn show_support(&mut self, ui: &mut Ui, theme: &ThemeConfig) {
        let state = &mut self.state;
        card(ui, theme, |ui| {
            card_title(ui, "Frequently Asked Questions");
            for (i, item) in FAQ_ITEMS.iter().enumerate() {
                let open = state.faq.is_expanded(i);
                let arrow = if open { "⏷" } else { "⏵" };
                if ui
                    .add(egui::Label::new(RichText::new(format!("{arrow} {}", item.question)).strong()).sense(egui::Sense::click()))
                    .clicked()
                {
                    state.faq.toggle(i);
                }
                if open {
                    ui.label(RichText::new(item.answer).color(theme.muted_color()));
                }
                ui.separator();
            }
        });
        ui.add_space(8.0);

        card(ui, theme, |ui| {
            card_title(ui, "Contact Support");
            ui.horizontal(|ui| {
                ui.label("Name");
                ui.add(egui::TextEdit::singleline(&mut state.contact.name).hint_text("Your name"));
                ui.label("Email");
                ui.add(
                    egui::TextEdit::singleline(&mut state.contact.email)
                        .hint_text("your.email@example.com"),
                );
            });
            ui.label("Message");
            ui.add(
                egui::TextEdit::multiline(&mut state.contact.message)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY)
                    .hint_text("Describe your issue or question..."),
            );
            if primary_button(ui, theme, "Send Message").clicked() {
                state.status = Some(if state.contact.send() {
                    "Message sent. We'll get back to you soon.".to_string()
                } else {
                    "Please enter a message before sending.".to_string()
                });
            }
            status_line(ui, theme, &state.status);
        });
    }

    fn show_settings(&mut self, ui: &mut Ui, theme: &ThemeConfig) {
        let state = &mut self.state;
        let mut save = None;

        card(ui, theme, |ui| {
            card_title(ui, "Profile Settings");
            egui::Grid::new("profile_form").num_columns(2).show(ui, |ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut state.profile.name);
                ui.end_row();
                ui.label("Email");
                ui.text_edit_singleline(&mut state.profile.email);
                ui.end_row();
                ui.label("Role");
                egui::ComboBox::from_id_source("profile_role")
                    .selected_text(state.profile.role.label())
                    .show_ui(ui, |ui| {
                        for role in Role::ALL {
                            ui.selectable_value(&mut state.profile.role, role, role.label());
                        }
                    });
                ui.end_row();
            });
            if primary_button(ui, theme, "Save Profile").clicked() {
                save = Some(SettingsSection::Profile);
            }
        });
        ui.add_space(8.0);

        card(ui, theme, |ui| {
            card_title(ui, "Notification Preferences");
            for (label, hint, flag) in state.notifications.rows_mut() {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(label);
                        ui.label(RichText::new(hint).small().color(theme.muted_color()));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.checkbox(flag, "");
                    });
                });
            }
            if primary_button(ui, theme, "Save Preferences").clicked() {
                save = Some(SettingsSection::Notifications);
            }
        });
        ui.add_space(8.0);

        card(ui, theme, |ui| {
            card_title(ui, "Assessment Defaults");
            egui::Grid::new("defaults_form").num_columns(2).show(ui, |ui| {
                ui.label("Default Difficulty");
                egui::ComboBox::from_id_source("default_difficulty")
                    .selected_text(state.defaults.difficulty.label())
                    .show_ui(ui, |ui| {
                        for d in Difficulty::ALL {
                            ui.selectable_value(&mut state.defaults.difficulty, d, d.label());
                        }
                    });
                ui.end_row();
                ui.label("Default Question Count");
                egui::ComboBox::from_id_source("default_count")
                    .selected_text(state.defaults.question_count.label())
                    .show_ui(ui, |ui| {
                        for c in QuestionCount::ALL {
                            ui.selectable_value(&mut state.defaults.question_count, c, c.label());
                        }
                    });
                ui.end_row();
                ui.label("Default Question Type");
                egui::ComboBox::from_id_source("default_type")
                    .selected_text(state.defaults.question_type.label())
                    .show_ui(ui, |ui| {
                        for t in QuestionType::ALL {
                            ui.selectable_value(&mut state.defaults.question_type, t, t.label());
                        }
                    });
                ui.end_row();
            });
            if primary_button(ui, theme, "Save Defaults").clicked() {
                save = Some(SettingsSection::Defaults);
            }
        });

        if let Some(section) = save {
            state.save(section);
        }
        status_line(ui, theme, &state.status);
    }
}
