use std::time::Instant;

use eframe::egui::{self, scroll_area::ScrollBarVisibility, Align, Layout, ProgressBar, RichText, ScrollArea, Ui};

use super::widgets::{card, primary_button, status_line};
use crate::assessment::conversation::Author;
use crate::assessment::loading::{StageStatus, STAGES, SUCCESS_MESSAGE};
use crate::assessment::questions::{option_letter, EditError, Preview};
use crate::assessment::{AssessmentCreator, UiMode};
use crate::theme::{parse_color, ThemeConfig};

const WELCOME_FEATURES: [(&str, &str); 4] = [
    ("Quick Setup", "Guided conversation flow"),
    ("Smart Generation", "AI-powered question creation"),
    ("Multiple Formats", "Export to PDF, Word, LMS"),
    ("Easy Editing", "Customize and refine content"),
];

const EXPORT_ACTIONS: [&str; 3] = ["Download PDF", "Download Word", "Export to LMS"];

enum PreviewEdit {
    Text(String, String),
    Option(String, usize, String),
    Correct(String, usize),
    Explanation(String, String),
}

/// Chat on the left, workspace on the right. Used both as the AI Assistant
/// page and inside the dashboard's creator window.
pub struct AssistantPage {
    id: &'static str,
    creator: AssessmentCreator,
    input: String,
    status: Option<String>,
}

impl AssistantPage {
    pub fn new(id: &'static str, now: Instant) -> Self {
        Self {
            id,
            creator: AssessmentCreator::new(now),
            input: String::new(),
            status: None,
        }
    }

    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.creator.next_deadline(now)
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &ThemeConfig, now: Instant) {
        self.creator.poll(now);

        egui::SidePanel::left(egui::Id::new(self.id).with("chat"))
            .resizable(true)
            .default_width(360.0)
            .min_width(280.0)
            .show_inside(ui, |ui| self.show_chat(ui, theme, now));

        egui::CentralPanel::default().show_inside(ui, |ui| match self.creator.mode() {
            UiMode::Chat => show_welcome(ui, theme),
            UiMode::Loading => self.show_loading(ui, theme, now),
            UiMode::Preview => self.show_preview(ui, theme, now),
            UiMode::Customizing => self.show_customizing(ui, theme, now),
        });
    }

    fn show_chat(&mut self, ui: &mut Ui, theme: &ThemeConfig, now: Instant) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🤖").size(22.0));
            ui.vertical(|ui| {
                ui.label(RichText::new("AI Assistant").strong());
                ui.label(RichText::new("Online").small().color(theme.success_color()));
            });
        });
        ui.separator();

        let show_summary = matches!(self.creator.mode(), UiMode::Loading | UiMode::Preview);
        let reserved = if show_summary { 150.0 } else { 50.0 };
        let log_height = (ui.available_height() - reserved).max(120.0);

        let mut clicked_chip = None;
        ScrollArea::vertical()
            .id_source(egui::Id::new(self.id).with("chat_log"))
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .max_height(log_height)
            .scroll_bar_visibility(ScrollBarVisibility::AlwaysVisible)
            .show(ui, |ui| {
                let max_width = ui.available_width() * 0.9;
                let conversation = self.creator.conversation();
                let chips = conversation.active_chips();
                let last_id = conversation.messages().last().map(|m| m.id);

                for message in conversation.messages() {
                    let is_user = message.author == Author::User;
                    let layout = if is_user {
                        Layout::right_to_left(Align::Min)
                    } else {
                        Layout::left_to_right(Align::Min)
                    };
                    ui.add_space(4.0);
                    ui.with_layout(layout, |ui| {
                        let (fill, text_color) = if is_user {
                            (theme.accent_color(), egui::Color32::WHITE)
                        } else {
                            (parse_color(&theme.surface), parse_color(&theme.text))
                        };
                        egui::Frame::none()
                            .fill(fill)
                            .stroke(egui::Stroke {
                                width: 1.0,
                                color: parse_color(&theme.border),
                            })
                            .rounding(egui::Rounding::same(theme.radius))
                            .inner_margin(egui::vec2(10.0, 8.0))
                            .show(ui, |ui| {
                                ui.set_max_width(max_width);
                                if message.is_typing {
                                    ui.horizontal(|ui| {
                                        ui.spinner();
                                        ui.label(RichText::new("typing…").italics().color(theme.muted_color()));
                                    });
                                } else {
                                    ui.add(egui::Label::new(RichText::new(&message.text).color(text_color)).wrap(true));
                                }
                            });
                    });

                    // Chips only on the newest landed assistant message.
                    if Some(message.id) == last_id && !chips.is_empty() {
                        ui.horizontal_wrapped(|ui| {
                            for chip in chips {
                                if ui.button(chip.as_str()).clicked() {
                                    clicked_chip = Some(chip.clone());
                                }
                            }
                        });
                    }
                }
            });

        if let Some(chip) = clicked_chip {
            if let Err(e) = self.creator.select_chip(&chip, now) {
                log::debug!("Chip rejected: {e}");
            }
        }

        ui.separator();
        let accepts_text = self.creator.accepts_text();
        if accepts_text {
            ui.horizontal(|ui| {
                let width = ui.available_width() - 60.0;
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .hint_text("Type your message...")
                        .desired_width(width),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if enter || ui.button("Send").clicked() {
                    self.send_input(now);
                }
            });
        }

        if show_summary {
            ui.separator();
            ui.label(RichText::new("Assessment Settings").strong());
            let config = self.creator.config();
            for (label, value) in [
                ("Topic", config.topic.as_str()),
                ("Difficulty", config.difficulty_label()),
                ("Questions", config.count_label()),
                ("Type", config.type_label()),
            ] {
                ui.label(format!("{label}: {value}"));
            }
        }
    }

    fn send_input(&mut self, now: Instant) {
        match self.creator.submit_text(&self.input, now) {
            Ok(_) => self.input.clear(),
            Err(e) => log::debug!("Message not accepted: {e}"),
        }
    }

    fn show_loading(&mut self, ui: &mut Ui, theme: &ThemeConfig, now: Instant) {
        let Some(stage) = self.creator.loading() else {
            return;
        };
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("🧠").size(40.0));
            ui.label(RichText::new("Generating Your Assessment").size(22.0).strong());
            ui.label(
                RichText::new(format!("Creating {} questions about {}", self.creator.config().count_label(), self.creator.config().topic))
                    .color(theme.muted_color()),
            );
            ui.add_space(16.0);
            ui.set_max_width(420.0);
            ui.add(
                ProgressBar::new(stage.progress(now) / 100.0)
                    .fill(theme.accent_color())
                    .show_percentage(),
            );
            ui.add_space(12.0);
            for (i, info) in STAGES.iter().enumerate() {
                let status = stage.status(i, now);
                ui.horizontal(|ui| {
                    match status {
                        StageStatus::Complete => {
                            ui.label(RichText::new("✔").color(theme.success_color()));
                        }
                        StageStatus::Loading => {
                            ui.spinner();
                        }
                        StageStatus::Pending => {
                            ui.label(RichText::new("○").color(theme.muted_color()));
                        }
                    }
                    let color = match status {
                        StageStatus::Pending => theme.muted_color(),
                        _ => parse_color(&theme.text),
                    };
                    ui.label(RichText::new(format!("{} {}", info.icon, info.label)).color(color));
                });
            }
            if stage.is_generated(now) {
                ui.add_space(12.0);
                ui.label(RichText::new(SUCCESS_MESSAGE).strong().color(theme.success_color()));
            }
        });
    }

    fn show_preview(&mut self, ui: &mut Ui, theme: &ThemeConfig, now: Instant) {
        let Some(preview) = self.creator.preview_mut() else {
            return;
        };
        preview_header(ui, theme, preview, true);

        let mut toggled = None;
        let action_bar_height = 90.0;
        ScrollArea::vertical()
            .id_source(egui::Id::new(self.id).with("preview"))
            .auto_shrink([false; 2])
            .max_height((ui.available_height() - action_bar_height).max(100.0))
            .show(ui, |ui| {
                for (i, q) in preview.questions().iter().enumerate() {
                    card(ui, theme, |ui| {
                        ui.horizontal(|ui| {
                            let mut selected = preview.is_selected(&q.id);
                            if ui.checkbox(&mut selected, "").changed() {
                                toggled = Some(q.id.clone());
                            }
                            ui.label(RichText::new(format!("{}. {}", i + 1, q.text)).strong().size(15.0));
                        });
                        for (j, option) in q.options.iter().enumerate() {
                            let highlight = preview.show_explanations() && j == q.correct_index();
                            let text = RichText::new(format!("{}) {}", option_letter(j), option));
                            if highlight {
                                ui.label(text.strong().color(theme.success_color()));
                            } else {
                                ui.label(text);
                            }
                        }
                        if preview.show_explanations() {
                            if let Some(explanation) = &q.explanation {
                                ui.label(RichText::new(format!("Explanation: {explanation}")).italics().color(theme.muted_color()));
                            }
                        }
                    });
                    ui.add_space(6.0);
                }
            });

        if let Some(id) = toggled {
            preview.toggle_selection(&id);
        }

        ui.separator();
        let mut customize = false;
        ui.horizontal(|ui| {
            for action in EXPORT_ACTIONS {
                if ui.button(action).clicked() {
                    log::info!("{action}: {} questions on '{}'", preview.questions().len(), preview.config().topic);
                    self.status = Some(format!("{action} started."));
                }
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if primary_button(ui, theme, "✔ Finalize").clicked() {
                    log::info!("Finalized assessment '{}'", preview.config().topic);
                    self.status = Some("Assessment finalized.".to_string());
                }
                if ui.button("✏ Customize").clicked() {
                    customize = true;
                }
            });
        });
        ui.label(
            RichText::new(format!(
                "Assessment ready for review • {} • {} selected • Estimated completion time: {} minutes",
                preview.summary(),
                preview.selected_count(),
                preview.estimated_minutes()
            ))
            .small()
            .color(theme.muted_color()),
        );
        status_line(ui, theme, &self.status);

        if customize {
            self.creator.set_mode(UiMode::Customizing, now);
        }
    }

    fn show_customizing(&mut self, ui: &mut Ui, theme: &ThemeConfig, now: Instant) {
        let Some(preview) = self.creator.preview_mut() else {
            return;
        };
        preview_header(ui, theme, preview, false);

        let mut edits = Vec::new();
        ScrollArea::vertical()
            .id_source(egui::Id::new(self.id).with("customize"))
            .auto_shrink([false; 2])
            .max_height((ui.available_height() - 40.0).max(100.0))
            .show(ui, |ui| {
                for (i, q) in preview.questions().iter().enumerate() {
                    card(ui, theme, |ui| {
                        ui.label(RichText::new(format!("Question {}", i + 1)).strong());
                        let mut text = q.text.clone();
                        if ui
                            .add(egui::TextEdit::multiline(&mut text).desired_rows(2).desired_width(f32::INFINITY))
                            .changed()
                        {
                            edits.push(PreviewEdit::Text(q.id.clone(), text));
                        }
                        let correct = q.correct_index();
                        for (j, option) in q.options.iter().enumerate() {
                            ui.horizontal(|ui| {
                                if ui.radio(correct == j, "").clicked() {
                                    edits.push(PreviewEdit::Correct(q.id.clone(), j));
                                }
                                ui.label(format!("{})", option_letter(j)));
                                let mut value = option.clone();
                                if ui.text_edit_singleline(&mut value).changed() {
                                    edits.push(PreviewEdit::Option(q.id.clone(), j, value));
                                }
                            });
                        }
                        ui.label("Explanation");
                        let mut explanation = q.explanation.clone().unwrap_or_default();
                        if ui
                            .add(egui::TextEdit::singleline(&mut explanation).hint_text("Optional").desired_width(f32::INFINITY))
                            .changed()
                        {
                            edits.push(PreviewEdit::Explanation(q.id.clone(), explanation));
                        }
                    });
                    ui.add_space(6.0);
                }
            });

        for edit in edits {
            if let Err(e) = apply_edit(preview, edit) {
                log::warn!("Edit rejected: {e}");
            }
        }

        ui.separator();
        if primary_button(ui, theme, "Done editing").clicked() {
            self.creator.set_mode(UiMode::Preview, now);
        }
    }
}

fn apply_edit(preview: &mut Preview, edit: PreviewEdit) -> Result<(), EditError> {
    match edit {
        PreviewEdit::Text(id, text) => preview.update_question_text(&id, &text),
        PreviewEdit::Option(id, index, text) => preview.update_option(&id, index, &text),
        PreviewEdit::Correct(id, index) => preview.set_correct_answer(&id, index),
        PreviewEdit::Explanation(id, text) => preview.update_explanation(&id, &text),
    }
}

fn preview_header(ui: &mut Ui, theme: &ThemeConfig, preview: &mut Preview, with_toggle: bool) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(format!("{} Assessment", preview.config().topic)).size(22.0).strong());
            let config = preview.config();
            ui.label(
                RichText::new(format!(
                    "Difficulty: {}   Questions: {}   Type: {}",
                    config.difficulty_label(),
                    config.count_label(),
                    config.type_label()
                ))
                .color(theme.muted_color()),
            );
        });
        if with_toggle {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let label = if preview.show_explanations() {
                    "👁 Hide Explanations"
                } else {
                    "👁 Show Explanations"
                };
                if ui.button(label).clicked() {
                    preview.toggle_explanations();
                }
            });
        }
    });
    ui.separator();
}

fn show_welcome(ui: &mut Ui, theme: &ThemeConfig) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("🧠").size(48.0).color(theme.accent_color()));
        ui.label(RichText::new("AI Assessment Creator").size(24.0).strong());
        ui.add_space(6.0);
        ui.set_max_width(420.0);
        ui.label(
            RichText::new(
                "Create professional assessments in minutes with our AI-powered platform. \
                 Just tell our assistant what you need, and we'll handle the rest.",
            )
            .color(theme.muted_color()),
        );
        ui.add_space(8.0);
        ui.label(RichText::new("✨ Start chatting to begin").color(theme.accent_color()));
        ui.add_space(16.0);
        egui::Grid::new("welcome_features").num_columns(2).spacing([12.0, 12.0]).show(ui, |ui| {
            for (i, (title, detail)) in WELCOME_FEATURES.iter().enumerate() {
                card(ui, theme, |ui| {
                    ui.set_width(180.0);
                    ui.label(RichText::new(*title).strong());
                    ui.label(RichText::new(*detail).small().color(theme.muted_color()));
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    });
}
