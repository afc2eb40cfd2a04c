use eframe::egui::{self, RichText, ScrollArea, Ui};

use super::widgets::{card, card_title, danger_button, primary_button};
use crate::assessment::manual::{
    category_label, KindTag, ManualAssessment, QuestionKind, SavedAssessment, CATEGORY_OPTIONS,
    DIFFICULTY_OPTIONS,
};
use crate::assessment::questions::option_letter;
use crate::theme::ThemeConfig;

/// What the host should do after a frame of the form.
pub enum FormOutcome {
    Editing,
    Saved(SavedAssessment),
    Cancelled,
}

enum QuestionEdit {
    Text(u64, String),
    Points(u64, u32),
    Kind(u64, KindTag),
    Option(u64, usize, String),
    Correct(u64, usize),
    Reference(u64, String),
    Remove(u64),
}

pub struct ManualFormPage {
    form: ManualAssessment,
    show_preview: bool,
}

impl ManualFormPage {
    pub fn new() -> Self {
        Self {
            form: ManualAssessment::new(),
            show_preview: false,
        }
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &ThemeConfig) -> FormOutcome {
        let mut outcome = FormOutcome::Editing;

        ui.horizontal(|ui| {
            ui.label(RichText::new("Create Manual Assessment").size(20.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if primary_button(ui, theme, "💾 Save Assessment").clicked() {
                    outcome = FormOutcome::Saved(self.form.save());
                }
                if ui.button("👁 Preview").clicked() {
                    self.show_preview = true;
                }
            });
        });
        ui.separator();

        ScrollArea::vertical()
            .id_source("manual_form_scroll")
            .auto_shrink([false; 2])
            .max_height((ui.available_height() - 40.0).max(120.0))
            .show(ui, |ui| {
                self.show_basic_info(ui, theme);
                ui.add_space(8.0);
                self.show_questions(ui, theme);
            });

        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                outcome = FormOutcome::Cancelled;
            }
            if primary_button(ui, theme, "Save Assessment").clicked() {
                outcome = FormOutcome::Saved(self.form.save());
            }
        });

        self.show_preview_window(ui, theme);
        outcome
    }

    fn show_basic_info(&mut self, ui: &mut Ui, theme: &ThemeConfig) {
        let form = &mut self.form;
        card(ui, theme, |ui| {
            card_title(ui, "Basic Information");
            egui::Grid::new("manual_basic").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                ui.label("Assessment Title *");
                ui.add(egui::TextEdit::singleline(&mut form.title).hint_text("Enter assessment title"));
                ui.end_row();

                ui.label("Category *");
                let selected = if form.category.is_empty() {
                    "Select category"
                } else {
                    category_label(&form.category)
                };
                egui::ComboBox::from_id_source("manual_category")
                    .selected_text(selected.to_string())
                    .show_ui(ui, |ui| {
                        for (value, label) in CATEGORY_OPTIONS {
                            ui.selectable_value(&mut form.category, value.to_string(), label);
                        }
                    });
                ui.end_row();

                ui.label("Description");
                ui.add(
                    egui::TextEdit::multiline(&mut form.description)
                        .desired_rows(3)
                        .hint_text("Describe what this assessment covers"),
                );
                ui.end_row();

                ui.label("Difficulty Level");
                let selected = DIFFICULTY_OPTIONS
                    .iter()
                    .find(|(v, _)| *v == form.difficulty)
                    .map(|(_, label)| *label)
                    .unwrap_or("Select difficulty");
                egui::ComboBox::from_id_source("manual_difficulty")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (value, label) in DIFFICULTY_OPTIONS {
                            ui.selectable_value(&mut form.difficulty, value.to_string(), label);
                        }
                    });
                ui.end_row();

                ui.label("Time Limit (minutes)");
                ui.add(egui::TextEdit::singleline(&mut form.time_limit).hint_text("60").desired_width(80.0));
                ui.end_row();

                ui.label("Passing Score (%)");
                ui.add(egui::TextEdit::singleline(&mut form.passing_score).hint_text("70").desired_width(80.0));
                ui.end_row();

                ui.label("Instructions for Test Takers");
                ui.add(
                    egui::TextEdit::multiline(&mut form.instructions)
                        .desired_rows(3)
                        .hint_text("Enter any special instructions or guidelines"),
                );
                ui.end_row();
            });
        });
    }

    fn show_questions(&mut self, ui: &mut Ui, theme: &ThemeConfig) {
        let mut edits = Vec::new();
        let mut add = false;

        card(ui, theme, |ui| {
            ui.horizontal(|ui| {
                card_title(ui, &format!("Questions ({})", self.form.questions().len()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("+ Add Question").clicked() {
                        add = true;
                    }
                });
            });

            if self.form.questions().is_empty() {
                ui.label(
                    RichText::new("No questions added yet. Click \"Add Question\" to get started.")
                        .color(theme.muted_color()),
                );
            }

            for (i, q) in self.form.questions().iter().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("Q{}", i + 1)).strong());
                        let mut tag = q.kind.tag();
                        egui::ComboBox::from_id_source(("manual_kind", q.id))
                            .selected_text(tag.label())
                            .show_ui(ui, |ui| {
                                for t in KindTag::ALL {
                                    ui.selectable_value(&mut tag, t, t.label());
                                }
                            });
                        if tag != q.kind.tag() {
                            edits.push(QuestionEdit::Kind(q.id, tag));
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if danger_button(ui, theme, "🗑").clicked() {
                                edits.push(QuestionEdit::Remove(q.id));
                            }
                            let mut points = q.points;
                            if ui
                                .add(egui::DragValue::new(&mut points).clamp_range(1..=100))
                                .changed()
                            {
                                edits.push(QuestionEdit::Points(q.id, points));
                            }
                            ui.label("Points:");
                        });
                    });

                    ui.label("Question Text *");
                    let mut text = q.text.clone();
                    if ui
                        .add(
                            egui::TextEdit::multiline(&mut text)
                                .desired_rows(2)
                                .desired_width(f32::INFINITY)
                                .hint_text("Enter your question here"),
                        )
                        .changed()
                    {
                        edits.push(QuestionEdit::Text(q.id, text));
                    }

                    match &q.kind {
                        QuestionKind::MultipleChoice { options, correct } => {
                            ui.label("Answer Options");
                            for (j, option) in options.iter().enumerate() {
                                ui.horizontal(|ui| {
                                    if ui.radio(*correct == j, "").clicked() {
                                        edits.push(QuestionEdit::Correct(q.id, j));
                                    }
                                    let letter = option_letter(j);
                                    ui.label(format!("{letter})"));
                                    let mut value = option.clone();
                                    if ui
                                        .add(
                                            egui::TextEdit::singleline(&mut value)
                                                .hint_text(format!("Option {letter}")),
                                        )
                                        .changed()
                                    {
                                        edits.push(QuestionEdit::Option(q.id, j, value));
                                    }
                                });
                            }
                        }
                        QuestionKind::ShortAnswer { sample_answer } => {
                            ui.label("Sample Answer (for reference)");
                            let mut value = sample_answer.clone();
                            if ui
                                .add(
                                    egui::TextEdit::singleline(&mut value)
                                        .hint_text("Expected answer or key points"),
                                )
                                .changed()
                            {
                                edits.push(QuestionEdit::Reference(q.id, value));
                            }
                        }
                        QuestionKind::Essay { rubric } => {
                            ui.label("Grading Rubric (optional)");
                            let mut value = rubric.clone();
                            if ui
                                .add(
                                    egui::TextEdit::multiline(&mut value)
                                        .desired_rows(2)
                                        .hint_text("Describe the key points or criteria for grading this essay"),
                                )
                                .changed()
                            {
                                edits.push(QuestionEdit::Reference(q.id, value));
                            }
                        }
                    }
                });
                ui.add_space(6.0);
            }
        });

        if add {
            self.form.add_question();
        }
        for edit in edits {
            let result = match edit {
                QuestionEdit::Text(id, text) => self.form.update_question_text(id, &text),
                QuestionEdit::Points(id, points) => self.form.set_points(id, points),
                QuestionEdit::Kind(id, tag) => self.form.set_kind(id, tag),
                QuestionEdit::Option(id, index, text) => self.form.update_option(id, index, &text),
                QuestionEdit::Correct(id, index) => self.form.set_correct_option(id, index),
                QuestionEdit::Reference(id, text) => self.form.set_reference_answer(id, &text),
                QuestionEdit::Remove(id) => self.form.remove_question(id),
            };
            if let Err(e) = result {
                log::warn!("Question edit rejected: {e}");
            }
        }
    }

    fn show_preview_window(&mut self, ui: &mut Ui, theme: &ThemeConfig) {
        if !self.show_preview {
            return;
        }
        let mut open = self.show_preview;
        let form = &self.form;
        egui::Window::new(format!("Assessment Preview: {}", form.title))
            .id(egui::Id::new("manual_preview_window"))
            .open(&mut open)
            .default_size([560.0, 480.0])
            .vscroll(true)
            .show(ui.ctx(), |ui| {
                ui.group(|ui| {
                    ui.label(RichText::new("Assessment Information").strong());
                    egui::Grid::new("manual_preview_info").num_columns(2).show(ui, |ui| {
                        ui.label(format!("Category: {}", category_label(&form.category)));
                        ui.label(format!("Difficulty: {}", form.difficulty));
                        ui.end_row();
                        ui.label(format!("Time Limit: {} minutes", form.time_limit));
                        ui.label(format!("Passing Score: {}%", form.passing_score));
                        ui.end_row();
                    });
                    if !form.description.is_empty() {
                        ui.label(format!("Description: {}", form.description));
                    }
                });
                ui.add_space(6.0);
                for line in form.preview_lines() {
                    if line.starts_with("Question ") {
                        ui.add_space(4.0);
                        ui.label(RichText::new(line).strong());
                    } else if line.ends_with('✓') {
                        ui.label(RichText::new(line).strong().color(theme.success_color()));
                    } else {
                        ui.label(line);
                    }
                }
            });
        self.show_preview = open;
    }
}
