use std::time::Instant;

use eframe::egui::{self, RichText, Ui};

use super::assistant::AssistantPage;
use super::manual_form::{FormOutcome, ManualFormPage};
use super::widgets::{card, card_title, page_header, primary_button, stat_card, status_line};
use crate::dashboard::{CreationMode, Dashboard, STATS};
use crate::theme::ThemeConfig;

enum Creator {
    Choosing,
    Manual(ManualFormPage),
    Ai(AssistantPage),
}

pub struct DashboardPage {
    dashboard: Dashboard,
    creator: Option<Creator>,
    status: Option<String>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            dashboard: Dashboard::default(),
            creator: None,
            status: None,
        }
    }

    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        match &self.creator {
            Some(Creator::Ai(page)) => page.next_deadline(now),
            _ => None,
        }
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &ThemeConfig, now: Instant) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                page_header(ui, theme, "Dashboard", "Overview of your assessments and activity");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if primary_button(ui, theme, "+ New Assessment").clicked() {
                    self.creator = Some(Creator::Choosing);
                }
            });
        });

        ui.columns(STATS.len(), |cols| {
            for (col, stat) in cols.iter_mut().zip(STATS.iter()) {
                stat_card(col, theme, stat.title, stat.value, "", stat.icon);
            }
        });
        ui.add_space(8.0);

        let mut viewed = None;
        card(ui, theme, |ui| {
            card_title(ui, "Recent Assessments");
            for (i, item) in self.dashboard.recent().iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&item.name).strong());
                        ui.label(
                            RichText::new(format!(
                                "{} • {} questions • {}",
                                item.category, item.questions, item.created
                            ))
                            .small()
                            .color(theme.muted_color()),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("View").clicked() {
                            viewed = Some(i);
                        }
                    });
                });
                ui.separator();
            }
        });
        if let Some(index) = viewed {
            if let Some(item) = self.dashboard.view(index) {
                self.status = Some(format!("Opened '{}'.", item.name));
            }
        }
        status_line(ui, theme, &self.status);

        self.show_creator(ui, theme, now);
    }

    fn show_creator(&mut self, ui: &mut Ui, theme: &ThemeConfig, now: Instant) {
        let Some(creator) = self.creator.as_mut() else {
            return;
        };
        let mut open = true;
        let mut next = None;
        let mut saved = None;

        match creator {
            Creator::Choosing => {
                egui::Window::new("Create New Assessment")
                    .id(egui::Id::new("dashboard_new_assessment"))
                    .open(&mut open)
                    .collapsible(false)
                    .resizable(false)
                    .show(ui.ctx(), |ui| {
                        ui.label(
                            RichText::new("Choose how you'd like to create your assessment")
                                .color(theme.muted_color()),
                        );
                        ui.add_space(6.0);
                        let options = [
                            (
                                CreationMode::Manual,
                                "✏ Manual Assessment Creation",
                                "Build questions yourself with full control",
                            ),
                            (
                                CreationMode::Ai,
                                "🤖 AI Assistant",
                                "Let the assistant generate questions for you",
                            ),
                        ];
                        for (mode, title, hint) in options {
                            card(ui, theme, |ui| {
                                if ui.button(RichText::new(title).strong()).clicked() {
                                    next = Some(mode);
                                }
                                ui.label(RichText::new(hint).small().color(theme.muted_color()));
                            });
                            ui.add_space(4.0);
                        }
                    });
            }
            Creator::Manual(form) => {
                let mut outcome = FormOutcome::Editing;
                egui::Window::new("Manual Assessment")
                    .id(egui::Id::new("dashboard_manual_creator"))
                    .open(&mut open)
                    .default_size([720.0, 620.0])
                    .show(ui.ctx(), |ui| {
                        outcome = form.show(ui, theme);
                    });
                match outcome {
                    FormOutcome::Editing => {}
                    FormOutcome::Saved(assessment) => {
                        saved = Some(assessment);
                        open = false;
                    }
                    FormOutcome::Cancelled => open = false,
                }
            }
            Creator::Ai(page) => {
                egui::Window::new("AI Assessment Creator")
                    .id(egui::Id::new("dashboard_ai_creator"))
                    .open(&mut open)
                    .default_size([960.0, 640.0])
                    .show(ui.ctx(), |ui| {
                        page.show(ui, theme, now);
                    });
            }
        }

        if let Some(assessment) = saved {
            self.dashboard.record_saved(&assessment);
            self.status = Some(format!("Saved '{}'.", assessment.title));
        }
        self.creator = match next {
            Some(CreationMode::Manual) => Some(Creator::Manual(ManualFormPage::new())),
            Some(CreationMode::Ai) => Some(Creator::Ai(AssistantPage::new("dashboard_creator", now))),
            None if open => self.creator.take(),
            None => None,
        };
    }
}
