use eframe::egui::{self, Color32, RichText, Ui};

use super::widgets::{badge, card, danger_button, page_header};
use crate::exams::{Exam, ExamBoard, ExamStatus, ExamTab};
use crate::theme::ThemeConfig;

enum RowAction {
    Primary(u32),
    Delete(u32),
}

pub struct ExamTrackerPage {
    board: ExamBoard,
    status: Option<String>,
}

impl ExamTrackerPage {
    pub fn new() -> Self {
        Self {
            board: ExamBoard::sample(),
            status: None,
        }
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &ThemeConfig) {
        page_header(ui, theme, "Exam Tracker", "Monitor and manage all your assessments");

        ui.horizontal(|ui| {
            for tab in ExamTab::ALL {
                let label = format!("{} ({})", tab.label(), self.board.count(tab));
                if ui.selectable_label(self.board.tab() == tab, label).clicked() {
                    self.board.set_tab(tab);
                    self.status = None;
                }
            }
        });
        ui.separator();

        let mut action = None;
        for exam in self.board.visible() {
            card(ui, theme, |ui| {
                if let Some(a) = exam_row(ui, theme, exam) {
                    action = Some(a);
                }
            });
            ui.add_space(6.0);
        }
        if self.board.visible().next().is_none() {
            ui.label(RichText::new("No exams in this tab.").color(theme.muted_color()));
        }

        match action {
            Some(RowAction::Primary(id)) => match self.board.action(id) {
                Ok(label) => self.status = Some(format!("{label} requested.")),
                Err(e) => log::warn!("{e}"),
            },
            Some(RowAction::Delete(id)) => match self.board.delete(id) {
                Ok(exam) => self.status = Some(format!("Deleted '{}'.", exam.name)),
                Err(e) => log::warn!("{e}"),
            },
            None => {}
        }

        if let Some(msg) = &self.status {
            ui.label(RichText::new(msg).color(theme.muted_color()));
        }
    }
}

fn status_color(theme: &ThemeConfig, status: &ExamStatus) -> Color32 {
    match status {
        ExamStatus::Scheduled => theme.accent_color(),
        ExamStatus::InProgress { .. } => theme.warning_color(),
        ExamStatus::Completed { .. } => theme.success_color(),
    }
}

fn exam_row(ui: &mut Ui, theme: &ThemeConfig, exam: &Exam) -> Option<RowAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(&exam.name).strong().size(15.0));
            let muted = theme.muted_color();
            match exam.status {
                ExamStatus::Scheduled => {
                    ui.label(
                        RichText::new(format!(
                            "📅 {}   🕑 {}   👥 {} participants",
                            exam.date, exam.time, exam.participants
                        ))
                        .color(muted),
                    );
                }
                ExamStatus::InProgress { completed, remaining } => {
                    ui.label(RichText::new(format!("📅 {}   🕑 {}", exam.date, exam.time)).color(muted));
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{completed} completed")).color(theme.success_color()));
                        ui.label(RichText::new(format!("{remaining} remaining")).color(theme.warning_color()));
                    });
                }
                ExamStatus::Completed { avg_score, pass_rate } => {
                    ui.label(
                        RichText::new(format!("📅 {}   👥 {} participants", exam.date, exam.participants))
                            .color(muted),
                    );
                    ui.horizontal(|ui| {
                        ui.label("Avg Score:");
                        ui.label(RichText::new(format!("{avg_score}%")).strong().color(theme.accent_color()));
                        ui.label("Pass Rate:");
                        ui.label(RichText::new(format!("{pass_rate}%")).strong().color(theme.success_color()));
                    });
                }
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if matches!(exam.status, ExamStatus::Completed { .. })
                && danger_button(ui, theme, "Delete").clicked()
            {
                action = Some(RowAction::Delete(exam.id));
            }
            if ui.button(exam.status.tab().action_label()).clicked() {
                action = Some(RowAction::Primary(exam.id));
            }
            badge(ui, exam.status.label(), status_color(theme, &exam.status));
        });
    });
    action
}
