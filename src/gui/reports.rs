use eframe::egui::{self, RichText, Ui};

use super::widgets::{card, card_title, labelled_bar, page_header, primary_button, stat_card};
use crate::reports::{
    export_report, filter_label, ReportFilters, ASSESSMENT_FILTERS, AVG_SCORES, BY_DIFFICULTY,
    CATEGORY_FILTERS, COMPLETION_STATUS, DEPARTMENTS, HEADLINE_METRICS, MONTHLY_TRENDS,
    SKILL_GAPS, TOP_PERFORMERS,
};
use crate::theme::{parse_color, score_color, ThemeConfig};

const METRIC_ICONS: [&str; 4] = ["👥", "🏆", "🎯", "📈"];

pub struct ReportsPage {
    filters: ReportFilters,
    status: Option<Result<String, String>>,
}

impl ReportsPage {
    pub fn new() -> Self {
        Self {
            filters: ReportFilters::default(),
            status: None,
        }
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &ThemeConfig) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                page_header(
                    ui,
                    theme,
                    "Analytics & Reports",
                    "Comprehensive assessment performance insights",
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if primary_button(ui, theme, "⬇ Export Report").clicked() {
                    export_report(&self.filters);
                    self.status = Some(Ok("Report export started.".to_string()));
                }
            });
        });

        self.show_filters(ui, theme);
        ui.add_space(8.0);

        ui.columns(4, |cols| {
            for (i, metric) in HEADLINE_METRICS.iter().enumerate() {
                stat_card(&mut cols[i], theme, metric.label, metric.value, metric.note, METRIC_ICONS[i]);
            }
        });
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            card(&mut cols[0], theme, |ui| {
                card_title(ui, "Performance by Category");
                for row in AVG_SCORES {
                    let trend = if row.improvement >= 0.0 { "▲" } else { "▼" };
                    labelled_bar(
                        ui,
                        row.name,
                        row.score,
                        100.0,
                        format!("{}% • {} {:+.1}%", row.score, trend, row.improvement),
                        theme.accent_color(),
                    );
                }
            });
            card(&mut cols[1], theme, |ui| {
                card_title(ui, "Assessment Completion Status");
                for slice in COMPLETION_STATUS {
                    labelled_bar(
                        ui,
                        slice.name,
                        slice.percent,
                        100.0,
                        format!("{}% ({})", slice.percent, slice.count),
                        parse_color(slice.color),
                    );
                }
            });
        });
        ui.add_space(8.0);

        card(ui, theme, |ui| {
            card_title(ui, "Assessment Trends (6 months)");
            let max = MONTHLY_TRENDS.iter().map(|t| t.assessments).max().unwrap_or(1) as f32;
            egui::Grid::new("trend_grid").num_columns(4).spacing([16.0, 4.0]).show(ui, |ui| {
                for heading in ["Month", "Assessments", "Completion", "Avg Score"] {
                    ui.label(RichText::new(heading).strong());
                }
                ui.end_row();
                for t in MONTHLY_TRENDS {
                    ui.label(t.month);
                    ui.add(
                        egui::ProgressBar::new(t.assessments as f32 / max)
                            .fill(theme.accent_color())
                            .text(t.assessments.to_string()),
                    );
                    ui.label(format!("{}%", t.completion_rate));
                    ui.label(format!("{}%", t.avg_score));
                    ui.end_row();
                }
            });
        });
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            card(&mut cols[0], theme, |ui| {
                card_title(ui, "Performance by Difficulty");
                for row in BY_DIFFICULTY {
                    labelled_bar(
                        ui,
                        row.difficulty,
                        row.avg_score,
                        100.0,
                        format!("avg {}% • pass {}% • {} people", row.avg_score, row.pass_rate, row.participants),
                        score_color(row.avg_score),
                    );
                }
            });
            card(&mut cols[1], theme, |ui| {
                card_title(ui, "Department Performance");
                for row in DEPARTMENTS {
                    labelled_bar(
                        ui,
                        row.department,
                        row.avg_score,
                        100.0,
                        format!("{}% • {}% complete", row.avg_score, row.completion_rate),
                        theme.success_color(),
                    );
                }
            });
        });
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            card(&mut cols[0], theme, |ui| {
                card_title(ui, "Skill Gap Analysis");
                for gap in SKILL_GAPS {
                    labelled_bar(
                        ui,
                        gap.skill,
                        gap.current,
                        gap.target,
                        format!("{} / {} (gap {})", gap.current, gap.target, gap.gap()),
                        theme.warning_color(),
                    );
                }
            });
            card(&mut cols[1], theme, |ui| {
                card_title(ui, "Top Performers");
                for (i, p) in TOP_PERFORMERS.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("#{}", i + 1)).strong().color(theme.accent_color()));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(p.name).strong());
                            ui.label(
                                RichText::new(format!("{} • {} assessments", p.department, p.assessments))
                                    .small()
                                    .color(theme.muted_color()),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(format!("{}%", p.avg_score)).strong().color(score_color(p.avg_score)));
                        });
                    });
                    ui.separator();
                }
            });
        });
    }

    fn show_filters(&mut self, ui: &mut Ui, theme: &ThemeConfig) {
        card(ui, theme, |ui| {
            card_title(ui, "Filters & Settings");
            ui.horizontal_wrapped(|ui| {
                ui.label("Assessment");
                egui::ComboBox::from_id_source("report_assessment")
                    .selected_text(filter_label(&ASSESSMENT_FILTERS, &self.filters.assessment))
                    .show_ui(ui, |ui| {
                        for (value, label) in ASSESSMENT_FILTERS {
                            ui.selectable_value(&mut self.filters.assessment, value.to_string(), label);
                        }
                    });
                ui.label("Category");
                egui::ComboBox::from_id_source("report_category")
                    .selected_text(filter_label(&CATEGORY_FILTERS, &self.filters.category))
                    .show_ui(ui, |ui| {
                        for (value, label) in CATEGORY_FILTERS {
                            ui.selectable_value(&mut self.filters.category, value.to_string(), label);
                        }
                    });
                ui.label("Date From");
                ui.add(egui::TextEdit::singleline(&mut self.filters.from).desired_width(90.0).hint_text("YYYY-MM-DD"));
                ui.label("Date To");
                ui.add(egui::TextEdit::singleline(&mut self.filters.to).desired_width(90.0).hint_text("YYYY-MM-DD"));
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if primary_button(ui, theme, "Apply Filters").clicked() {
                    self.status = Some(match self.filters.apply() {
                        Ok(applied) => Ok(format!("Filters applied: {} to {}", applied.from, applied.to)),
                        Err(e) => {
                            log::warn!("Report filters rejected: {e}");
                            Err(e.to_string())
                        }
                    });
                }
                match &self.status {
                    Some(Ok(msg)) => {
                        ui.label(RichText::new(msg).color(theme.success_color()));
                    }
                    Some(Err(msg)) => {
                        ui.label(RichText::new(msg).color(theme.danger_color()));
                    }
                    None => {}
                }
            });
        });
    }
}
