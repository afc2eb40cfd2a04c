use chrono::Local;
use eframe::egui::{self, RichText, Ui};

use super::widgets::{card, card_title, danger_button, page_header, primary_button, swatch};
use crate::catalog::{CategoryList, NewCategory};
use crate::theme::{format_rgb, parse_color, parse_rgb, ThemeConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogTarget {
    New,
    Edit(u32),
}

pub struct CategoriesPage {
    list: CategoryList,
    dialog: Option<DialogTarget>,
    draft: NewCategory,
}

impl CategoriesPage {
    pub fn new() -> Self {
        Self {
            list: CategoryList::sample(),
            dialog: None,
            draft: NewCategory::default(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &ThemeConfig) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                page_header(ui, theme, "Categories", "Organize your assessments by categories");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if primary_button(ui, theme, "+ New Category").clicked() {
                    self.draft = NewCategory::default();
                    self.dialog = Some(DialogTarget::New);
                }
            });
        });

        let mut delete = None;
        let mut edit = None;
        card(ui, theme, |ui| {
            card_title(ui, "All Categories");
            egui::Grid::new("categories_table")
                .num_columns(4)
                .striped(true)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for heading in ["Name", "Assessments", "Date Created", "Actions"] {
                        ui.label(RichText::new(heading).strong().color(theme.muted_color()));
                    }
                    ui.end_row();

                    for category in self.list.items() {
                        ui.horizontal(|ui| {
                            swatch(ui, parse_color(&category.color));
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&category.name).strong());
                                if !category.description.is_empty() {
                                    ui.label(
                                        RichText::new(&category.description)
                                            .small()
                                            .color(theme.muted_color()),
                                    );
                                }
                            });
                        });
                        ui.label(category.assessments.to_string());
                        ui.label(category.date_created.format("%Y-%m-%d").to_string());
                        ui.horizontal(|ui| {
                            if ui.button("Edit").clicked() {
                                edit = Some(category.id);
                            }
                            if danger_button(ui, theme, "Delete").clicked() {
                                delete = Some(category.id);
                            }
                        });
                        ui.end_row();
                    }
                });
            if self.list.is_empty() {
                ui.label(RichText::new("No categories yet.").color(theme.muted_color()));
            }
        });

        if let Some(id) = delete {
            self.list.delete(id);
        }
        if let Some(id) = edit {
            if let Some(category) = self.list.get(id) {
                self.draft = NewCategory::from_category(category);
                self.dialog = Some(DialogTarget::Edit(id));
            }
        }

        self.show_dialog(ui);
    }

    fn show_dialog(&mut self, ui: &mut Ui) {
        let Some(target) = self.dialog else {
            return;
        };
        let title = match target {
            DialogTarget::New => "Create New Category",
            DialogTarget::Edit(_) => "Edit Category",
        };

        let mut open = true;
        let mut submit = false;
        let mut cancel = false;
        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ui.ctx(), |ui| {
                egui::Grid::new("category_form").num_columns(2).show(ui, |ui| {
                    ui.label("Category Name");
                    ui.add(egui::TextEdit::singleline(&mut self.draft.name).hint_text("Enter category name"));
                    ui.end_row();

                    ui.label("Description");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.draft.description)
                            .hint_text("Enter category description"),
                    );
                    ui.end_row();

                    ui.label("Color Tag");
                    ui.horizontal(|ui| {
                        let mut rgb = parse_rgb(&self.draft.color).unwrap_or([0x3B, 0x82, 0xF6]);
                        if ui.color_edit_button_srgb(&mut rgb).changed() {
                            self.draft.color = format_rgb(rgb);
                        }
                        ui.add(egui::TextEdit::singleline(&mut self.draft.color).desired_width(90.0));
                    });
                    ui.end_row();
                });
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    let label = match target {
                        DialogTarget::New => "Create Category",
                        DialogTarget::Edit(_) => "Save Changes",
                    };
                    if ui.button(label).clicked() {
                        submit = true;
                    }
                });
            });

        if submit {
            let done = match target {
                DialogTarget::New => self
                    .list
                    .add(&self.draft, Local::now().date_naive())
                    .is_some(),
                DialogTarget::Edit(id) => self.list.update(id, &self.draft),
            };
            // A blank name keeps the dialog open.
            if done {
                open = false;
            }
        }
        if cancel || !open {
            self.dialog = None;
            self.draft = NewCategory::default();
        }
    }
}
