use std::path::PathBuf;
use std::time::Instant;

use eframe::{
    egui::{self, menu, Align, CentralPanel, Context, Layout, RichText, ScrollArea, SidePanel, TopBottomPanel},
    App, CreationContext,
};

use super::assistant::AssistantPage;
use super::categories::CategoriesPage;
use super::dashboard::DashboardPage;
use super::exam_tracker::ExamTrackerPage;
use super::reports::ReportsPage;
use super::support::SupportPage;
use super::widgets::card;
use crate::routes::Route;
use crate::settings::{save_settings, Settings};
use crate::theme::{apply_theme, ensure_theme_files, load_presets, load_theme, save_theme, ThemeConfig};

const DEFAULT_SIZE: (f32, f32) = (1280.0, 800.0);

/// Live state of whichever page the router shows. Rebuilt on every navigation.
enum Page {
    Dashboard(DashboardPage),
    Categories(CategoriesPage),
    Reports(ReportsPage),
    ExamTracker(ExamTrackerPage),
    Assistant(AssistantPage),
    Support(SupportPage),
    NotFound(String),
}

impl Page {
    fn build(route: &Route, now: Instant) -> Self {
        match route {
            Route::Dashboard => Page::Dashboard(DashboardPage::new()),
            Route::Categories => Page::Categories(CategoriesPage::new()),
            Route::Reports => Page::Reports(ReportsPage::new()),
            Route::ExamTracker => Page::ExamTracker(ExamTrackerPage::new()),
            Route::AiAssistant => Page::Assistant(AssistantPage::new("assistant_page", now)),
            Route::SupportSettings => Page::Support(SupportPage::new()),
            Route::NotFound(path) => Page::NotFound(path.clone()),
        }
    }

    fn next_deadline(&self, now: Instant) -> Option<Instant> {
        match self {
            Page::Dashboard(page) => page.next_deadline(now),
            Page::Assistant(page) => page.next_deadline(now),
            _ => None,
        }
    }
}

pub struct AssessmentApp {
    pub settings: Settings,
    base_path: PathBuf,
    theme: ThemeConfig,
    presets: Vec<ThemeConfig>,
    route: Route,
    page: Page,
    window_size: Option<(f32, f32)>,
}

impl AssessmentApp {
    pub fn new(cc: &CreationContext<'_>, base_path: PathBuf, settings: Settings, initial: Route) -> Self {
        if let Err(e) = ensure_theme_files(&base_path) {
            log::error!("Could not write theme files under {}: {e}", base_path.display());
        }
        let presets = load_presets(&base_path);
        let theme = load_theme(&base_path, settings.ui.last_theme.as_deref());
        apply_theme(&theme, &cc.egui_ctx);

        let page = Page::build(&initial, Instant::now());
        Self {
            window_size: settings.ui.window_size,
            settings,
            base_path,
            theme,
            presets,
            route: initial,
            page,
        }
    }

    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        log::info!("Navigating to {}", route.path());
        self.page = Page::build(&route, Instant::now());
        self.route = route;
    }

    fn switch_theme(&mut self, name: &str, ctx: &Context) {
        self.theme = load_theme(&self.base_path, Some(name));
        apply_theme(&self.theme, ctx);
        self.settings.ui.last_theme = Some(self.theme.name.clone());
        if let Err(e) = save_theme(&self.base_path, &self.theme) {
            log::warn!("Could not save theme: {e}");
        }
        if let Err(e) = save_settings(&self.settings, &self.base_path) {
            log::warn!("Could not save settings: {e}");
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        let mut target = None;
        menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let preset_names: Vec<String> = self.presets.iter().map(|p| p.name.clone()).collect();
                for name in preset_names {
                    let selected = self.theme.name == name;
                    if ui.selectable_label(selected, name.clone()).clicked() {
                        self.switch_theme(&name, ctx);
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Go", |ui| {
                for route in Route::navigation() {
                    let label = format!("{} {}", route.icon(), route.title());
                    if ui.selectable_label(self.route == route, label).clicked() {
                        target = Some(route);
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Support & FAQ").clicked() {
                    target = Some(Route::SupportSettings);
                    ui.close_menu();
                }
            });
        });
        if let Some(route) = target {
            self.navigate(route);
        }
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(RichText::new("Assessment Pro").size(18.0).strong().color(self.theme.accent_color()));
        ui.add_space(12.0);

        let mut target = None;
        for route in Route::navigation() {
            let label = RichText::new(format!("{}  {}", route.icon(), route.title())).size(15.0);
            let button = egui::Button::new(label)
                .selected(self.route == route)
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                target = Some(route);
            }
        }
        if let Some(route) = target {
            self.navigate(route);
        }
    }

    fn render_not_found(&mut self, ui: &mut egui::Ui, path: &str) {
        let mut back = false;
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            card(ui, &self.theme, |ui| {
                ui.label(RichText::new("404").size(40.0).strong());
                ui.label(RichText::new("Page not found").size(18.0));
                ui.label(RichText::new(format!("No page lives at {path}")).color(self.theme.muted_color()));
                ui.add_space(8.0);
                if ui.link("Back to Dashboard").clicked() {
                    back = true;
                }
            });
        });
        if back {
            self.navigate(Route::Dashboard);
        }
    }

    fn render_page(&mut self, ui: &mut egui::Ui, now: Instant) {
        if let Page::NotFound(path) = &self.page {
            let path = path.clone();
            self.render_not_found(ui, &path);
            return;
        }

        let theme = &self.theme;
        match &mut self.page {
            Page::Assistant(page) => page.show(ui, theme, now),
            page => {
                ScrollArea::vertical()
                    .id_source("page_scroll")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| match page {
                        Page::Dashboard(p) => p.show(ui, theme, now),
                        Page::Categories(p) => p.show(ui, theme),
                        Page::Reports(p) => p.show(ui, theme),
                        Page::ExamTracker(p) => p.show(ui, theme),
                        Page::Support(p) => p.show(ui, theme),
                        Page::Assistant(_) | Page::NotFound(_) => {}
                    });
            }
        }
    }
}

impl App for AssessmentApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        apply_theme(&self.theme, ctx);
        let now = Instant::now();

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.window_size = Some((rect.width(), rect.height()));
        }

        TopBottomPanel::top("menu_bar").show(ctx, |ui| self.render_menu_bar(ctx, ui));

        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.label(RichText::new(self.route.path()).small().color(self.theme.muted_color()));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(self.base_path.display().to_string()).small().color(self.theme.muted_color()));
                });
            });
        });

        SidePanel::left("nav")
            .resizable(false)
            .exact_width(210.0)
            .show(ctx, |ui| self.render_sidebar(ui));

        CentralPanel::default().show(ctx, |ui| self.render_page(ui, now));

        if let Some(deadline) = self.page.next_deadline(now) {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.ui.window_size = self.window_size;
        self.settings.ui.last_page = Some(self.route.path().to_string());
        if let Err(e) = save_settings(&self.settings, &self.base_path) {
            log::warn!("Could not save settings on exit: {e}");
        }
    }
}

pub fn launch_gui(base_path: PathBuf, settings: Settings, initial: Route) -> eframe::Result<()> {
    let (width, height) = settings.ui.window_size.unwrap_or(DEFAULT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Assessment Pro")
            .with_inner_size([width, height])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Assessment Pro",
        native_options,
        Box::new(move |cc| Box::new(AssessmentApp::new(cc, base_path, settings, initial))),
    )
}
