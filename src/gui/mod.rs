mod app;
mod assistant;
mod categories;
mod dashboard;
mod exam_tracker;
mod manual_form;
mod reports;
mod support;
mod widgets;

pub use app::launch_gui;
