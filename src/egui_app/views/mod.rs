use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::routes::{View, ROUTES};

pub mod home_view;
pub mod login_view;
pub mod register_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(state.history.can_go_back(), egui::Button::new("◀"))
                    .clicked()
                {
                    state.back();
                }
                if ui
                    .add_enabled(state.history.can_go_forward(), egui::Button::new("▶"))
                    .clicked()
                {
                    state.forward();
                }

                ui.add_space(12.0);
                let current = state.history.current();
                for route in ROUTES.iter() {
                    let text = egui::RichText::new(route.name).color(colors::TEXT_LIGHT);
                    let button = egui::Button::new(text).selected(route == current);
                    if ui.add(button).clicked() {
                        state.navigate(route.view);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        state.history.href(state.history.current()),
                    );
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(24));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.history.current().view {
            View::Home => home_view::render(ui, state),
            View::Login => login_view::render(ui, state),
            View::Register => register_view::render(ui, state),
        });
}

/// Error line under a form field, if it failed validation
pub(crate) fn field_error(ui: &mut egui::Ui, state: &AppState, field: &str) {
    if let Some(message) = state.field_errors.get(field) {
        ui.label(egui::RichText::new(message).color(colors::ERROR).small());
    }
}

/// Request-level status line shared by both forms
pub(crate) fn status_line(ui: &mut egui::Ui, state: &AppState) {
    if let Some(ref error) = state.auth_state.error {
        ui.label(egui::RichText::new(error).color(colors::ERROR));
    }
    if state.auth_state.loading {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
            ui.spinner();
        });
    }
}

pub(crate) fn labeled_input(ui: &mut egui::Ui, label: &str, edit: egui::TextEdit<'_>) {
    ui.label(egui::RichText::new(label).color(colors::TEXT_SECONDARY));
    ui.add_sized([280.0, 28.0], edit);
}
