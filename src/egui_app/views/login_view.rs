use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::views::{field_error, labeled_input, status_line};
use crate::shared::routes::View;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new("Welcome Back").size(24.0).color(colors::TEXT_LIGHT));
        ui.add_space(20.0);

        labeled_input(
            ui,
            "Username or email",
            egui::TextEdit::singleline(&mut state.login_form.identifier),
        );
        field_error(ui, state, "identifier");
        ui.add_space(8.0);

        labeled_input(
            ui,
            "Password",
            egui::TextEdit::singleline(&mut state.login_form.password).password(true),
        );
        field_error(ui, state, "password");
        ui.add_space(20.0);

        let submit = egui::Button::new(egui::RichText::new("Login").color(colors::TEXT_LIGHT))
            .fill(colors::ACCENT)
            .min_size(egui::vec2(120.0, 32.0));
        if ui.add_enabled(!state.is_pending(), submit).clicked() {
            state.auth_state.clear_error();
            state.submit_login();
        }

        ui.add_space(10.0);
        if ui.link("Need an account? Register").clicked() {
            state.navigate(View::Register);
        }

        ui.add_space(15.0);
        status_line(ui, state);
    });
}
