use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::routes::View;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(egui::RichText::new("Welcome").size(32.0).strong().color(colors::TEXT_LIGHT));
        ui.add_space(10.0);

        if let Some(ref message) = state.auth_state.message {
            ui.label(egui::RichText::new(message).color(colors::SUCCESS));
            ui.add_space(10.0);
        }

        ui.add_space(30.0);
        let login_btn = egui::Button::new(egui::RichText::new("Log in").size(18.0))
            .min_size(egui::vec2(200.0, 44.0))
            .fill(colors::ACCENT);
        if ui.add(login_btn).clicked() {
            state.navigate(View::Login);
        }
        ui.add_space(12.0);

        let register_btn = egui::Button::new(egui::RichText::new("Create account").size(18.0))
            .min_size(egui::vec2(200.0, 44.0));
        if ui.add(register_btn).clicked() {
            state.navigate(View::Register);
        }
    });
}
