use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::views::{field_error, labeled_input, status_line};
use crate::shared::auth::Role;
use crate::shared::routes::View;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new("Create Account").size(24.0).color(colors::TEXT_LIGHT));
        ui.add_space(20.0);

        labeled_input(
            ui,
            "Username",
            egui::TextEdit::singleline(&mut state.register_form.username),
        );
        ui.add_space(8.0);

        labeled_input(ui, "Email", egui::TextEdit::singleline(&mut state.register_form.email));
        field_error(ui, state, "email");
        ui.add_space(8.0);

        labeled_input(
            ui,
            "Password",
            egui::TextEdit::singleline(&mut state.register_form.password).password(true),
        );
        field_error(ui, state, "password");
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Role").color(colors::TEXT_SECONDARY));
        let selected = role_label(state.register_form.role.as_deref()).to_string();
        egui::ComboBox::from_id_salt("register_role")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for role in Role::ALL {
                    let value = Some(role.as_str().to_string());
                    ui.selectable_value(&mut state.register_form.role, value, role.as_str());
                }
            });
        field_error(ui, state, "role");
        ui.add_space(20.0);

        let submit = egui::Button::new(egui::RichText::new("Sign Up").color(colors::TEXT_LIGHT))
            .fill(colors::ACCENT)
            .min_size(egui::vec2(120.0, 32.0));
        if ui.add_enabled(!state.is_pending(), submit).clicked() {
            state.auth_state.clear_error();
            state.submit_register();
        }

        ui.add_space(10.0);
        if ui.link("Already registered? Log in").clicked() {
            state.navigate(View::Login);
        }

        ui.add_space(15.0);
        status_line(ui, state);
    });
}

/// Text shown in the role picker
fn role_label(role: Option<&str>) -> &str {
    role.unwrap_or("Select role")
}
