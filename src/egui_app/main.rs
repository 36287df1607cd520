/**
 * authportal - Main Entry Point
 *
 * Loads configuration, installs logging and starts the eframe window with
 * the home, login and registration screens.
 */
use eframe::egui;
use authportal::egui_app::{views, AppState, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            eprintln!("Set {} to the API base URL.", authportal::egui_app::config::API_URL_VAR);
            std::process::exit(1);
        }
    };
    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "authportal",
        options,
        Box::new(|_cc| Ok(Box::new(PortalApp { state }))),
    )?;
    Ok(())
}

struct PortalApp {
    state: AppState,
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_pending();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        if self.state.is_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
