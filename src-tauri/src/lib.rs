//! Recipe Ledger Backend
//!
//! Thin Tauri shell over the service bridge:
//! - commands: Tauri command handlers called from the Leptos frontend
//! - recipe-client (crate): config, HTTP calls, error mapping
//! - rolling-logger (crate): file + stderr logging

use std::sync::Arc;

use recipe_client::{HttpRecipeService, RecipeService, ServiceConfig};
use tauri::Manager;

mod commands;

/// Application state shared across commands
pub struct AppState {
    pub service: Arc<dyn RecipeService>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "RecipeLedger")?;

            let config = ServiceConfig::load();
            let service = match HttpRecipeService::new(&config) {
                Ok(service) => service,
                Err(e) => {
                    rolling_logger::error(&format!("HTTP client setup failed: {}", e));
                    return Err(e.into());
                }
            };
            rolling_logger::info(&format!(
                "Service endpoint {} (timeout {}s)",
                service.endpoint(),
                config.timeout.as_secs()
            ));

            app.manage(AppState {
                service: Arc::new(service),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::extract_ingredients,
            commands::generate_recipe,
            commands::service_endpoint,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
