mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::extrude`, `crate::state`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use boxcarve_gui_lib::extrude;
pub use boxcarve_gui_lib::highlight;
pub use boxcarve_gui_lib::interaction;
pub use boxcarve_gui_lib::state;

use app::BoxApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boxcarve_gui=info".into()),
        )
        .init();

    // Parse --box <path> argument
    let initial_box = parse_box_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Boxcarve — Face Extrusion Editor")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "boxcarve-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(BoxApp::new(cc, initial_box)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_box_arg() -> Option<shared::BoxSpec> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--box" && i + 1 < args.len() {
            let path = &args[i + 1];
            match std::fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<shared::BoxSpec>(&json) {
                    Ok(spec) if spec.is_valid() => {
                        tracing::info!("Loaded box from {path}");
                        return Some(spec);
                    }
                    Ok(_) => {
                        tracing::error!("Box from {path} has a side below the minimum");
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse box JSON from {path}: {e}");
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to read box file {path}: {e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
