//! Main application module

mod styles;

use eframe::egui;

use crate::state::{persistence, AppSettings, AppState, BoxSlot};
use crate::ui::{status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct BoxApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last saved box version (for autosave)
    last_saved_version: u64,
    /// Last saved settings (to detect changes)
    last_saved_settings: AppSettings,
}

impl BoxApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_box: Option<shared::BoxSpec>) -> Self {
        let mut state = AppState::default();

        // Load initial box: CLI argument takes priority, then autosave
        if let Some(spec) = initial_box {
            state.slot = BoxSlot::from_spec(spec);
        } else if let Some(autosave) = persistence::load_autosave() {
            state.slot = BoxSlot::from_spec(autosave);
            tracing::info!("Loaded autosaved box");
        }

        styles::configure_styles(&cc.egui_ctx);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let last_saved_version = state.slot.version();
        let last_saved_settings = state.settings.clone();

        Self {
            state,
            viewport,
            last_saved_version,
            last_saved_settings,
        }
    }
}

impl eframe::App for BoxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Autosave box if changed
        let current_version = self.state.slot.version();
        if current_version != self.last_saved_version {
            persistence::autosave(self.state.slot.spec());
            self.last_saved_version = current_version;
        }

        // Persist settings if changed
        if self.state.settings != self.last_saved_settings {
            self.state.settings.save();
            self.last_saved_settings = self.state.settings.clone();
        }

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state, &mut self.viewport);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }
}
