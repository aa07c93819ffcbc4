use egui::Ui;

use crate::interaction::InteractionController;
use crate::state::AppState;
use crate::viewport::ViewportPanel;

pub fn show(ui: &mut Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.horizontal(|ui| {
        if ui
            .button("Reset")
            .on_hover_text("Restore the unit box and default camera")
            .clicked()
        {
            action_reset(state, viewport);
        }

        ui.separator();

        ui.checkbox(&mut state.settings.grid.visible, "Grid");
        ui.checkbox(&mut state.settings.axes.visible, "Axes");
    });
}

/// Reset the box and camera to their defaults, discarding any
/// in-progress selection.
pub fn action_reset(state: &mut AppState, viewport: &mut ViewportPanel) {
    state.slot.reset();
    state.controller = InteractionController::new();
    viewport.reset_camera();
    tracing::info!("Reset to unit box");
}
