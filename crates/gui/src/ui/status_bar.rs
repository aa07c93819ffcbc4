use egui::Ui;

use shared::LogicalFace;

use crate::state::session::ClickPhase;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let scale = state.slot.spec().scale;
        ui.weak(format!(
            "Box: {:.2} × {:.2} × {:.2}",
            scale[0], scale[1], scale[2]
        ));

        ui.separator();

        let session = state.controller.session();
        match session.phase() {
            ClickPhase::Idle => {
                ui.weak("Click a face to select it");
            }
            ClickPhase::FaceSelected => {
                let face = session
                    .colored_face
                    .and_then(LogicalFace::from_sub_index)
                    .map(|f| f.name())
                    .unwrap_or("?");
                ui.colored_label(
                    egui::Color32::from_rgb(100, 200, 255),
                    format!("{face} face selected"),
                );
                ui.separator();
                ui.weak("Click again and drag to extrude");
            }
            ClickPhase::Dragging => {
                ui.colored_label(egui::Color32::YELLOW, "Extruding");
                ui.separator();
                ui.weak("Release to finish");
            }
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Boxcarve v0.1");
        });
    });
}
