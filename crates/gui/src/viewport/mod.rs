//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
pub use boxcarve_gui_lib::viewport::{mesh, picking};

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::state::session::{ANGULAR_SENSIBILITY, PANNING_SENSIBILITY};
use crate::state::AppState;
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;
use mesh::MeshData;
use picking::pick_triangle;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    /// Hover position last frame, to detect pointer movement
    last_hover_pos: Option<egui::Pos2>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
            last_hover_pos: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = ArcBallCamera::new();
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );

        // ── Face press / drag / release ─────────────────────
        self.handle_face_interaction(&response, ui, rect, state);

        // ── Camera controls ─────────────────────────────────
        self.handle_camera(&response, ui, state);

        // ── Scroll zoom ─────────────────────────────────────
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll.abs() > 0.1 {
            self.camera.zoom(scroll * 0.01);
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── GL rendering ────────────────────────────────────
        self.render_gl(ui, rect, state);

        // ── Overlays ────────────────────────────────────────
        self.draw_overlays(ui, rect, state);
    }

    fn handle_face_interaction(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        let alt_held = ui.input(|i| i.modifiers.alt);

        // Press: pick the triangle under the cursor (alt is camera orbit)
        if ui.input(|i| i.pointer.primary_pressed()) && response.hovered() && !alt_held {
            let pointer_pos = response.interact_pointer_pos().or_else(|| response.hover_pos());
            if let Some(pos) = pointer_pos {
                let ray = self.camera.screen_ray(pos, rect);
                let picked = pick_triangle(&ray, state.slot.mesh()).map(|hit| hit.triangle_index);
                state.controller.pointer_down(&mut state.slot, picked);
            }
        }

        // Move: resolve the cursor to world coordinates for the drag
        if let Some(pos) = response.hover_pos() {
            if self.last_hover_pos != Some(pos) {
                let world = self
                    .camera
                    .unproject(pos, rect)
                    .map(|p| [p.x as f64, p.y as f64, p.z as f64]);
                state.controller.pointer_move(&mut state.slot, world);
            }
            self.last_hover_pos = Some(pos);
        } else {
            self.last_hover_pos = None;
        }

        // Release
        if ui.input(|i| i.pointer.primary_released()) {
            state.controller.pointer_up(&mut state.slot);
        }
    }

    fn handle_camera(&mut self, response: &egui::Response, ui: &Ui, state: &AppState) {
        // During a face drag the session deadens the inputs, matching
        // how the sensibilities gate orbit and pan.
        let sens = state.controller.camera_sensitivity();
        let angular_k = ANGULAR_SENSIBILITY / sens.angular;
        let panning_k = PANNING_SENSIBILITY / sens.panning;

        if response.dragged_by(egui::PointerButton::Middle)
            || (response.dragged_by(egui::PointerButton::Primary)
                && ui.input(|i| i.modifiers.alt))
        {
            let delta = response.drag_delta();
            self.camera
                .rotate(delta.x * 0.5 * angular_k, delta.y * 0.5 * angular_k);
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            self.camera
                .pan(delta.x * 0.01 * panning_k, delta.y * 0.01 * panning_k);
        }
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera_yaw = self.camera.yaw;
        let camera_pitch = self.camera.pitch;
        let camera_distance = self.camera.distance;
        let camera_target = self.camera.target;
        let camera_fov = self.camera.fov;

        let box_mesh: MeshData = state.slot.mesh().clone();
        let version = state.slot.version();

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(
                move |info, painter| {
                    let gl = painter.gl();

                    let camera = ArcBallCamera {
                        yaw: camera_yaw,
                        pitch: camera_pitch,
                        distance: camera_distance,
                        target: camera_target,
                        fov: camera_fov,
                    };

                    let clip = info.clip_rect_in_pixels();
                    let viewport = [
                        clip.left_px as f32,
                        clip.from_bottom_px as f32,
                        clip.width_px as f32,
                        clip.height_px as f32,
                    ];

                    if let Ok(mut r) = renderer_clone.lock() {
                        r.update_grid(gl, &grid_settings);
                        r.update_axes(gl, &axes_settings);
                        r.sync_box(gl, &box_mesh, version);

                        let render_params = gl_renderer::RenderParams {
                            viewport,
                            grid_visible: grid_settings.visible,
                            axes_visible: axes_settings.visible,
                            axes_thickness: axes_settings.thickness,
                            bg_color,
                        };
                        r.paint(gl, &camera, &render_params);
                    }
                },
            )),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        // Camera info overlay
        let overlay_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
            egui::vec2(136.0, 44.0),
        );
        painter.rect_filled(
            overlay_rect,
            4.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
        );
        painter.text(
            overlay_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
                self.camera.distance,
                self.camera.yaw.to_degrees(),
                self.camera.pitch.to_degrees(),
            ),
            egui::FontId::monospace(10.0),
            egui::Color32::from_rgb(160, 160, 170),
        );

        // Navigation hint while idle
        if state.controller.session().colored_face.is_none() {
            painter.text(
                egui::pos2(rect.center().x, rect.bottom() - 20.0),
                egui::Align2::CENTER_BOTTOM,
                "Click a face, click again and drag to extrude · MMB orbit · RMB pan · Scroll zoom",
                egui::FontId::proportional(11.0),
                egui::Color32::from_rgb(100, 100, 110),
            );
        }
    }
}
