//! Pointer-event state machine for face selection and extrusion.
//!
//! Two clicks on the same face arm a drag: the first click colors the
//! face, the second starts the extrusion, and subsequent pointer moves
//! push the face along its normal axis. Releasing the pointer during a
//! drag (or with nothing armed) returns the session to idle; releasing
//! after only the arming click keeps the face armed.

use shared::{colors, face_sub_index, LogicalFace};

use crate::extrude;
use crate::highlight;
use crate::state::session::{CameraSensitivity, SessionState};
use crate::state::slot::BoxSlot;

/// Routes pointer events to the highlight and extrusion logic, owning
/// the session record.
#[derive(Debug, Default)]
pub struct InteractionController {
    session: SessionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Sensibilities the camera controls should honor right now
    pub fn camera_sensitivity(&self) -> CameraSensitivity {
        self.session.camera
    }

    /// Handle a primary-button press. `picked_triangle` is the triangle
    /// index under the cursor, or None when the press missed the box.
    pub fn pointer_down(&mut self, slot: &mut BoxSlot, picked_triangle: Option<usize>) {
        let Some(triangle) = picked_triangle else {
            tracing::debug!("pointer down missed the box");
            return;
        };
        let sub = face_sub_index(triangle);

        match self.session.click_count {
            0 => {
                self.session.click_count = 1;
                self.session.selected_face = Some(sub);
                self.session.colored_face = Some(sub);
                highlight::paint_face(slot.mesh_mut(), sub, colors::SELECTED_FACE);
                tracing::debug!(face = sub, "face armed");
            }
            1 => {
                self.session.selected_face = Some(sub);
                if self.session.colored_face == Some(sub) {
                    self.session.click_count = 2;
                    tracing::debug!(face = sub, "drag started");
                } else {
                    // Clicked a different face while armed: re-arm on it
                    highlight::paint_face(slot.mesh_mut(), sub, colors::SELECTED_FACE);
                    self.session.colored_face = Some(sub);
                    tracing::debug!(face = sub, "re-armed on different face");
                }
            }
            _ => {
                self.session.selected_face = Some(sub);
            }
        }
        self.session.camera = CameraSensitivity::frozen();
    }

    /// Handle a pointer move. `world` is the cursor position resolved to
    /// world coordinates, or None when resolution failed this frame.
    pub fn pointer_move(&mut self, slot: &mut BoxSlot, world: Option<[f64; 3]>) {
        if self.session.click_count != 2 {
            return;
        }
        let (Some(selected), Some(colored)) = (self.session.selected_face, self.session.colored_face)
        else {
            tracing::trace!("drag move without an active face");
            return;
        };
        let (Some(face), Some(colored_face)) = (
            LogicalFace::from_sub_index(selected),
            LogicalFace::from_sub_index(colored),
        ) else {
            tracing::trace!(selected, colored, "drag move with out-of-range face index");
            return;
        };
        if face != colored_face {
            tracing::trace!("drag move with mismatched faces");
            return;
        }
        let Some(point) = world else {
            tracing::trace!("cursor did not resolve to world coordinates");
            return;
        };

        let current = point[face.axis()];
        match self.session.last_drag {
            None => {
                // First move of the drag only seeds the reference
                self.session.last_drag = Some(current);
            }
            Some(prev) => {
                let delta = if face.is_positive() {
                    current - prev
                } else {
                    prev - current
                };
                if extrude::apply(slot, face, delta) {
                    self.session.last_drag = Some(current);
                }
            }
        }
    }

    /// Handle a primary-button release.
    ///
    /// A release during a drag, or with nothing colored, clears the
    /// session back to idle. A release right after the arming click
    /// keeps the face colored and armed for the second click.
    pub fn pointer_up(&mut self, slot: &mut BoxSlot) {
        if self.session.click_count == 2 || self.session.colored_face.is_none() {
            if self.session.colored_face.is_some() {
                highlight::clear(slot.mesh_mut());
            }
            self.session.colored_face = None;
            self.session.click_count = 0;
        }
        self.session.selected_face = None;
        self.session.last_drag = None;
        self.session.camera = CameraSensitivity::interactive();
    }
}
