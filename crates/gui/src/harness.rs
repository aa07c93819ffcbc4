//! Headless driver for exercising the interaction pipeline in tests
//! without a window or GL context.

use shared::BoxSpec;

use crate::interaction::InteractionController;
use crate::state::session::SessionState;
use crate::state::slot::BoxSlot;

/// Drives pointer events against a box slot the way the viewport does,
/// minus picking and unprojection (tests supply those results directly).
pub struct TestHarness {
    pub slot: BoxSlot,
    pub controller: InteractionController,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            slot: BoxSlot::new(),
            controller: InteractionController::new(),
        }
    }

    /// Press the primary button with `triangle` under the cursor
    pub fn press_triangle(&mut self, triangle: usize) {
        self.controller.pointer_down(&mut self.slot, Some(triangle));
    }

    /// Press the primary button with nothing under the cursor
    pub fn press_miss(&mut self) {
        self.controller.pointer_down(&mut self.slot, None);
    }

    /// Move the pointer with the cursor resolving to a world point
    pub fn move_resolved(&mut self, x: f64, y: f64, z: f64) {
        self.controller.pointer_move(&mut self.slot, Some([x, y, z]));
    }

    /// Move the pointer with world resolution failing
    pub fn move_unresolved(&mut self) {
        self.controller.pointer_move(&mut self.slot, None);
    }

    /// Release the primary button
    pub fn release(&mut self) {
        self.controller.pointer_up(&mut self.slot);
    }

    pub fn spec(&self) -> &BoxSpec {
        self.slot.spec()
    }

    pub fn session(&self) -> &SessionState {
        self.controller.session()
    }

    /// Color of one mesh vertex
    pub fn vertex_color(&self, vertex: usize) -> [f32; 4] {
        self.slot.mesh().color_of(vertex)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
