pub mod persistence;
pub mod session;
pub mod settings;
pub mod slot;

pub use session::SessionState;
pub use settings::AppSettings;
pub use slot::BoxSlot;

use crate::interaction::InteractionController;

/// Combined application state
pub struct AppState {
    /// The one editable box
    pub slot: BoxSlot,
    /// Pointer-event state machine (owns the session)
    pub controller: InteractionController,
    pub settings: AppSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            slot: BoxSlot::new(),
            controller: InteractionController::new(),
            settings: AppSettings::load(),
        }
    }
}
