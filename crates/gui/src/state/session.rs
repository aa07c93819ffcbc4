//! Interaction session state.
//!
//! One mutable record for the whole click/drag session, owned by the
//! interaction controller and threaded through every pointer handler —
//! never ambient globals.

/// Default panning input sensibility (higher deadens the input)
pub const PANNING_SENSIBILITY: f32 = 1000.0;
/// Default angular (orbit) input sensibility
pub const ANGULAR_SENSIBILITY: f32 = 2000.0;
/// Deadening value that effectively freezes camera movement during a drag
pub const FROZEN_SENSIBILITY: f32 = 1_000_000.0;

/// Camera input sensibilities; raised to a deadening value while a face
/// drag is in progress so orbit/pan input cannot fight the extrusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSensitivity {
    pub panning: f32,
    pub angular: f32,
}

impl CameraSensitivity {
    pub fn interactive() -> Self {
        Self {
            panning: PANNING_SENSIBILITY,
            angular: ANGULAR_SENSIBILITY,
        }
    }

    pub fn frozen() -> Self {
        Self {
            panning: FROZEN_SENSIBILITY,
            angular: FROZEN_SENSIBILITY,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.angular >= FROZEN_SENSIBILITY
    }
}

impl Default for CameraSensitivity {
    fn default() -> Self {
        Self::interactive()
    }
}

/// Where the session is in the click pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickPhase {
    Idle,
    FaceSelected,
    Dragging,
}

/// Mutable record for one interaction session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// 0 = idle, 1 = face armed, 2 = dragging
    pub click_count: u8,
    /// Face sub-index of the most recent pick (0..=11, always even)
    pub selected_face: Option<usize>,
    /// Face sub-index captured at the arming click; stable across moves
    pub colored_face: Option<usize>,
    /// Single-axis drag reference; which axis depends on the active face.
    /// Only meaningful while click_count == 2.
    pub last_drag: Option<f64>,
    /// Current camera input sensibilities
    pub camera: CameraSensitivity,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            click_count: 0,
            selected_face: None,
            colored_face: None,
            last_drag: None,
            camera: CameraSensitivity::interactive(),
        }
    }

    pub fn phase(&self) -> ClickPhase {
        match self.click_count {
            0 => ClickPhase::Idle,
            1 => ClickPhase::FaceSelected,
            _ => ClickPhase::Dragging,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
