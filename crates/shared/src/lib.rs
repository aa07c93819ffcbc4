use serde::{Deserialize, Serialize};

pub mod limits {
    /// Minimum orbit distance of the viewport camera
    pub const LOWER_RADIUS_LIMIT: f32 = 3.0;
    /// Maximum orbit distance of the viewport camera
    pub const UPPER_RADIUS_LIMIT: f32 = 25.0;
    /// No box side may shrink below this length
    pub const MIN_SIDE: f64 = 1.0;
}

pub mod camera_defaults {
    /// Horizontal rotation angle at startup and after reset (radians)
    pub const YAW: f32 = 2.5;
    /// Vertical rotation angle at startup and after reset (radians)
    pub const PITCH: f32 = 1.0;
    /// Distance from target at startup and after reset
    pub const DISTANCE: f32 = 3.0;
}

pub mod colors {
    /// Highlight applied to the armed face on first click
    pub const SELECTED_FACE: [f32; 4] = [0.0, 173.0 / 255.0, 239.0 / 255.0, 1.0];
    /// Highlight applied to the face that was just extruded
    pub const EXTRUDED_FACE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    /// Unpainted vertex color
    pub const NEUTRAL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// One of the six logical faces of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalFace {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

impl LogicalFace {
    /// All faces in mesh build order (two triangles each, see [`face_sub_index`])
    pub fn all() -> &'static [LogicalFace] {
        &[
            LogicalFace::Front,
            LogicalFace::Back,
            LogicalFace::Right,
            LogicalFace::Left,
            LogicalFace::Top,
            LogicalFace::Bottom,
        ]
    }

    /// Map a face sub-index (0..=11) to its logical face.
    ///
    /// Fixed contract: {0,1}=front, {2,3}=back, {4,5}=right,
    /// {6,7}=left, {8,9}=top, {10,11}=bottom.
    pub fn from_sub_index(sub_index: usize) -> Option<LogicalFace> {
        match sub_index {
            0 | 1 => Some(LogicalFace::Front),
            2 | 3 => Some(LogicalFace::Back),
            4 | 5 => Some(LogicalFace::Right),
            6 | 7 => Some(LogicalFace::Left),
            8 | 9 => Some(LogicalFace::Top),
            10 | 11 => Some(LogicalFace::Bottom),
            _ => None,
        }
    }

    /// Lower face sub-index of this face's triangle pair
    pub fn first_sub_index(&self) -> usize {
        match self {
            LogicalFace::Front => 0,
            LogicalFace::Back => 2,
            LogicalFace::Right => 4,
            LogicalFace::Left => 6,
            LogicalFace::Top => 8,
            LogicalFace::Bottom => 10,
        }
    }

    /// Index of the scale/position component this face moves (x=0, y=1, z=2)
    pub fn axis(&self) -> usize {
        match self {
            LogicalFace::Front | LogicalFace::Back => 2,
            LogicalFace::Right | LogicalFace::Left => 0,
            LogicalFace::Top | LogicalFace::Bottom => 1,
        }
    }

    /// Whether this face sits on the positive side of its axis
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            LogicalFace::Front | LogicalFace::Right | LogicalFace::Top
        )
    }

    /// Signed direction of the face along its axis
    pub fn sign(&self) -> f64 {
        if self.is_positive() {
            1.0
        } else {
            -1.0
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LogicalFace::Front => "front",
            LogicalFace::Back => "back",
            LogicalFace::Right => "right",
            LogicalFace::Left => "left",
            LogicalFace::Top => "top",
            LogicalFace::Bottom => "bottom",
        }
    }
}

/// Collapse a picked triangle id into its face sub-index.
///
/// A box mesh triangulates each logical face into two consecutive
/// triangles, so the sub-index is the even member of the pair. Invalid
/// ("no hit") triangle ids must be filtered by the caller.
pub fn face_sub_index(triangle_id: usize) -> usize {
    2 * (triangle_id / 2)
}

/// The editable box: center position plus per-axis side lengths.
///
/// Never mutated in place. Every resize or reset produces a fresh spec
/// (and a fresh mesh) that replaces the current one wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Side lengths (width, height, depth), each >= MIN_SIDE
    pub scale: [f64; 3],
    /// Center of the box
    pub position: [f64; 3],
}

impl BoxSpec {
    /// Unit box centered at the origin
    pub fn unit() -> Self {
        Self {
            scale: [1.0, 1.0, 1.0],
            position: [0.0, 0.0, 0.0],
        }
    }

    /// World coordinate of a face plane along its axis
    pub fn face_plane(&self, face: LogicalFace) -> f64 {
        let a = face.axis();
        self.position[a] + face.sign() * self.scale[a] / 2.0
    }

    /// True when every side length respects the minimum
    pub fn is_valid(&self) -> bool {
        self.scale.iter().all(|s| *s >= limits::MIN_SIDE)
    }
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self::unit()
    }
}
