//! Extrusion engine: grow or shrink the box by pushing one face along
//! its normal axis. The opposite face stays fixed in space, so the
//! center shifts by half the delta.

use shared::{colors, limits, BoxSpec, LogicalFace};

use crate::highlight;
use crate::state::slot::BoxSlot;

/// Compute the box that results from extruding `face` by `delta`.
///
/// Positive delta grows the box, negative shrinks it. Returns None when
/// any resulting side would fall below the minimum, in which case the
/// current box must be kept as-is.
pub fn resized(spec: &BoxSpec, face: LogicalFace, delta: f64) -> Option<BoxSpec> {
    let axis = face.axis();

    let mut scale = spec.scale;
    scale[axis] += delta;
    if scale.iter().any(|s| *s < limits::MIN_SIDE) {
        return None;
    }

    let mut position = spec.position;
    position[axis] += face.sign() * delta / 2.0;

    Some(BoxSpec { scale, position })
}

/// Apply an extrusion to the slot: swap in the rebuilt box and paint the
/// extruded face. Returns false (slot untouched) when the resize is
/// blocked by the minimum side length.
pub fn apply(slot: &mut BoxSlot, face: LogicalFace, delta: f64) -> bool {
    match resized(slot.spec(), face, delta) {
        Some(next) => {
            slot.replace(next);
            highlight::paint_face(slot.mesh_mut(), face.first_sub_index(), colors::EXTRUDED_FACE);
            true
        }
        None => {
            tracing::debug!(face = face.name(), delta, "extrusion blocked at minimum side");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> BoxSpec {
        BoxSpec::unit()
    }

    #[test]
    fn test_grow_front_moves_center_forward() {
        let next = resized(&unit(), LogicalFace::Front, 1.5).unwrap();
        assert_eq!(next.scale, [1.0, 1.0, 2.5]);
        assert_eq!(next.position, [0.0, 0.0, 0.75]);
    }

    #[test]
    fn test_grow_back_moves_center_backward() {
        let next = resized(&unit(), LogicalFace::Back, 1.0).unwrap();
        assert_eq!(next.scale, [1.0, 1.0, 2.0]);
        assert_eq!(next.position, [0.0, 0.0, -0.5]);
    }

    #[test]
    fn test_axis_isolation() {
        for face in LogicalFace::all() {
            let next = resized(&unit(), *face, 0.5).unwrap();
            for axis in 0..3 {
                if axis == face.axis() {
                    assert_eq!(next.scale[axis], 1.5);
                } else {
                    assert_eq!(next.scale[axis], 1.0, "face {}", face.name());
                    assert_eq!(next.position[axis], 0.0, "face {}", face.name());
                }
            }
        }
    }

    #[test]
    fn test_opposite_face_stays_fixed() {
        let spec = BoxSpec {
            scale: [2.0, 2.0, 2.0],
            position: [0.5, 0.0, -0.25],
        };
        let cases = [
            (LogicalFace::Front, LogicalFace::Back),
            (LogicalFace::Back, LogicalFace::Front),
            (LogicalFace::Right, LogicalFace::Left),
            (LogicalFace::Left, LogicalFace::Right),
            (LogicalFace::Top, LogicalFace::Bottom),
            (LogicalFace::Bottom, LogicalFace::Top),
        ];
        for (dragged, fixed) in cases {
            let next = resized(&spec, dragged, 0.75).unwrap();
            assert_eq!(
                next.face_plane(fixed),
                spec.face_plane(fixed),
                "dragging {} moved {}",
                dragged.name(),
                fixed.name()
            );
            let moved = next.face_plane(dragged) - spec.face_plane(dragged);
            assert!((moved - dragged.sign() * 0.75).abs() < 1e-12);
        }
    }

    #[test]
    fn test_shrink_below_minimum_is_rejected() {
        assert!(resized(&unit(), LogicalFace::Front, -0.5).is_none());
        // Exactly at the floor is allowed
        let spec = BoxSpec {
            scale: [1.0, 1.0, 2.0],
            position: [0.0, 0.0, 0.5],
        };
        let next = resized(&spec, LogicalFace::Front, -1.0).unwrap();
        assert_eq!(next.scale[2], 1.0);
    }

    #[test]
    fn test_scale_floor_holds_under_sequences() {
        let mut spec = unit();
        let deltas = [0.4, -0.2, 1.3, -2.0, -5.0, 0.1, -0.6, 2.0, -1.9];
        for d in deltas {
            if let Some(next) = resized(&spec, LogicalFace::Right, d) {
                spec = next;
            }
            assert!(spec.is_valid(), "scale fell below floor after {d}");
        }
    }

    #[test]
    fn test_apply_swaps_slot_and_paints_face() {
        let mut slot = BoxSlot::new();
        let v0 = slot.version();
        assert!(apply(&mut slot, LogicalFace::Top, 0.5));
        assert!(slot.version() > v0);
        assert_eq!(slot.spec().scale, [1.0, 1.5, 1.0]);
        assert_eq!(slot.spec().position, [0.0, 0.25, 0.0]);

        // Top quad (vertices 16..20) is painted yellow, rest white
        for v in 0..slot.mesh().vertex_count() {
            let expected = if (16..20).contains(&v) {
                colors::EXTRUDED_FACE
            } else {
                colors::NEUTRAL
            };
            assert_eq!(slot.mesh().color_of(v), expected, "vertex {v}");
        }
    }

    #[test]
    fn test_apply_blocked_leaves_slot_untouched() {
        let mut slot = BoxSlot::new();
        let v0 = slot.version();
        let spec0 = *slot.spec();
        assert!(!apply(&mut slot, LogicalFace::Left, -0.25));
        assert_eq!(slot.version(), v0);
        assert_eq!(*slot.spec(), spec0);
    }
}
