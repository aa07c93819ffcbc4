//! The stable slot holding the current editable box.
//!
//! The mesh geometry is immutable once built, so "resizing" the box is a
//! destroy-and-rebuild: a new spec produces a new mesh that replaces the
//! old one wholesale. The version counter is how downstream holders (the
//! GL renderer) learn that their copy is stale and must dispose its GPU
//! buffers and re-upload.

use shared::BoxSpec;

use crate::viewport::mesh::{box_mesh, MeshData};

pub struct BoxSlot {
    spec: BoxSpec,
    mesh: MeshData,
    version: u64,
}

impl BoxSlot {
    /// Fresh unit box at the origin
    pub fn new() -> Self {
        Self::from_spec(BoxSpec::unit())
    }

    pub fn from_spec(spec: BoxSpec) -> Self {
        Self {
            spec,
            mesh: box_mesh(&spec),
            version: 1,
        }
    }

    pub fn spec(&self) -> &BoxSpec {
        &self.spec
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// In-place mesh access (vertex color painting). Bumps the version so
    /// the GPU copy follows.
    pub fn mesh_mut(&mut self) -> &mut MeshData {
        self.version += 1;
        &mut self.mesh
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Swap in a new box: dispose the current mesh, build a fresh one.
    pub fn replace(&mut self, next: BoxSpec) {
        self.spec = next;
        self.mesh = box_mesh(&next);
        self.version += 1;
    }

    /// Back to the unit box at the origin
    pub fn reset(&mut self) {
        self.replace(BoxSpec::unit());
    }
}

impl Default for BoxSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::colors;

    #[test]
    fn test_new_slot_is_unit_box() {
        let slot = BoxSlot::new();
        assert_eq!(*slot.spec(), BoxSpec::unit());
        assert_eq!(slot.mesh().vertex_count(), 24);
    }

    #[test]
    fn test_replace_bumps_version_and_rebuilds() {
        let mut slot = BoxSlot::new();
        let v0 = slot.version();

        crate::highlight::paint_face(slot.mesh_mut(), 0, colors::SELECTED_FACE);
        let v1 = slot.version();
        assert!(v1 > v0);

        let next = BoxSpec {
            scale: [1.0, 1.0, 2.5],
            position: [0.0, 0.0, 0.75],
        };
        slot.replace(next);
        assert!(slot.version() > v1);
        assert_eq!(*slot.spec(), next);

        // Rebuild drops the old paint
        for v in 0..slot.mesh().vertex_count() {
            assert_eq!(slot.mesh().color_of(v), colors::NEUTRAL);
        }
    }

    #[test]
    fn test_reset_restores_unit_box() {
        let mut slot = BoxSlot::from_spec(BoxSpec {
            scale: [4.0, 2.0, 3.0],
            position: [1.0, 0.0, -1.0],
        });
        slot.reset();
        assert_eq!(*slot.spec(), BoxSpec::unit());
    }
}
