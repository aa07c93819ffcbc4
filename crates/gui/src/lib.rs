// Library crate: exposes the state machine and geometry modules for
// integration tests and the headless harness. GUI-specific modules
// (app, ui, camera, GL rendering) remain in the binary crate.

pub mod extrude;
pub mod harness;
pub mod highlight;
pub mod interaction;
pub mod state;

/// Subset of viewport types usable headlessly (MeshData, Ray, picking).
/// The full viewport (camera, renderer) stays in the binary crate.
pub mod viewport {
    pub mod mesh;
    pub mod picking;
}
