//! Per-vertex face highlighting.
//!
//! The box mesh keeps its highlight in the vertex color channel: the two
//! triangles of one logical face take the highlight color, everything
//! else stays white. Painting always starts from an all-white buffer, so
//! at most one face is ever highlighted.

use shared::colors;

use crate::viewport::mesh::MeshData;

/// Paint the logical face owning `face_sub_index` with `color`.
///
/// All other vertices are reset to neutral white. The face sub-index is
/// expected to be the even pair index (0, 2, 4, 6, 8 or 10); both
/// triangles of the pair are covered by the six index slots starting at
/// `3 * face_sub_index`.
pub fn paint_face(mesh: &mut MeshData, face_sub_index: usize, color: [f32; 4]) {
    let first = 3 * face_sub_index;
    if first + 6 > mesh.indices.len() {
        tracing::debug!(face_sub_index, "paint skipped: sub-index out of range");
        return;
    }

    clear(mesh);
    for slot in first..first + 6 {
        let vertex = mesh.indices[slot] as usize;
        mesh.set_color_of(vertex, color);
    }
}

/// Reset every vertex to neutral white.
pub fn clear(mesh: &mut MeshData) {
    for vertex in 0..mesh.vertex_count() {
        mesh.set_color_of(vertex, colors::NEUTRAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh::box_mesh;
    use shared::{BoxSpec, LogicalFace};

    fn painted_vertices(mesh: &MeshData, color: [f32; 4]) -> Vec<usize> {
        (0..mesh.vertex_count())
            .filter(|v| mesh.color_of(*v) == color)
            .collect()
    }

    #[test]
    fn test_paint_front_colors_its_quad_only() {
        let mut mesh = box_mesh(&BoxSpec::unit());
        paint_face(&mut mesh, 0, colors::SELECTED_FACE);

        // Front face is the first quad: vertices 0..4
        assert_eq!(painted_vertices(&mesh, colors::SELECTED_FACE), vec![0, 1, 2, 3]);
        for v in 4..mesh.vertex_count() {
            assert_eq!(mesh.color_of(v), colors::NEUTRAL);
        }
    }

    #[test]
    fn test_paint_each_face_hits_its_own_quad() {
        for face in LogicalFace::all() {
            let mut mesh = box_mesh(&BoxSpec::unit());
            paint_face(&mut mesh, face.first_sub_index(), colors::EXTRUDED_FACE);
            let quad = face.first_sub_index() / 2 * 4;
            assert_eq!(
                painted_vertices(&mesh, colors::EXTRUDED_FACE),
                vec![quad, quad + 1, quad + 2, quad + 3],
                "face {}",
                face.name()
            );
        }
    }

    #[test]
    fn test_repaint_moves_the_highlight() {
        let mut mesh = box_mesh(&BoxSpec::unit());
        paint_face(&mut mesh, 0, colors::SELECTED_FACE);
        paint_face(&mut mesh, 8, colors::SELECTED_FACE);

        // Top face quad is vertices 16..20; front must be white again
        assert_eq!(
            painted_vertices(&mesh, colors::SELECTED_FACE),
            vec![16, 17, 18, 19]
        );
    }

    #[test]
    fn test_clear_restores_all_white() {
        let mut mesh = box_mesh(&BoxSpec::unit());
        paint_face(&mut mesh, 4, colors::SELECTED_FACE);
        clear(&mut mesh);
        for v in 0..mesh.vertex_count() {
            assert_eq!(mesh.color_of(v), colors::NEUTRAL);
        }
    }

    #[test]
    fn test_out_of_range_sub_index_is_a_no_op() {
        let mut mesh = box_mesh(&BoxSpec::unit());
        paint_face(&mut mesh, 2, colors::SELECTED_FACE);
        let before = mesh.vertices.clone();
        paint_face(&mut mesh, 12, colors::EXTRUDED_FACE);
        assert_eq!(mesh.vertices, before);
    }
}
