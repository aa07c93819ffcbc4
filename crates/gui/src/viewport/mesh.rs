use glam::Vec3;
use shared::{colors, BoxSpec};

/// Floats per vertex: position(3) + normal(3) + RGBA color(4)
pub const VERTEX_STRIDE: usize = 10;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b, a]
#[derive(Clone)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position_of(&self, vertex: usize) -> Vec3 {
        let base = vertex * VERTEX_STRIDE;
        Vec3::new(
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        )
    }

    pub fn color_of(&self, vertex: usize) -> [f32; 4] {
        let base = vertex * VERTEX_STRIDE + 6;
        [
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
            self.vertices[base + 3],
        ]
    }

    pub fn set_color_of(&mut self, vertex: usize, color: [f32; 4]) {
        let base = vertex * VERTEX_STRIDE + 6;
        self.vertices[base..base + 4].copy_from_slice(&color);
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

// ── Box mesh ─────────────────────────────────────────────────

/// Build the box mesh for a spec, all vertices neutral white.
///
/// 24 vertices, 12 triangles, two consecutive triangles per logical
/// face. The face order (front, back, right, left, top, bottom) fixes
/// the face sub-index table: triangles {0,1} are the front face,
/// {2,3} the back, and so on.
pub fn box_mesh(spec: &BoxSpec) -> MeshData {
    let hw = (spec.scale[0] / 2.0) as f32;
    let hh = (spec.scale[1] / 2.0) as f32;
    let hd = (spec.scale[2] / 2.0) as f32;
    let c = Vec3::new(
        spec.position[0] as f32,
        spec.position[1] as f32,
        spec.position[2] as f32,
    );

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front (+Z)
        ([Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)], Vec3::Z),
        // Back (-Z)
        ([Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd)], Vec3::NEG_Z),
        // Right (+X)
        ([Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd)], Vec3::X),
        // Left (-X)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, hh, -hd)], Vec3::NEG_X),
        // Top (+Y)
        ([Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd), Vec3::new(-hw, hh, -hd)], Vec3::Y),
        // Bottom (-Y)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)], Vec3::NEG_Y),
    ];

    let mut vertices = Vec::with_capacity(24 * VERTEX_STRIDE);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / VERTEX_STRIDE) as u32;
        for v in quad {
            push_vert(&mut vertices, c + *v, *normal, colors::NEUTRAL);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

// ── Grid and axes ────────────────────────────────────────────

pub fn grid(range: i32, cell_size: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let grid_color = [0.25_f32, 0.25, 0.25, opacity];
    let origin_color_x = [0.5_f32, 0.2, 0.2, opacity * 0.7];
    let origin_color_z = [0.2_f32, 0.2, 0.5, opacity * 0.7];

    let extent = range as f32 * cell_size;

    for i in -range..=range {
        let f = i as f32 * cell_size;
        let color = if i == 0 { origin_color_z } else { grid_color };
        // Line along Z
        push_line_vert(&mut vertices, f, 0.0, -extent, color);
        push_line_vert(&mut vertices, f, 0.0, extent, color);

        let color = if i == 0 { origin_color_x } else { grid_color };
        // Line along X
        push_line_vert(&mut vertices, -extent, 0.0, f, color);
        push_line_vert(&mut vertices, extent, 0.0, f, color);
    }

    LineMeshData { vertices }
}

pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let r = [0.9_f32, 0.2, 0.2, 1.0];
    let g = [0.2_f32, 0.8, 0.2, 1.0];
    let b = [0.2_f32, 0.3, 0.9, 1.0];

    // X axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, r);
    push_line_vert(&mut vertices, length, 0.0, 0.0, r);
    // Y axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, g);
    push_line_vert(&mut vertices, 0.0, length, 0.0, g);
    // Z axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, b);
    push_line_vert(&mut vertices, 0.0, 0.0, length, b);

    LineMeshData { vertices }
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 4]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2], c[3]]);
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{face_sub_index, LogicalFace};

    fn triangle_centroid(mesh: &MeshData, tri: usize) -> Vec3 {
        let i0 = mesh.indices[tri * 3] as usize;
        let i1 = mesh.indices[tri * 3 + 1] as usize;
        let i2 = mesh.indices[tri * 3 + 2] as usize;
        (mesh.position_of(i0) + mesh.position_of(i1) + mesh.position_of(i2)) / 3.0
    }

    #[test]
    fn test_unit_box_shape() {
        let mesh = box_mesh(&BoxSpec::unit());
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        for v in 0..mesh.vertex_count() {
            assert_eq!(mesh.color_of(v), shared::colors::NEUTRAL);
        }
    }

    #[test]
    fn test_triangle_pairs_match_face_table() {
        // Every triangle's centroid must lie on the plane of the logical
        // face its sub-index maps to.
        let spec = BoxSpec {
            scale: [2.0, 3.0, 4.0],
            position: [0.5, -0.5, 1.0],
        };
        let mesh = box_mesh(&spec);
        for tri in 0..mesh.triangle_count() {
            let face = LogicalFace::from_sub_index(face_sub_index(tri)).unwrap();
            let centroid = triangle_centroid(&mesh, tri);
            let coord = centroid[face.axis()] as f64;
            let plane = spec.face_plane(face);
            assert!(
                (coord - plane).abs() < 1e-5,
                "triangle {tri} ({}) centroid {coord} not on plane {plane}",
                face.name()
            );
        }
    }

    #[test]
    fn test_box_mesh_bakes_position() {
        let spec = BoxSpec {
            scale: [1.0, 1.0, 2.5],
            position: [0.0, 0.0, 0.75],
        };
        let mesh = box_mesh(&spec);
        let front = spec.face_plane(LogicalFace::Front) as f32;
        let back = spec.face_plane(LogicalFace::Back) as f32;
        let zs: Vec<f32> = (0..mesh.vertex_count())
            .map(|v| mesh.position_of(v).z)
            .collect();
        assert!(zs.iter().all(|z| (*z - front).abs() < 1e-6 || (*z - back).abs() < 1e-6));
    }

    #[test]
    fn test_set_color_of_round_trip() {
        let mut mesh = box_mesh(&BoxSpec::unit());
        mesh.set_color_of(7, [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(mesh.color_of(7), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(mesh.color_of(6), shared::colors::NEUTRAL);
    }

    #[test]
    fn test_grid_and_axes_vertex_counts() {
        let g = grid(5, 1.0, 0.6);
        assert_eq!(g.vertices.len() % 7, 0);
        assert_eq!(g.vertices.len() / 7, (2 * 5 + 1) * 4);

        let a = axes(1.5);
        assert_eq!(a.vertices.len() / 7, 6);
    }
}
