use glam::Vec3;

use super::mesh::{MeshData, VERTEX_STRIDE};

/// A ray in world space
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Möller-Trumbore ray-triangle intersection algorithm.
/// Returns the distance along the ray if hit, or None if no intersection.
pub fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    // Outside triangle (u)
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    // Outside triangle (v)
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    // Intersection is behind ray origin
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Result of picking a triangle in a mesh
#[derive(Clone, Debug)]
pub struct TriangleHit {
    /// Index of the triangle (into mesh.indices / 3)
    pub triangle_index: usize,
    /// Distance from ray origin to hit point
    pub distance: f32,
    /// Normal of the hit triangle
    pub normal: Vec3,
}

/// Find the nearest triangle in a mesh intersected by the ray.
pub fn pick_triangle(ray: &Ray, mesh: &MeshData) -> Option<TriangleHit> {
    let indices = &mesh.indices;
    let tri_count = indices.len() / 3;

    let mut best: Option<TriangleHit> = None;

    for tri_idx in 0..tri_count {
        let v0 = vertex_position(mesh, indices[tri_idx * 3] as usize);
        let v1 = vertex_position(mesh, indices[tri_idx * 3 + 1] as usize);
        let v2 = vertex_position(mesh, indices[tri_idx * 3 + 2] as usize);

        if let Some(dist) = ray_triangle_intersect(ray, v0, v1, v2) {
            if best.as_ref().is_none_or(|b| dist < b.distance) {
                // Stored normal from the first vertex
                let normal = vertex_normal(mesh, indices[tri_idx * 3] as usize);
                best = Some(TriangleHit {
                    triangle_index: tri_idx,
                    distance: dist,
                    normal,
                });
            }
        }
    }

    best
}

fn vertex_position(mesh: &MeshData, index: usize) -> Vec3 {
    let base = index * VERTEX_STRIDE;
    Vec3::new(
        mesh.vertices[base],
        mesh.vertices[base + 1],
        mesh.vertices[base + 2],
    )
}

fn vertex_normal(mesh: &MeshData, index: usize) -> Vec3 {
    let base = index * VERTEX_STRIDE + 3;
    Vec3::new(
        mesh.vertices[base],
        mesh.vertices[base + 1],
        mesh.vertices[base + 2],
    )
}
