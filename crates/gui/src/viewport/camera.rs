use glam::{Mat4, Vec3, Vec4};
use shared::{camera_defaults, limits};

use super::picking::Ray;

/// Arc-ball camera for the 3D viewport
#[derive(Debug, Clone)]
pub struct ArcBallCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
}

impl ArcBallCamera {
    pub fn new() -> Self {
        Self {
            yaw: camera_defaults::YAW,
            pitch: camera_defaults::PITCH,
            distance: camera_defaults::DISTANCE,
            target: Vec3::ZERO,
            fov: 45.0_f32.to_radians(),
        }
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-1.5, 1.5);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta))
            .clamp(limits::LOWER_RADIUS_LIMIT, limits::UPPER_RADIUS_LIMIT);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let right = self.right_vector();
        let up = self.up_vector();
        let offset = right * dx + up * dy;
        self.target += offset;
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * sy,
                self.distance * sp,
                self.distance * cp * cy,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 200.0)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }

    /// Cast a ray from a screen position into the 3D scene
    pub fn screen_ray(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Ray {
        let aspect = rect.width() / rect.height();

        // Screen → NDC
        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        // Inverse view-projection
        let vp_inv = self.view_projection(aspect).inverse();

        // Unproject near and far points
        let near_ndc = Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_ndc = Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near_world = vp_inv * near_ndc;
        let far_world = vp_inv * far_ndc;

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        let direction = (far - near).normalize_or_zero();

        Ray {
            origin: self.eye_position(),
            direction,
        }
    }

    /// Resolve a screen position to the world-space point on the near
    /// plane. Returns None for a degenerate viewport or projection.
    pub fn unproject(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Option<Vec3> {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        let aspect = rect.width() / rect.height();

        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        let vp_inv = self.view_projection(aspect).inverse();
        let near_world = vp_inv * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        if near_world.w.abs() < 1e-6 {
            return None;
        }
        Some(near_world.truncate() / near_world.w)
    }
}

impl Default for ArcBallCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pose() {
        let cam = ArcBallCamera::new();
        assert_eq!(cam.yaw, 2.5);
        assert_eq!(cam.pitch, 1.0);
        assert_eq!(cam.distance, 3.0);
    }

    #[test]
    fn test_zoom_respects_radius_limits() {
        let mut cam = ArcBallCamera::new();
        for _ in 0..100 {
            cam.zoom(0.5);
        }
        assert_eq!(cam.distance, limits::LOWER_RADIUS_LIMIT);
        for _ in 0..100 {
            cam.zoom(-0.5);
        }
        assert_eq!(cam.distance, limits::UPPER_RADIUS_LIMIT);
    }

    #[test]
    fn test_unproject_center_resolves() {
        let cam = ArcBallCamera::new();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0));
        let point = cam.unproject(rect.center(), rect);
        assert!(point.is_some());
        // Near-plane point lies close to the eye, on the view axis
        let p = point.unwrap();
        let to_target = (cam.target - cam.eye_position()).normalize();
        let to_point = (p - cam.eye_position()).normalize();
        assert!(to_target.dot(to_point) > 0.999);
    }

    #[test]
    fn test_unproject_degenerate_rect() {
        let cam = ArcBallCamera::new();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(0.0, 0.0));
        assert!(cam.unproject(egui::pos2(0.0, 0.0), rect).is_none());
    }
}
