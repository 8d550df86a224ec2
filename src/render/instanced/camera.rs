//! Orbit camera and picking rays for the instanced scene

use egui::{pos2, Pos2, Rect};
use glam::{Mat4, Vec3};

use crate::map::coords::WorldExtent;

/// Fixed orbit camera looking at the world origin
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Azimuth around the y axis, radians
    pub yaw: f32,
    /// Elevation above the ground plane, radians
    pub pitch: f32,
    pub distance: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: -std::f32::consts::FRAC_PI_2,
            pitch: 0.9,
            distance: 300.0,
            fov: 45.0_f32.to_radians(),
            near: 0.1,
            far: 2000.0,
            aspect: 1.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        ) * self.distance;
        self.target + offset
    }

    pub fn view_projection(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.position(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
        proj * view
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(0.01);
    }

    /// Pull the camera back far enough that the whole extent stays in view
    pub fn frame_extent(&mut self, extent: &WorldExtent) {
        let radius = (extent.half_width.powi(2) + extent.half_depth.powi(2)).sqrt();
        self.distance = radius / (self.fov / 2.0).tan() * 1.15;
        self.far = self.distance * 4.0;
    }

    /// Camera-space right and up vectors used to spread billboards
    pub fn billboard_basis(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.position()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward).normalize();
        (right, up)
    }

    /// Ray from the camera through a screen position normalized to 0..1
    pub fn screen_to_ray(&self, screen_x: f32, screen_y: f32) -> (Vec3, Vec3) {
        let ndc_x = screen_x * 2.0 - 1.0;
        let ndc_y = 1.0 - screen_y * 2.0;

        let inv_view_proj = self.view_projection().inverse();
        let near_point = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, -1.0));
        let far_point = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        (near_point, (far_point - near_point).normalize())
    }

    /// Project a world position into a screen rect. None when the point is
    /// behind the camera.
    pub fn project_to_screen(&self, world: Vec3, rect: Rect) -> Option<Pos2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(pos2(
            rect.min.x + (ndc.x + 1.0) / 2.0 * rect.width(),
            rect.min.y + (1.0 - ndc.y) / 2.0 * rect.height(),
        ))
    }
}

/// Ray/sphere intersection used for native-style picking
pub fn ray_hits_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> bool {
    let to_center = center - origin;
    let t = to_center.dot(dir);
    if t < 0.0 {
        return false;
    }
    let closest = origin + dir * t;
    (closest - center).length_squared() <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_ray_hits_a_sphere_ahead_of_it() {
        let origin = Vec3::new(0.0, 10.0, 0.0);
        let dir = Vec3::new(0.0, -1.0, 0.0);
        assert!(ray_hits_sphere(origin, dir, Vec3::ZERO, 1.0));
        assert!(ray_hits_sphere(origin, dir, Vec3::new(0.5, 0.0, 0.0), 1.0));
        assert!(!ray_hits_sphere(origin, dir, Vec3::new(3.0, 0.0, 0.0), 1.0));
    }

    #[test]
    fn test_ray_ignores_spheres_behind_the_origin() {
        let origin = Vec3::ZERO;
        let dir = Vec3::new(0.0, 0.0, -1.0);
        assert!(!ray_hits_sphere(origin, dir, Vec3::new(0.0, 0.0, 5.0), 1.0));
    }

    #[test]
    fn test_center_ray_passes_through_the_target() {
        let mut camera = OrbitCamera::new();
        camera.set_aspect(1.5);
        let (origin, dir) = camera.screen_to_ray(0.5, 0.5);

        // Distance from the target to the ray line is ~zero.
        let to_target = camera.target - origin;
        let closest = origin + dir * to_target.dot(dir);
        assert!((closest - camera.target).length() < 0.1);
    }

    #[test]
    fn test_projection_round_trips_through_the_ray() {
        let mut camera = OrbitCamera::new();
        camera.set_aspect(4.0 / 3.0);
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0));
        let world = Vec3::new(20.0, 0.0, -10.0);

        let screen = camera.project_to_screen(world, rect).unwrap();
        let (origin, dir) =
            camera.screen_to_ray(screen.x / rect.width(), screen.y / rect.height());
        assert!(ray_hits_sphere(origin, dir, world, 0.5));
    }

    #[test]
    fn test_framing_scales_with_the_extent() {
        let mut camera = OrbitCamera::new();
        camera.frame_extent(&WorldExtent::for_node_count(50));
        let near = camera.distance;
        camera.frame_extent(&WorldExtent::for_node_count(150));
        assert!(camera.distance > near);
    }
}
