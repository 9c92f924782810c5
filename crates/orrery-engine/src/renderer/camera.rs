//! Orbit-pose camera used for picking and overlay anchoring.
//!
//! The camera *control* (orbiting, damping, auto-rotate) is the host's
//! orbit-control library; it reports its pose each frame through a
//! custom input event. The engine only needs the matching projection so
//! hit tests and overlay anchors agree with what the viewer sees.

use glam::{Vec2, Vec3};

/// Screen-space projection of a world point.
#[derive(Debug, Clone, Copy)]
pub struct Projected {
    /// Screen position in pixels, origin top-left.
    pub screen: Vec2,
    /// Distance along the view direction, world units.
    pub depth: f32,
}

#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Rotation around the Y axis, radians.
    pub azimuth: f32,
    /// Elevation above the orbital plane, radians.
    pub elevation: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view, radians.
    pub fov_y: f32,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

impl OrbitCamera {
    /// Points closer than this project to nothing.
    const NEAR: f32 = 0.1;

    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            distance: 35.0,
            target: Vec3::ZERO,
            fov_y: 60.0f32.to_radians(),
            viewport: Vec2::new(viewport_w, viewport_h),
        }
    }

    pub fn with_pose(mut self, azimuth: f32, elevation: f32, distance: f32) -> Self {
        self.set_pose(azimuth, elevation, distance);
        self
    }

    pub fn set_pose(&mut self, azimuth: f32, elevation: f32, distance: f32) {
        self.azimuth = azimuth;
        self.elevation = elevation;
        self.distance = distance.max(Self::NEAR);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        let (sin_e, cos_e) = self.elevation.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target
            + Vec3::new(
                self.distance * cos_e * sin_a,
                self.distance * sin_e,
                self.distance * cos_e * cos_a,
            )
    }

    /// Pixels per world unit at unit depth, from the vertical FOV.
    fn focal_length(&self) -> f32 {
        (self.viewport.y * 0.5) / (self.fov_y * 0.5).tan()
    }

    /// Project a world point to screen space. Returns `None` for points
    /// at or behind the near plane.
    pub fn project(&self, point: Vec3) -> Option<Projected> {
        let eye = self.position();
        let forward = (self.target - eye).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        let rel = point - eye;
        let depth = rel.dot(forward);
        if depth <= Self::NEAR {
            return None;
        }

        let focal = self.focal_length();
        let screen = Vec2::new(
            self.viewport.x * 0.5 + rel.dot(right) * focal / depth,
            self.viewport.y * 0.5 - rel.dot(up) * focal / depth,
        );
        Some(Projected { screen, depth })
    }

    /// On-screen radius in pixels of a sphere at the given depth.
    pub fn screen_radius(&self, world_radius: f32, depth: f32) -> f32 {
        world_radius * self.focal_length() / depth.max(Self::NEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        // The scene's default view: above and in front, looking at the sun.
        OrbitCamera::new(1280.0, 720.0).with_pose(0.0, 0.519, 40.3)
    }

    #[test]
    fn target_projects_to_screen_center() {
        let cam = camera();
        let p = cam.project(Vec3::ZERO).unwrap();
        assert!((p.screen.x - 640.0).abs() < 0.5);
        assert!((p.screen.y - 360.0).abs() < 0.5);
        assert!((p.depth - 40.3).abs() < 1e-3);
    }

    #[test]
    fn position_matches_pose() {
        let cam = camera();
        let pos = cam.position();
        // elevation 0.519 rad, distance 40.3 → roughly (0, 20, 35).
        assert!(pos.x.abs() < 1e-4);
        assert!((pos.y - 20.0).abs() < 0.1);
        assert!((pos.z - 35.0).abs() < 0.1);
    }

    #[test]
    fn points_behind_camera_do_not_project() {
        let cam = OrbitCamera::new(800.0, 600.0).with_pose(0.0, 0.0, 10.0);
        assert!(cam.project(Vec3::new(0.0, 0.0, 100.0)).is_none());
    }

    #[test]
    fn closer_points_project_larger() {
        let cam = OrbitCamera::new(800.0, 600.0).with_pose(0.0, 0.0, 30.0);
        let near = cam.screen_radius(1.0, 10.0);
        let far = cam.screen_radius(1.0, 50.0);
        assert!(near > far);
    }

    #[test]
    fn off_axis_point_lands_off_center() {
        let cam = OrbitCamera::new(800.0, 600.0).with_pose(0.0, 0.0, 30.0);
        let p = cam.project(Vec3::new(5.0, 0.0, 0.0)).unwrap();
        assert!((p.screen.x - 400.0).abs() > 10.0);
        assert!((p.screen.y - 300.0).abs() < 0.5);
    }
}
