use glam::{Mat4, Vec3};

/// Fixed perspective camera looking down at the grid from above and in front.
///
/// The camera never moves; only the aspect ratio follows the window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 15.0, 9.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 900.0 / 600.0,
            near: 0.1,
            far: 500.0,
        }
    }
}

impl FixedCamera {
    /// Track a framebuffer resize. Zero heights are clamped to one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera() {
        let cam = FixedCamera::default();
        assert_eq!(cam.eye, Vec3::new(0.0, 15.0, 9.0));
        assert!((cam.aspect - 1.5).abs() < f32::EPSILON);
        let vp = cam.view_projection();
        assert!(!vp.is_nan());
    }

    #[test]
    fn grid_centre_projects_to_screen_centre() {
        let cam = FixedCamera::default();
        let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!((0.0..1.0).contains(&ndc.z));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = FixedCamera::default();
        cam.resize(1280, 720);
        assert!((cam.aspect - 1280.0 / 720.0).abs() < 1e-6);
        cam.resize(100, 0);
        assert_eq!(cam.aspect, 100.0);
    }
}
