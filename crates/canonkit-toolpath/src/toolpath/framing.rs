//! Camera framing for whole toolpaths and selections.
//!
//! Frames a bounding sphere around the target: the eye sits far enough back
//! along the view direction that the sphere fits the vertical field of view.

use super::draw::vertex;
use super::extents::ExtentBox;
use super::selection::Selection;
use canonkit_core::constants::MIN_FRAME_RADIUS;
use glam::{Mat4, Vec3};
use serde::Serialize;

/// Default vertical field of view in degrees
pub const DEFAULT_FOV: f32 = 45.0;

/// Where to point a camera so that a region fills the view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraFrame {
    pub target: Vec3,
    /// Radius of the bounding sphere around `target`
    pub radius: f32,
    /// Eye distance from `target` that fits the sphere in view
    pub distance: f32,
    /// Degrees
    pub fov: f32,
}

impl CameraFrame {
    /// Frame a sphere; radii below the minimum are raised to it
    pub fn new(target: Vec3, radius: f32, fov: f32) -> Self {
        let radius = radius.max(MIN_FRAME_RADIUS as f32);
        // 1.2 leaves a margin around the sphere
        let distance = (radius * 2.0 * 1.2) / (fov.to_radians() / 2.0).tan();
        Self {
            target,
            radius,
            distance,
            fov,
        }
    }

    /// Frame a whole box. An empty box frames the origin.
    pub fn from_extents(extents: &ExtentBox, fov: f32) -> Self {
        Self::new(vertex(extents.center()), extents.radius() as f32, fov)
    }

    /// Frame a selection around its centroid
    pub fn from_selection(selection: &Selection, fov: f32) -> Self {
        let center = selection.centroid;
        let radius = selection
            .points()
            .map(|p| p.distance(center))
            .fold(0.0_f64, f64::max);
        Self::new(vertex(center), radius as f32, fov)
    }

    /// Eye position for a Z-up orbit at `yaw` and `pitch` (radians)
    pub fn eye_position(&self, yaw: f32, pitch: f32) -> Vec3 {
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        let offset = Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch) * self.distance;
        self.target + offset
    }

    pub fn view_matrix(&self, yaw: f32, pitch: f32) -> Mat4 {
        let eye = self.eye_position(yaw, pitch);
        let forward = (self.target - eye).normalize();
        // Looking straight down or up, Z cannot be the up vector
        let up = if forward.cross(Vec3::Z).length_squared() < 0.001 {
            Vec3::Y
        } else {
            Vec3::Z
        };
        Mat4::look_at_rh(eye, self.target, up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolpath::buffer::ToolpathBuffer;
    use approx::assert_relative_eq;
    use canonkit_core::Point3;

    #[test]
    fn test_empty_extents_get_minimum_radius() {
        let frame = CameraFrame::from_extents(&ExtentBox::EMPTY, DEFAULT_FOV);
        assert_eq!(frame.target, Vec3::ZERO);
        assert_eq!(frame.radius, MIN_FRAME_RADIUS as f32);
        assert!(frame.distance > 0.0);
    }

    #[test]
    fn test_box_frame() {
        let extents = ExtentBox::from_points([Point3::new(0.0, 0.0, 0.0), Point3::new(6.0, 8.0, 0.0)]);
        let frame = CameraFrame::from_extents(&extents, 90.0);

        assert_eq!(frame.target, Vec3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(frame.radius, 5.0);
        // tan(45°) = 1
        assert_relative_eq!(frame.distance, 12.0, epsilon = 1e-4);
    }

    #[test]
    fn test_selection_frame_uses_furthest_point() {
        let selection = ToolpathBuffer::new().select_by_line(1);
        let frame = CameraFrame::from_selection(&selection, DEFAULT_FOV);
        assert_eq!(frame.radius, MIN_FRAME_RADIUS as f32);
    }

    #[test]
    fn test_eye_position_is_distance_from_target() {
        let frame = CameraFrame::new(Vec3::new(1.0, 2.0, 3.0), 10.0, DEFAULT_FOV);
        let eye = frame.eye_position(0.3, 0.6);
        assert_relative_eq!(eye.distance(frame.target), frame.distance, epsilon = 1e-3);

        let top = frame.eye_position(0.0, std::f32::consts::FRAC_PI_2);
        assert!(frame.view_matrix(0.0, std::f32::consts::FRAC_PI_2).is_finite());
        assert!(top.z > frame.target.z);
    }
}
