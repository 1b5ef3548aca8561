// camera.rs - Plain-data camera and render settings
//
// Stand-ins for the host engine's live camera/render objects. The
// projector in bbox.rs only reads these fields, so scenes can be
// described without a running engine.

use glam::{Mat4, Vec3};

/// Camera projection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Orthographic,
}

/// The camera's visible rectangle at unit depth, in camera-local
/// coordinates.
///
/// Corners are ordered top-right, bottom-right, bottom-left, top-left
/// and sit on the `z = -1` plane (the camera looks down -Z). A
/// perspective camera's rectangle scales linearly with depth; an
/// orthographic one is the same at all depths.
#[derive(Debug, Clone, Copy)]
pub struct ViewFrame {
    corners: [Vec3; 4],
}

impl ViewFrame {
    pub fn from_corners(corners: [Vec3; 4]) -> Self {
        Self { corners }
    }

    /// Frame of a perspective camera with the given vertical field of
    /// view (radians) and width/height aspect ratio.
    pub fn perspective(fov_y: f32, aspect: f32) -> Self {
        let half_h = (fov_y * 0.5).tan();
        Self::symmetric(half_h * aspect, half_h)
    }

    /// Frame of an orthographic camera; `scale` is the width of the
    /// visible rectangle in world units.
    pub fn orthographic(scale: f32, aspect: f32) -> Self {
        let half_w = scale * 0.5;
        Self::symmetric(half_w, half_w / aspect)
    }

    fn symmetric(half_w: f32, half_h: f32) -> Self {
        Self {
            corners: [
                Vec3::new(half_w, half_h, -1.0),
                Vec3::new(half_w, -half_h, -1.0),
                Vec3::new(-half_w, -half_h, -1.0),
                Vec3::new(-half_w, half_h, -1.0),
            ],
        }
    }

    pub fn corners(&self) -> [Vec3; 4] {
        self.corners
    }
}

/// A camera in the scene: where it sits and how it projects.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Camera-to-world transform.
    pub transform: Mat4,
    pub projection: Projection,
    pub view_frame: ViewFrame,
}

impl Camera {
    pub fn new(transform: Mat4, projection: Projection, view_frame: ViewFrame) -> Self {
        Self { transform, projection, view_frame }
    }
}

/// Render resolution settings.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub resolution_x: u32,
    pub resolution_y: u32,
    /// Render-time scale factor in percent; 100 renders at nominal size.
    pub resolution_percentage: u32,
}

impl RenderConfig {
    pub fn new(resolution_x: u32, resolution_y: u32) -> Self {
        Self { resolution_x, resolution_y, resolution_percentage: 100 }
    }

    pub fn with_percentage(mut self, resolution_percentage: u32) -> Self {
        self.resolution_percentage = resolution_percentage;
        self
    }

    /// Effective output dimensions in pixels.
    pub fn dimensions(&self) -> (f32, f32) {
        let fac = self.resolution_percentage as f32 * 0.01;
        (self.resolution_x as f32 * fac, self.resolution_y as f32 * fac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn perspective_frame_spans_fov_at_unit_depth() {
        let frame = ViewFrame::perspective(FRAC_PI_2, 1.0);
        let [tr, br, bl, tl] = frame.corners();
        assert!((tr - Vec3::new(1.0, 1.0, -1.0)).length() < 1e-6);
        assert!((br - Vec3::new(1.0, -1.0, -1.0)).length() < 1e-6);
        assert!((bl - Vec3::new(-1.0, -1.0, -1.0)).length() < 1e-6);
        assert!((tl - Vec3::new(-1.0, 1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn orthographic_frame_uses_scale_as_width() {
        let frame = ViewFrame::orthographic(4.0, 2.0);
        let [tr, _, bl, _] = frame.corners();
        assert_eq!(tr.x, 2.0);
        assert_eq!(tr.y, 1.0);
        assert_eq!(bl.x, -2.0);
        assert_eq!(bl.y, -1.0);
    }

    #[test]
    fn resolution_percentage_scales_dimensions() {
        let render = RenderConfig::new(640, 480).with_percentage(50);
        assert_eq!(render.dimensions(), (320.0, 240.0));
    }
}
