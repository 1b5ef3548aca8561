// bbox.rs - Camera-space 2D bounding boxes
//
// Projects a mesh's world-space vertices through a camera and returns
// the pixel-space box they cover in the rendered image. Used to emit
// object-detection annotations for rendered scenes.

use glam::Vec3;

use crate::camera::{Camera, Projection, RenderConfig};

/// Axis-aligned box in pixel space, origin top-left.
///
/// [`BoundingBox::EMPTY`] (all zeros) means the mesh covers no pixels:
/// outside the frame or too small to survive rounding. A genuinely
/// degenerate box collapses to the same value, so only the all-zero
/// pattern distinguishes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Sentinel for "no visible box".
    pub const EMPTY: Self = Self { x: 0, y: 0, width: 0, height: 0 };

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Right edge (exclusive).
    pub fn x_max(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn y_max(&self) -> u32 {
        self.y + self.height
    }

    pub fn to_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }
}

/// Compute the pixel-space bounding box of `world_verts` as seen by
/// `camera` at the resolution in `render`.
///
/// Vertices outside the frame are clipped to the frame edges rather
/// than dropped, matching how the render crops them. Pure function;
/// returns [`BoundingBox::EMPTY`] when nothing visible remains.
pub fn view_bounds_2d(camera: &Camera, render: &RenderConfig, world_verts: &[Vec3]) -> BoundingBox {
    if world_verts.is_empty() {
        return BoundingBox::EMPTY;
    }

    let view = camera.transform.inverse();
    let persp = camera.projection == Projection::Perspective;

    // Frame corners negated into the convention where z grows toward
    // the scene; three corners are enough to span both axes.
    let corners = camera.view_frame.corners();
    let base = [-corners[0], -corners[1], -corners[2]];

    let mut min_nx = f32::INFINITY;
    let mut max_nx = f32::NEG_INFINITY;
    let mut min_ny = f32::INFINITY;
    let mut max_ny = f32::NEG_INFINITY;

    for &world in world_verts {
        let co = view.transform_point3(world);
        let z = -co.z;

        let frame = if persp {
            if z == 0.0 {
                // Vertex exactly on the camera plane: pin to the image
                // centre instead of dividing by zero.
                min_nx = min_nx.min(0.5);
                max_nx = max_nx.max(0.5);
                min_ny = min_ny.min(0.5);
                max_ny = max_ny.max(0.5);
                continue;
            }
            // Slice the frustum at this vertex's depth. Corners sit at
            // unit depth, so each one scales by z / corner.z.
            base.map(|c| c * (z / c.z))
        } else {
            base
        };

        let (min_x, max_x) = (frame[1].x, frame[2].x);
        let (min_y, max_y) = (frame[0].y, frame[1].y);

        let nx = (co.x - min_x) / (max_x - min_x);
        let ny = (co.y - min_y) / (max_y - min_y);

        min_nx = min_nx.min(nx);
        max_nx = max_nx.max(nx);
        min_ny = min_ny.min(ny);
        max_ny = max_ny.max(ny);
    }

    let min_nx = min_nx.clamp(0.0, 1.0);
    let max_nx = max_nx.clamp(0.0, 1.0);
    let min_ny = min_ny.clamp(0.0, 1.0);
    let max_ny = max_ny.clamp(0.0, 1.0);

    let (dim_x, dim_y) = render.dimensions();

    // Round the endpoints independently and take widths as pixel
    // differences; rounding the width on its own can pair with the
    // rounded origin to overshoot the frame by a pixel.
    let x0 = (min_nx * dim_x).round();
    let x1 = (max_nx * dim_x).round();
    // Normalized y grows upward, pixel y grows downward.
    let y0 = (dim_y - max_ny * dim_y).round();
    let y1 = (dim_y - min_ny * dim_y).round();

    if x1 - x0 == 0.0 || y1 - y0 == 0.0 {
        return BoundingBox::EMPTY;
    }

    BoundingBox {
        x: x0 as u32,
        y: y0 as u32,
        width: (x1 - x0) as u32,
        height: (y1 - y0) as u32,
    }
}
