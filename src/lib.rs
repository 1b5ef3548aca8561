// cellsynth - Synthetic microscopy dataset utilities
//
// Companion crate for a cell-image generator:
//   - Project scene meshes through a camera to get per-image 2D boxes
//   - Accumulate (label, box) records and flush them as Pascal VOC XML
//   - Post-process rendered images with gaussian noise
//
// The host render engine stays external: cameras, meshes and render
// settings are plain data records, so everything here runs headless.

pub mod annotation;
pub mod bbox;
pub mod camera;
pub mod config;
pub mod error;
pub mod mesh;
pub mod noise;

pub use annotation::VocWriter;
pub use bbox::{BoundingBox, view_bounds_2d};
pub use camera::{Camera, Projection, RenderConfig, ViewFrame};
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use mesh::MeshData;
