// End-to-end check of the annotation path: place cell quads in front
// of a camera, project each one, and flush the visible ones to a
// Pascal VOC file the way the render loop does per image.

use std::f32::consts::FRAC_PI_2;
use std::fs;

use cellsynth::{
    Camera, MeshData, Projection, RenderConfig, ViewFrame, VocWriter, view_bounds_2d,
};
use glam::{Mat4, Vec3};
use tempfile::tempdir;

#[test]
fn visible_cells_end_up_in_the_annotation_file() {
    let camera = Camera::new(
        Mat4::IDENTITY,
        Projection::Perspective,
        ViewFrame::perspective(FRAC_PI_2, 1.0),
    );
    let render = RenderConfig::new(800, 800);

    let in_frame = MeshData::plane(1.0, 1.0)
        .with_transform(Mat4::from_translation(Vec3::new(0.5, -0.5, -3.0)));
    let off_frame = MeshData::plane(1.0, 1.0)
        .with_transform(Mat4::from_translation(Vec3::new(40.0, 0.0, -3.0)));

    let mut writer = VocWriter::new("renders/Customimage-00000.jpg", 800, 800);
    for cell in [&in_frame, &off_frame] {
        let bbox = view_bounds_2d(&camera, &render, &cell.world_vertices());
        writer.add_box("Infected", bbox);
    }
    assert_eq!(writer.len(), 1);

    let dir = tempdir().unwrap();
    let path = dir.path().join("Customimage-00000.xml");
    writer.save(&path).unwrap();

    let xml = fs::read_to_string(&path).unwrap();
    assert_eq!(xml.matches("<object>").count(), 1);
    assert!(xml.contains("<filename>Customimage-00000.jpg</filename>"));

    // Next image starts clean.
    writer.set_image("renders/Customimage-00001.jpg", 800, 800);
    assert!(writer.is_empty());
}
