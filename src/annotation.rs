// annotation.rs - Pascal VOC annotation files
//
// One writer per rendered image: accumulate (label, box) records
// while the image's objects are measured, then flush to XML right
// after the render. The writer is caller-owned; clear() between
// images keeps records from leaking into the next file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bbox::BoundingBox;
use crate::error::Result;

#[derive(Debug, Clone)]
struct VocObject {
    name: String,
    xmin: u32,
    ymin: u32,
    xmax: u32,
    ymax: u32,
}

/// Per-image annotation accumulator serializing to Pascal VOC XML.
#[derive(Debug, Clone)]
pub struct VocWriter {
    image_path: PathBuf,
    width: u32,
    height: u32,
    objects: Vec<VocObject>,
}

impl VocWriter {
    pub fn new(image_path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            image_path: image_path.into(),
            width,
            height,
            objects: Vec::new(),
        }
    }

    /// Append one record. Coordinates are written as given; filtering
    /// degenerate boxes is the caller's job (or use [`add_box`]).
    ///
    /// [`add_box`]: VocWriter::add_box
    pub fn add_object(&mut self, name: &str, xmin: u32, ymin: u32, xmax: u32, ymax: u32) {
        self.objects.push(VocObject {
            name: name.to_owned(),
            xmin,
            ymin,
            xmax,
            ymax,
        });
    }

    /// Append a projected box, skipping the all-zero "not visible"
    /// sentinel.
    pub fn add_box(&mut self, name: &str, bbox: BoundingBox) {
        if bbox.is_empty() {
            return;
        }
        self.add_object(name, bbox.x, bbox.y, bbox.x_max(), bbox.y_max());
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Drop all accumulated records, keeping the image metadata.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Rebind the writer to the next image, dropping old records.
    pub fn set_image(&mut self, image_path: impl Into<PathBuf>, width: u32, height: u32) {
        self.image_path = image_path.into();
        self.width = width;
        self.height = height;
        self.objects.clear();
    }

    /// Write the annotation file. A writer with no records still
    /// produces a valid file carrying the image metadata alone.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_xml())?;
        Ok(())
    }

    fn to_xml(&self) -> String {
        let lossy = |p: Option<&std::ffi::OsStr>| {
            p.map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
        };
        let folder = lossy(self.image_path.parent().and_then(Path::file_name));
        let filename = lossy(self.image_path.file_name());

        let mut xml = String::new();
        xml.push_str("<annotation>\n");
        xml.push_str(&format!("    <folder>{}</folder>\n", escape(&folder)));
        xml.push_str(&format!("    <filename>{}</filename>\n", escape(&filename)));
        xml.push_str(&format!(
            "    <path>{}</path>\n",
            escape(&self.image_path.display().to_string())
        ));
        xml.push_str("    <source>\n");
        xml.push_str("        <database>Unknown</database>\n");
        xml.push_str("    </source>\n");
        xml.push_str("    <size>\n");
        xml.push_str(&format!("        <width>{}</width>\n", self.width));
        xml.push_str(&format!("        <height>{}</height>\n", self.height));
        xml.push_str("        <depth>3</depth>\n");
        xml.push_str("    </size>\n");
        xml.push_str("    <segmented>0</segmented>\n");

        for object in &self.objects {
            xml.push_str("    <object>\n");
            xml.push_str(&format!("        <name>{}</name>\n", escape(&object.name)));
            xml.push_str("        <pose>Unspecified</pose>\n");
            xml.push_str("        <truncated>0</truncated>\n");
            xml.push_str("        <difficult>0</difficult>\n");
            xml.push_str("        <bndbox>\n");
            xml.push_str(&format!("            <xmin>{}</xmin>\n", object.xmin));
            xml.push_str(&format!("            <ymin>{}</ymin>\n", object.ymin));
            xml.push_str(&format!("            <xmax>{}</xmax>\n", object.xmax));
            xml.push_str(&format!("            <ymax>{}</ymax>\n", object.ymax));
            xml.push_str("        </bndbox>\n");
            xml.push_str("    </object>\n");
        }

        xml.push_str("</annotation>\n");
        xml
    }
}

// Labels and paths are free-form strings; a bare `&` or `<` would make
// the file unparseable.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
