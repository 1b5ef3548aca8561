// config.rs - Generation-run parameters
//
// A generation run is driven by a JSON parameter document naming the
// image folders, output directory, image count and resolution. Key
// names follow that document so existing configs keep working.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::camera::RenderConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub output_directory: PathBuf,
    #[serde(rename = "NotInfCellsDirectory")]
    pub healthy_cells_directory: PathBuf,
    #[serde(rename = "InfCellsDirectory")]
    pub infected_cells_directory: PathBuf,
    #[serde(rename = "BackgroundsDirectory")]
    pub backgrounds_directory: PathBuf,
    pub number_of_images: u32,
    pub resolution_x: u32,
    pub resolution_y: u32,
}

impl GeneratorConfig {
    /// Read and parse a parameter document.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })
    }

    /// Render settings for the configured output resolution.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.resolution_x, self.resolution_y)
    }
}
