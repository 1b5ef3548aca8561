// error.rs - Crate-wide error type

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to parse config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported pixel layout {0:?}: expected 3 or 4 channels")]
    UnsupportedChannels(image::ColorType),

    #[error("invalid gaussian std dev {0}: must be finite and non-negative")]
    InvalidStdDev(f64),
}
