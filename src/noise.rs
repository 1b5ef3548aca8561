// noise.rs - Gaussian image noise
//
// Post-processing pass over rendered images: per-pixel gaussian noise
// on the color channels, alpha untouched. Arithmetic runs on an
// ndarray view of the pixel buffer in signed space so negative noise
// survives until the clamp.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, RgbImage, RgbaImage};
use ndarray::{Array3, ArrayViewMut3, s};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Add gaussian noise to an image's color channels.
///
/// RGBA images keep their alpha channel byte-for-byte; RGB images get
/// noise on every channel. Other pixel layouts are rejected with
/// [`Error::UnsupportedChannels`].
pub fn add_noise<R: Rng>(
    image: &DynamicImage,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<DynamicImage> {
    // Normal::new only rejects non-finite variance, so check the sign
    // ourselves; a negative spread has no meaning here.
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(Error::InvalidStdDev(std_dev));
    }
    let normal = Normal::new(mean, std_dev).map_err(|_| Error::InvalidStdDev(std_dev))?;

    match image {
        DynamicImage::ImageRgb8(buf) => {
            let (w, h) = buf.dimensions();
            let mut pixels = to_array(buf.as_raw(), w, h, 3);
            perturb(pixels.view_mut(), &normal, rng);
            let buf = RgbImage::from_raw(w, h, into_raw(pixels))
                .expect("pixel count unchanged by noise pass");
            Ok(DynamicImage::ImageRgb8(buf))
        }
        DynamicImage::ImageRgba8(buf) => {
            let (w, h) = buf.dimensions();
            let mut pixels = to_array(buf.as_raw(), w, h, 4);
            // Color channels only; alpha stays exactly as decoded.
            perturb(pixels.slice_mut(s![.., .., ..3]), &normal, rng);
            let buf = RgbaImage::from_raw(w, h, into_raw(pixels))
                .expect("pixel count unchanged by noise pass");
            Ok(DynamicImage::ImageRgba8(buf))
        }
        other => Err(Error::UnsupportedChannels(other.color())),
    }
}

/// Apply [`add_noise`] to every image directly inside `input`, writing
/// `noisy_<name>` files into `output`. Returns the number of files
/// written.
///
/// Only `.png`, `.jpg` and `.jpeg` files are considered (case
/// insensitive, no recursion into subdirectories). Files that fail to
/// decode are skipped with a warning; input files are never touched.
pub fn process_folder(input: &Path, output: &Path, mean: f64, std_dev: f64) -> Result<usize> {
    fs::create_dir_all(output)?;

    let mut rng = rand::thread_rng();
    let mut written = 0usize;

    for entry in fs::read_dir(input)? {
        let path = entry?.path();
        if !path.is_file() || !is_image_file(&path) {
            continue;
        }

        let image = match image::open(&path) {
            Ok(image) => image,
            Err(err) => {
                log::warn!("skipping {}: {err}", path.display());
                continue;
            }
        };

        let Some(name) = path.file_name().and_then(OsStr::to_str) else {
            continue;
        };

        let noisy = add_noise(&image, mean, std_dev, &mut rng)?;
        let out_path = output.join(format!("noisy_{name}"));
        write_image(&noisy, &out_path)?;
        log::info!("saved {}", out_path.display());
        written += 1;
    }

    Ok(written)
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

fn to_array(raw: &[u8], w: u32, h: u32, channels: usize) -> Array3<u8> {
    Array3::from_shape_vec((h as usize, w as usize, channels), raw.to_vec())
        .expect("raw buffer matches image dimensions")
}

fn into_raw(pixels: Array3<u8>) -> Vec<u8> {
    pixels.into_raw_vec_and_offset().0
}

fn perturb<R: Rng>(mut channels: ArrayViewMut3<u8>, normal: &Normal<f64>, rng: &mut R) {
    channels.map_inplace(|value| {
        // Truncate the sample to a signed integer before adding so
        // negative noise survives until the clamp.
        let noise = normal.sample(rng) as i32;
        let noisy = i32::from(*value).saturating_add(noise);
        *value = noisy.clamp(0, 255) as u8;
    });
}

// PNG gets maximum compression to keep batch outputs small; other
// formats go through whatever encoder `image` picks from the
// extension.
fn write_image(image: &DynamicImage, path: &Path) -> Result<()> {
    let is_png = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));

    if is_png {
        let file = fs::File::create(path)?;
        let encoder = PngEncoder::new_with_quality(file, CompressionType::Best, FilterType::Adaptive);
        image.write_with_encoder(encoder)?;
    } else {
        image.save(path)?;
    }
    Ok(())
}
