//! Icon batch generation: load once, resize per table entry, write PNGs.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use tracing::info;

use crate::resize::resize_to_square;
use crate::tables::{ANDROID_ICON_FILENAME, ANDROID_MIPMAPS, IOS_APP_ICONS};

/// Load and decode the source image.
///
/// The decoded image is reused for every resize in the run.
pub fn load_source(path: &Path) -> Result<DynamicImage, GenerateError> {
    if !path.exists() {
        return Err(GenerateError::SourceMissing(path.to_path_buf()));
    }

    let img = image::open(path).map_err(GenerateError::Decode)?;
    info!(
        width = img.width(),
        height = img.height(),
        "Source image loaded"
    );
    Ok(img)
}

/// Generate the Android launcher icon set under a `res` directory.
///
/// Writes `<res_root>/<bucket>/ic_launcher.png` for every density bucket,
/// creating the bucket directories as needed and overwriting existing files.
/// The first failed write aborts the remaining entries.
///
/// Returns the number of files written.
pub fn generate_android(img: &DynamicImage, res_root: &Path) -> Result<usize, GenerateError> {
    info!(root = %res_root.display(), "Generating Android launcher icons");

    let mut written = 0;
    for bucket in ANDROID_MIPMAPS {
        let dir = res_root.join(bucket.dir);
        std::fs::create_dir_all(&dir).map_err(|source| GenerateError::Io {
            path: dir.clone(),
            source,
        })?;

        let out = dir.join(ANDROID_ICON_FILENAME);
        write_icon(img, &out, bucket.size)?;
        written += 1;
    }

    Ok(written)
}

/// Generate the iOS app icon set into an `AppIcon.appiconset` directory.
///
/// Writes each named slot file directly into `iconset_root`, creating the
/// directory as needed and overwriting existing files. The first failed
/// write aborts the remaining entries.
///
/// Returns the number of files written.
pub fn generate_ios(img: &DynamicImage, iconset_root: &Path) -> Result<usize, GenerateError> {
    info!(root = %iconset_root.display(), "Generating iOS app icons");

    std::fs::create_dir_all(iconset_root).map_err(|source| GenerateError::Io {
        path: iconset_root.to_path_buf(),
        source,
    })?;

    let mut written = 0;
    for slot in IOS_APP_ICONS {
        let out = iconset_root.join(slot.file_name);
        write_icon(img, &out, slot.size)?;
        written += 1;
    }

    Ok(written)
}

/// Resize to a square and write one PNG, overwriting any existing file.
fn write_icon(img: &DynamicImage, path: &Path, size: u32) -> Result<(), GenerateError> {
    let resized = resize_to_square(img, size);
    resized
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| GenerateError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), size, "Generated icon");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Source image not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Failed to decode source image: {0}")]
    Decode(image::ImageError),

    #[error("Failed to write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
