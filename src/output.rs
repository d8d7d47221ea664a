//! PNG output and file path generation

use std::io;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::RgbaImage;
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save an RGBA image to a PNG file.
///
/// Parent directories are created if they don't exist.
///
/// # Errors
///
/// Returns `OutputError` when directory creation or encoding fails.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// This preserves crisp pixel edges for the checkerboard and caption.
/// A factor of 1 (or 0) returns the image unchanged.
pub fn scale_image(image: RgbaImage, factor: u8) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    let new_w = w * factor as u32;
    let new_h = h * factor as u32;
    image::imageops::resize(&image, new_w, new_h, FilterType::Nearest)
}

/// Generate the output path for one stamp of a batch.
///
/// # Output Naming Rules
///
/// | Scenario | Output |
/// |----------|--------|
/// | No `-o`, job `badge.json5` | `badge_000.png`, `badge_001.png`, ... next to the job |
/// | With `-o out.png` (single stamp) | `out.png` |
/// | With `-o out.png` (batch) | `out_000.png`, `out_001.png`, ... |
/// | With `-o dir/` | `dir/000.png`, `dir/001.png`, ... |
///
/// # Arguments
///
/// * `input` - The job file path (used for default naming)
/// * `index` - The batch index of the stamp being saved
/// * `output_arg` - The `-o` argument value, if provided
/// * `is_single` - Whether only one stamp is being rendered
pub fn generate_output_path(
    input: &Path,
    index: u32,
    output_arg: Option<&Path>,
    is_single: bool,
) -> PathBuf {
    match output_arg {
        Some(output) => {
            // Check if output is a directory (ends with / or is existing directory)
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();

            if is_dir {
                // -o dir/ -> dir/{index}.png
                output.join(format!("{:03}.png", index))
            } else if is_single {
                // -o out.png (single stamp) -> out.png
                output.to_path_buf()
            } else {
                // -o out.png (batch) -> out_{index}.png
                let stem = output
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");
                let parent = output.parent().unwrap_or(Path::new(""));
                if parent.as_os_str().is_empty() {
                    PathBuf::from(format!("{}_{:03}.png", stem, index))
                } else {
                    parent.join(format!("{}_{:03}.png", stem, index))
                }
            }
        }
        None => {
            // Default: {job_stem}_{index}.png next to the job file
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            input.with_file_name(format!("{}_{:03}.png", stem, index))
        }
    }
}
