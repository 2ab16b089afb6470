use std::error::Error;
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};

use crate::domain::GrayscaleGrid;

/// Source label used for in-memory buffers in error messages
pub const MEMORY_SOURCE: &str = "<memory>";

#[derive(Debug)]
pub enum ChartImageError {
    /// The path does not resolve to a readable file
    NotFound { path: PathBuf },
    /// Bytes exist but do not decode to a non-empty raster
    Undecodable { source: String, reason: String },
}

impl fmt::Display for ChartImageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChartImageError::NotFound { path } => {
                write!(f, "Image not found: {}", path.display())
            }
            ChartImageError::Undecodable { source, reason } => {
                write!(f, "Unable to read image: {} ({})", source, reason)
            }
        }
    }
}

impl Error for ChartImageError {}

impl ChartImageError {
    fn undecodable(source: &str, reason: impl fmt::Display) -> Self {
        ChartImageError::Undecodable {
            source: source.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Decode the image at `path` into a grayscale grid.
/// The format is sniffed from the content, not the extension.
pub fn load_grid(path: &Path) -> Result<GrayscaleGrid, ChartImageError> {
    if !path.is_file() {
        return Err(ChartImageError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let label = path.display().to_string();
    let reader = ImageReader::open(path)
        .map_err(|_| ChartImageError::NotFound {
            path: path.to_path_buf(),
        })?
        .with_guessed_format()
        .map_err(|e| ChartImageError::undecodable(&label, e))?;

    let img = reader
        .decode()
        .map_err(|e| ChartImageError::undecodable(&label, e))?;

    to_grid(&img, &label)
}

/// Decode an in-memory PNG/JPEG/BMP buffer into a grayscale grid.
pub fn decode_grid(bytes: &[u8]) -> Result<GrayscaleGrid, ChartImageError> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ChartImageError::undecodable(MEMORY_SOURCE, e))?
        .decode()
        .map_err(|e| ChartImageError::undecodable(MEMORY_SOURCE, e))?;

    to_grid(&img, MEMORY_SOURCE)
}

fn to_grid(img: &DynamicImage, label: &str) -> Result<GrayscaleGrid, ChartImageError> {
    GrayscaleGrid::from_dynamic(img).ok_or_else(|| {
        ChartImageError::undecodable(
            label,
            format!("empty raster {}x{}", img.width(), img.height()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn png_bytes(img: &RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = Path::new("definitely/not/here/m1.png");
        let err = load_grid(path).unwrap_err();
        assert!(matches!(err, ChartImageError::NotFound { .. }));
        assert!(err.to_string().contains("definitely/not/here/m1.png"));
    }

    #[test]
    fn test_directory_is_not_found() {
        let err = load_grid(&std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, ChartImageError::NotFound { .. }));
    }

    #[test]
    fn test_garbage_bytes_are_undecodable() {
        let err = decode_grid(b"this is not an image").unwrap_err();
        match err {
            ChartImageError::Undecodable { ref source, .. } => assert_eq!(source, MEMORY_SOURCE),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_garbage_file_is_undecodable_with_path() {
        let path = std::env::temp_dir().join(format!("chart_scan_garbage_{}.png", std::process::id()));
        std::fs::write(&path, b"not a png at all").unwrap();
        let err = load_grid(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, ChartImageError::Undecodable { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_decode_png_buffer() {
        let img = RgbImage::from_pixel(6, 4, Rgb([255, 0, 0]));
        let grid = decode_grid(&png_bytes(&img)).unwrap();
        assert_eq!(grid.shape(), (6, 4));
        assert_eq!(grid.get(3, 5), 76);
    }

    #[test]
    fn test_extension_does_not_matter() {
        let img = RgbImage::from_pixel(3, 3, Rgb([10, 10, 10]));
        let path = std::env::temp_dir().join(format!("chart_scan_sniff_{}.jpg", std::process::id()));
        std::fs::write(&path, png_bytes(&img)).unwrap();
        let grid = load_grid(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(grid.unwrap().shape(), (3, 3));
    }
}
