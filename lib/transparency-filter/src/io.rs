//! Decode and encode through the `image` codecs

use crate::{Error, Result};
use image::{ImageError, ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Decode `path` into an RGBA8 buffer.
///
/// The format is sniffed from the file content, so a mislabeled extension
/// still decodes.
pub fn load_rgba(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let decode_err = |source| Error::Decode {
        path: path.display().to_string(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    Ok(image.to_rgba8())
}

/// Write `image` to `path` as an RGBA8 PNG, whatever the extension says.
pub fn save_png(path: impl AsRef<Path>, image: &RgbaImage) -> Result<()> {
    let path = path.as_ref();

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.display().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_rgba(dir.path().join("nope.png")).unwrap_err();

        match err {
            Error::Decode { path, source } => {
                assert!(path.ends_with("nope.png"));
                assert!(matches!(source, ImageError::IoError(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_corrupt_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image")?;

        assert!(matches!(load_rgba(&path), Err(Error::Decode { .. })));

        Ok(())
    }

    #[test]
    fn test_save_then_load_keeps_alpha() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("alpha.png");

        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 0]));
        img.put_pixel(2, 1, Rgba([200, 100, 50, 77]));
        save_png(&path, &img)?;

        let loaded = load_rgba(&path)?;
        assert_eq!(loaded, img);

        Ok(())
    }

    #[test]
    fn test_save_ignores_extension() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("output.bin");
        save_png(&path, &RgbaImage::new(4, 4))?;

        let bytes = std::fs::read(&path)?;
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));

        // Content sniffing picks the codec, not the extension
        assert_eq!(load_rgba(&path)?.dimensions(), (4, 4));

        Ok(())
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no").join("such").join("dir.png");

        let err = save_png(&path, &RgbaImage::new(1, 1)).unwrap_err();
        assert!(matches!(err, Error::Encode { .. }));
        assert!(!path.exists());
    }
}
