//! Stored upload images.
//!
//! Each `ImageStore` owns one directory under the public directory. Uploads are shrunk
//! to fit their bounds, re-encoded as JPEG and written under a random UUID name, which
//! is what the owning record stores.

use std::{
    io::{Cursor, ErrorKind},
    path::PathBuf,
};

use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage};
use uuid::Uuid;

use crate::server::error::AppError;

/// Largest stored book cover.
pub const COVER_BOUNDS: ImageBounds = ImageBounds {
    width: 400,
    height: 600,
};

/// Largest stored highlight image.
pub const HIGHLIGHT_BOUNDS: ImageBounds = ImageBounds {
    width: 1000,
    height: 1000,
};

const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageBounds {
    pub width: u32,
    pub height: u32,
}

/// Directory of uploaded images served as static files.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[cfg(test)]
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Creates the directory and its parents if missing.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Stores an already validated image.
    ///
    /// Images larger than `bounds` are shrunk with their aspect ratio kept; smaller
    /// images keep their size.
    ///
    /// # Returns
    /// - `Ok(name)` - Random file name the image was written under
    /// - `Err(AppError::ImageErr(_))` - JPEG encoding failed
    /// - `Err(AppError::IoErr(_))` - File could not be written
    pub async fn upload(&self, image: DynamicImage, bounds: ImageBounds) -> Result<String, AppError> {
        let encoded = encode_jpeg(shrink_to_fit(image, bounds))?;
        let name = Uuid::new_v4().to_string();

        tokio::fs::write(self.dir.join(&name), encoded).await?;
        tracing::debug!("Stored image {} in {}", name, self.dir.display());

        Ok(name)
    }

    /// Removes a stored image.
    ///
    /// A file that is already gone is logged and ignored so a record can always be
    /// deleted.
    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        // Stored names are bare UUIDs; anything else never came from `upload`.
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            tracing::warn!("Refusing to delete image with invalid name {:?}", name);
            return Ok(());
        }

        match tokio::fs::remove_file(self.dir.join(name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Image {} missing from {}", name, self.dir.display());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a freshly uploaded image whose record could not be written.
    ///
    /// The original failure is what the caller reports, so a cleanup error is only logged.
    pub async fn discard(&self, name: &str) {
        if let Err(err) = self.delete(name).await {
            tracing::warn!("Failed to discard orphaned image {}: {}", name, err);
        }
    }
}

/// Shrinks an image to fit within `bounds`, never enlarging it.
pub fn shrink_to_fit(image: DynamicImage, bounds: ImageBounds) -> DynamicImage {
    if image.width() <= bounds.width && image.height() <= bounds.height {
        return image;
    }

    image.resize(bounds.width, bounds.height, FilterType::Nearest)
}

fn encode_jpeg(image: DynamicImage) -> Result<Vec<u8>, AppError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);

    image.to_rgb8().write_with_encoder(encoder)?;

    Ok(buffer.into_inner())
}
