//! Field validation for submitted forms.
//!
//! Validators append human-readable messages to a [`ValidationErrors`] map keyed by form
//! field name. An empty map means the input may be written; a non-empty one is handed
//! back to the view so the form can be re-rendered next to the offending fields.

use std::{collections::BTreeMap, io::Cursor};

use image::{DynamicImage, ImageFormat, ImageReader};

/// Largest accepted width or height of an uploaded image, in pixels.
pub const MAX_UPLOAD_DIMENSION: u32 = 3000;

/// Ordered map from field name to the messages reported for it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, empty when the field is valid.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `value` when no errors were recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Value must contain something other than whitespace.
    pub fn present(&mut self, field: &str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, format!("{} can't be empty", label));
        }
    }

    /// Trimmed character count must fall within `min..=max`.
    pub fn length(&mut self, field: &str, label: &str, value: &str, min: usize, max: usize) {
        let len = value.trim().chars().count();
        if len < min || len > max {
            self.add(
                field,
                format!(
                    "{} has to be between {} and {} characters, length is {}",
                    label, min, max, len
                ),
            );
        }
    }

    /// Value may only contain ASCII digits.
    pub fn numeric(&mut self, field: &str, label: &str, value: &str) {
        if !value.chars().all(|c| c.is_ascii_digit()) {
            self.add(field, format!("{} has to consist of numbers", label));
        }
    }

    /// Value must be a 13 digit ISBN with a valid check digit.
    pub fn isbn13(&mut self, field: &str, label: &str, value: &str) {
        if value.chars().count() != 13 {
            self.add(field, format!("{} has to be 13 digits", label));
            return;
        }

        if !is_valid_isbn13(value) {
            self.add(field, format!("{} is not a valid ISBN13 number", label));
        }
    }

    /// Parses an integer field and checks its lower bound.
    ///
    /// Blank input counts as zero. Returns the parsed value, or `None` when the input is
    /// not a number (the error has then been recorded).
    pub fn int_min(&mut self, field: &str, label: &str, value: &str, min: i32) -> Option<i32> {
        let trimmed = value.trim();
        let parsed = if trimmed.is_empty() {
            Ok(0)
        } else {
            trimmed.parse::<i32>()
        };

        match parsed {
            Ok(n) if n < min => {
                self.add(field, format!("{} shouldn't be less than {}", label, min));
                Some(n)
            }
            Ok(n) => Some(n),
            Err(_) => {
                self.add(field, format!("{} has to be a number", label));
                None
            }
        }
    }

    /// Decodes an uploaded image and checks its format and dimensions.
    ///
    /// Only JPEG, PNG and GIF are accepted. With `portrait` set the image may not be
    /// wider than it is tall. Returns the decoded image when every check passed.
    pub fn image(
        &mut self,
        field: &str,
        label: &str,
        bytes: &[u8],
        portrait: bool,
    ) -> Option<DynamicImage> {
        if bytes.is_empty() {
            self.add(field, format!("{} can't be empty", label));
            return None;
        }

        let format = image::guess_format(bytes)
            .ok()
            .filter(|f| matches!(f, ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Gif));
        // Dimensions come from the header alone, so oversized images are never decoded.
        let header = format.and_then(|format| {
            ImageReader::with_format(Cursor::new(bytes), format)
                .into_dimensions()
                .ok()
                .map(|dimensions| (format, dimensions))
        });
        let Some((format, (width, height))) = header else {
            self.add(field, unsupported_format(label));
            return None;
        };

        let before = self.get(field).len();
        if width > MAX_UPLOAD_DIMENSION {
            self.add(
                field,
                format!("{} width should be less than {} px", label, MAX_UPLOAD_DIMENSION),
            );
        }
        if height > MAX_UPLOAD_DIMENSION {
            self.add(
                field,
                format!("{} height should be less than {} px", label, MAX_UPLOAD_DIMENSION),
            );
        }
        if portrait && width > height {
            self.add(field, format!("{} has to be in portrait orientation", label));
        }
        if self.get(field).len() != before {
            return None;
        }

        let Ok(decoded) = image::load_from_memory_with_format(bytes, format) else {
            self.add(field, unsupported_format(label));
            return None;
        };

        Some(decoded)
    }
}

fn unsupported_format(label: &str) -> String {
    format!(
        "{} has an unsupported format supported formats are JPG, GIF, PNG",
        label
    )
}

/// ISBN-13 checksum: digits at even indexes weigh 1, odd indexes weigh 3, and the sum
/// must be a multiple of ten.
pub fn is_valid_isbn13(value: &str) -> bool {
    if value.len() != 13 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = value
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                digit
            } else {
                digit * 3
            }
        })
        .sum();

    sum % 10 == 0
}
