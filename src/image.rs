use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

//===========================================================================//

/// The smallest width/height accepted for an icon image, in pixels.
pub const MIN_SIZE: u32 = 16;

/// The largest width/height accepted for an icon image, in pixels.
pub const MAX_SIZE: u32 = 256;

//===========================================================================//

/// A decoded bitmap in some arbitrary pixel format that can convert
/// itself to the canonical 32-bits-per-pixel BGRA layout.
///
/// This trait is the only image-input capability the crate depends on.
/// Callers keep whatever decoding machinery they already have (the `png`
/// crate, a platform imaging API, a screenshot grabber) and implement
/// this trait for its output type; the pixel-format conversion itself is
/// the implementor's business.
pub trait SourceBitmap {
    /// Returns the width of the bitmap, in pixels.
    fn pixel_width(&self) -> u32;

    /// Returns the height of the bitmap, in pixels.
    fn pixel_height(&self) -> u32;

    /// Converts the bitmap to tightly-packed BGRA bytes, row-major from
    /// the top row down, 4 bytes per pixel.  The buffer must hold exactly
    /// `4 * pixel_width() * pixel_height()` bytes;
    /// [`IconImage::from_source`] rejects anything else.
    fn to_bgra(&self) -> Vec<u8>;
}

//===========================================================================//

/// A canonical icon image: square, [`MIN_SIZE`] to [`MAX_SIZE`] pixels on
/// a side, stored as 32-bits-per-pixel BGRA.  Values of this type always
/// satisfy those invariants; the constructors reject anything that does
/// not.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IconImage {
    size: u32,
    bgra: Vec<u8>,
}

impl IconImage {
    /// Creates an image from BGRA pixel data, row-major from the top row
    /// down.  Fails with [`Error::InvalidSize`] if `size` is outside
    /// `16..=256`, or with [`Error::PixelBufferMismatch`] if `bgra` does
    /// not hold exactly `4 * size * size` bytes.
    pub fn from_bgra(size: u32, bgra: Vec<u8>) -> Result<IconImage, Error> {
        validate_dimensions(size, size)?;
        let expected = 4 * (size as usize) * (size as usize);
        if bgra.len() != expected {
            return Err(Error::PixelBufferMismatch {
                size,
                expected,
                actual: bgra.len(),
            });
        }
        Ok(IconImage { size, bgra })
    }

    /// Creates an image from RGBA pixel data (the layout most Rust image
    /// decoders produce), swizzling it into canonical BGRA order.  The
    /// validation rules are those of [`IconImage::from_bgra`].
    pub fn from_rgba(
        size: u32,
        mut rgba: Vec<u8>,
    ) -> Result<IconImage, Error> {
        for pixel in rgba.chunks_exact_mut(4) {
            pixel.swap(0, 2);
        }
        IconImage::from_bgra(size, rgba)
    }

    /// Converts an arbitrary source bitmap into a canonical image.  Fails
    /// with [`Error::InvalidSize`] if the source is not square or its
    /// size is out of range, and with [`Error::PixelBufferMismatch`] if
    /// the conversion yields a buffer of the wrong length.
    pub fn from_source<S>(source: &S) -> Result<IconImage, Error>
    where
        S: SourceBitmap + ?Sized,
    {
        let size =
            validate_dimensions(source.pixel_width(), source.pixel_height())?;
        IconImage::from_bgra(size, source.to_bgra())
    }

    /// Returns the width and height of the image, in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the BGRA pixel data, row-major from the top row down.
    pub fn bgra_data(&self) -> &[u8] {
        &self.bgra
    }
}

/// A canonical image is itself a valid source, so sets accept raw sources
/// and finished images uniformly.
impl SourceBitmap for IconImage {
    fn pixel_width(&self) -> u32 {
        self.size
    }

    fn pixel_height(&self) -> u32 {
        self.size
    }

    fn to_bgra(&self) -> Vec<u8> {
        self.bgra.clone()
    }
}

impl fmt::Debug for IconImage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IconImage")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for IconImage {
    fn deserialize<D>(deserializer: D) -> Result<IconImage, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            size: u32,
            bgra: Vec<u8>,
        }
        let raw = Raw::deserialize(deserializer)?;
        IconImage::from_bgra(raw.size, raw.bgra)
            .map_err(serde::de::Error::custom)
    }
}

//===========================================================================//

/// Checks that a bitmap is square and within the supported size range,
/// returning the common side length.
pub(crate) fn validate_dimensions(
    width: u32,
    height: u32,
) -> Result<u32, Error> {
    if width != height || width < MIN_SIZE || width > MAX_SIZE {
        return Err(Error::InvalidSize { width, height });
    }
    Ok(width)
}

//===========================================================================//


//===========================================================================//
