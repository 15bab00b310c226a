use std::io;

//===========================================================================//

/// Errors returned by image validation, set mutation, and icon encoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The image is not square, or its size lies outside the supported
    /// range of 16 to 256 pixels.
    #[error(
        "invalid image dimensions {width}x{height} (icon images must be \
         square, between 16 and 256 pixels)"
    )]
    InvalidSize {
        /// Width of the rejected image, in pixels.
        width: u32,
        /// Height of the rejected image, in pixels.
        height: u32,
    },

    /// `add` was called for a size already present in the set.  Use
    /// [`ImageSet::set`](crate::ImageSet::set) to replace an entry.
    #[error("an image of size {0}x{0} is already present")]
    DuplicateSize(u32),

    /// A pixel-format conversion produced a buffer whose length does not
    /// match the declared image size.
    #[error(
        "pixel buffer holds {actual} bytes, but a {size}x{size} image \
         requires {expected}"
    )]
    PixelBufferMismatch {
        /// Declared image size, in pixels.
        size: u32,
        /// Expected buffer length, `4 * size * size`.
        expected: usize,
        /// Length of the buffer actually produced.
        actual: usize,
    },

    /// The PNG encoder rejected or failed on a large image.
    #[error("PNG payload encoding failed: {0}")]
    PayloadEncoding(#[from] png::EncodingError),

    /// The output sink reported an I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

//===========================================================================//


//===========================================================================//
