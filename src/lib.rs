//! A library for assembling multi-size Windows ICO icon files.
//!
//! An ICO file packs several renditions of one icon, at different pixel
//! sizes, into a single container, and Windows picks the best rendition
//! for each context (taskbar, title bar, Explorer views, and so on).
//! This crate builds such containers: collect square images of distinct
//! sizes in an [`ImageSet`], then encode the set as a complete ICO file.
//!
//! Images smaller than 256 pixels are stored as legacy 32-bit bitmap
//! blocks with an explicit transparency mask; 256-pixel images are
//! stored as PNG, per the format's modern convention.  Pixel data is
//! accepted from any source that can convert itself to packed BGRA by
//! implementing the [`SourceBitmap`] trait.
//!
//! # Example
//!
//! ```no_run
//! let mut set = icoforge::ImageSet::new();
//! for size in [16u32, 32, 48] {
//!     let bgra = vec![0xff; 4 * (size as usize) * (size as usize)];
//!     let image = icoforge::IconImage::from_bgra(size, bgra)?;
//!     set.add(&image)?;
//! }
//! icoforge::save_ico(&set, "app.ico")?;
//! # Ok::<(), icoforge::Error>(())
//! ```

#![warn(missing_docs)]

mod encoder;
mod error;
mod image;
mod imageset;
mod payload;

pub use crate::encoder::{encode, save_ico, write_ico};
pub use crate::error::Error;
pub use crate::image::{IconImage, MAX_SIZE, MIN_SIZE, SourceBitmap};
pub use crate::imageset::ImageSet;

//===========================================================================//
