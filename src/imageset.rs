use crate::error::Error;
use crate::image::{IconImage, SourceBitmap, validate_dimensions};
use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;

//===========================================================================//

/// An ordered collection of icon images keyed by size, with at most one
/// image per size.  Iteration always yields images in ascending size
/// order, which is also the order they are laid out in an encoded icon.
///
/// Mutating operations validate their input before touching the set, so
/// a failed `add` or `set` leaves the set unchanged.  Observers
/// registered with [`ImageSet::on_change`] are invoked once after each
/// mutation that actually changes the set's contents.
pub struct ImageSet {
    images: BTreeMap<u32, IconImage>,
    listeners: Vec<Box<dyn FnMut()>>,
}

impl ImageSet {
    /// Creates a new, empty image set.
    pub fn new() -> ImageSet {
        ImageSet { images: BTreeMap::new(), listeners: Vec::new() }
    }

    /// Converts the source and inserts it into the set.  Fails with
    /// [`Error::DuplicateSize`] if an image of that size is already
    /// present (use [`ImageSet::set`] to overwrite), and with the
    /// conversion errors of [`IconImage::from_source`] for an invalid
    /// source.  On error the set is left unchanged.
    pub fn add<S>(&mut self, source: &S) -> Result<(), Error>
    where
        S: SourceBitmap + ?Sized,
    {
        let size = validate_dimensions(
            source.pixel_width(),
            source.pixel_height(),
        )?;
        if self.images.contains_key(&size) {
            return Err(Error::DuplicateSize(size));
        }
        let image = IconImage::from_bgra(size, source.to_bgra())?;
        self.images.insert(size, image);
        log::trace!(
            "added {}x{} image ({} in set)",
            size,
            size,
            self.images.len()
        );
        self.notify();
        Ok(())
    }

    /// Converts the source and inserts it, overwriting any existing image
    /// of the same size.  Returns `Ok(true)` if the set's membership or
    /// content changed, or `Ok(false)` if the new image was byte-identical
    /// to the one already present (in which case no observers fire).
    pub fn set<S>(&mut self, source: &S) -> Result<bool, Error>
    where
        S: SourceBitmap + ?Sized,
    {
        let size = validate_dimensions(
            source.pixel_width(),
            source.pixel_height(),
        )?;
        let image = IconImage::from_bgra(size, source.to_bgra())?;
        match self.images.entry(size) {
            Entry::Occupied(mut entry) => {
                if entry.get().bgra_data() == image.bgra_data() {
                    return Ok(false);
                }
                entry.insert(image);
            }
            Entry::Vacant(entry) => {
                entry.insert(image);
            }
        }
        log::trace!(
            "set {}x{} image ({} in set)",
            size,
            size,
            self.images.len()
        );
        self.notify();
        Ok(true)
    }

    /// Removes the image of the given size, if any, and reports whether
    /// an image was removed.  Observers fire only when one was.
    pub fn remove(&mut self, size: u32) -> bool {
        if self.images.remove(&size).is_some() {
            log::trace!(
                "removed {}x{} image ({} in set)",
                size,
                size,
                self.images.len()
            );
            self.notify();
            true
        } else {
            false
        }
    }

    /// Removes all images.  Observers fire only if the set was non-empty.
    pub fn clear(&mut self) {
        if !self.images.is_empty() {
            self.images.clear();
            log::trace!("cleared image set");
            self.notify();
        }
    }

    /// Returns the image of the given size, if present.
    pub fn get(&self, size: u32) -> Option<&IconImage> {
        self.images.get(&size)
    }

    /// Returns true if the set holds an image of the given size.
    pub fn contains_size(&self, size: u32) -> bool {
        self.images.contains_key(&size)
    }

    /// Returns the number of images in the set.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the set holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns an iterator over the images in ascending size order.
    pub fn images(&self) -> impl Iterator<Item = &IconImage> {
        self.images.values()
    }

    /// Registers an observer to be invoked once after every mutation that
    /// changes the set's membership or content.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener();
        }
    }
}

impl Default for ImageSet {
    fn default() -> ImageSet {
        ImageSet::new()
    }
}

impl fmt::Debug for ImageSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ImageSet")
            .field("images", &self.images)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ImageSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.images.values())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ImageSet {
    fn deserialize<D>(deserializer: D) -> Result<ImageSet, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let images = Vec::<IconImage>::deserialize(deserializer)?;
        let mut set = ImageSet::new();
        for image in images {
            set.add(&image).map_err(serde::de::Error::custom)?;
        }
        Ok(set)
    }
}

//===========================================================================//


//===========================================================================//
