use crate::error::Error;
use crate::imageset::ImageSet;
use crate::payload;
use byteorder::{LittleEndian, WriteBytesExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

//===========================================================================//

// The resource type number stored in an ICONDIR header for icons (as
// opposed to cursors).
const RESOURCE_TYPE_ICON: u16 = 1;

//===========================================================================//

/// Encodes the image set as a complete ICO file in memory.
///
/// The output is deterministic: identical set contents always produce
/// identical bytes.  An empty set encodes to a valid 6-byte container
/// with no entries.
pub fn encode(set: &ImageSet) -> Result<Vec<u8>, Error> {
    let mut data = Vec::<u8>::new();
    write_ico(set, &mut data)?;
    Ok(data)
}

/// Writes the image set as a complete ICO file to the given writer.
pub fn write_ico<W: Write>(
    set: &ImageSet,
    mut writer: W,
) -> Result<(), Error> {
    // Encode every payload up front, so a failing image can't leave a
    // truncated container behind:
    let mut payloads = Vec::<(u32, Vec<u8>)>::with_capacity(set.len());
    for image in set.images() {
        payloads.push((image.size(), payload::encode(image)?));
    }
    log::debug!("writing icon container with {} entries", payloads.len());
    writer.write_u16::<LittleEndian>(0)?; // reserved
    writer.write_u16::<LittleEndian>(RESOURCE_TYPE_ICON)?;
    // The size range allows at most 241 distinct entries, so the count
    // always fits in the u16 field.
    writer.write_u16::<LittleEndian>(payloads.len() as u16)?;
    let mut data_offset = 6 + 16 * (payloads.len() as u32);
    for (size, data) in payloads.iter() {
        // A width/height byte of zero indicates a size of 256.
        let size_byte = if *size > 255 { 0 } else { *size as u8 };
        writer.write_u8(size_byte)?; // width
        writer.write_u8(size_byte)?; // height
        writer.write_u8(0)?; // no color palette
        writer.write_u8(0)?; // reserved
        writer.write_u16::<LittleEndian>(1)?; // color planes
        writer.write_u16::<LittleEndian>(32)?; // bits per pixel
        let data_size = data.len() as u32;
        writer.write_u32::<LittleEndian>(data_size)?;
        writer.write_u32::<LittleEndian>(data_offset)?;
        data_offset += data_size;
    }
    for (_, data) in payloads.iter() {
        writer.write_all(data)?;
    }
    Ok(())
}

/// Creates (or truncates) the file at the given path and writes the image
/// set to it as an ICO file.
pub fn save_ico<P: AsRef<Path>>(
    set: &ImageSet,
    path: P,
) -> Result<(), Error> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_ico(set, &mut writer)?;
    writer.flush()?;
    log::debug!("saved {} images to {}", set.len(), path.display());
    Ok(())
}

//===========================================================================//


//===========================================================================//
