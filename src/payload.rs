use crate::error::Error;
use crate::image::IconImage;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

//===========================================================================//

// The size of a BITMAPINFOHEADER struct, in bytes.
const BMP_HEADER_LEN: u32 = 40;

// Images this size or larger are stored as PNG blobs instead of raw
// bitmap blocks.  Given the supported size range this is exactly the
// 256x256 entry.
const PNG_THRESHOLD: u32 = 256;

//===========================================================================//

/// Encodes one image into the payload bytes referenced by its directory
/// entry: a raw 32-bpp bitmap block below the PNG threshold, a PNG blob
/// at it.
pub(crate) fn encode(image: &IconImage) -> Result<Vec<u8>, Error> {
    let size = image.size();
    if size < PNG_THRESHOLD {
        log::trace!("encoding {}x{} image as a raw bitmap block", size, size);
        encode_bmp(image)
    } else {
        log::trace!("encoding {}x{} image as PNG", size, size);
        encode_png(image)
    }
}

/// Returns the byte stride of one AND-mask row: 1 bit per pixel, rounded
/// up to a whole byte and then to a multiple of four bytes (legacy bitmap
/// rows are 4-byte aligned).
pub(crate) fn mask_stride(size: u32) -> usize {
    let mask_row_data_size = (size as usize + 7) / 8;
    ((mask_row_data_size + 3) / 4) * 4
}

/// Encodes a legacy bitmap block: a BITMAPINFOHEADER followed by the XOR
/// (color) plane and the AND (mask) plane, both stored bottom row first.
fn encode_bmp(image: &IconImage) -> Result<Vec<u8>, Error> {
    let size = image.size() as usize;
    let bgra = image.bgra_data();
    let mask_row_data_size = (size + 7) / 8;
    let mask_row_size = mask_stride(image.size());
    let mask_row_padding = vec![0u8; mask_row_size - mask_row_data_size];
    let image_data_size = 4 * size * size + mask_row_size * size;
    let data_size = BMP_HEADER_LEN as usize + image_data_size;
    let mut data = Vec::<u8>::with_capacity(data_size);

    // Write the BITMAPINFOHEADER struct.  The height field counts the
    // rows of both planes, so it is doubled:
    data.write_u32::<LittleEndian>(BMP_HEADER_LEN)?;
    data.write_i32::<LittleEndian>(size as i32)?;
    data.write_i32::<LittleEndian>(2 * size as i32)?;
    data.write_u16::<LittleEndian>(1)?; // planes
    data.write_u16::<LittleEndian>(32)?; // bits per pixel
    data.write_u32::<LittleEndian>(0)?; // compression
    data.write_u32::<LittleEndian>(image_data_size as u32)?;
    data.write_i32::<LittleEndian>(0)?; // horz ppm
    data.write_i32::<LittleEndian>(0)?; // vert ppm
    data.write_u32::<LittleEndian>(0)?; // colors used
    data.write_u32::<LittleEndian>(0)?; // colors important
    debug_assert_eq!(data.len(), BMP_HEADER_LEN as usize);

    // Write the color data.  Fully transparent pixels are written as
    // four zero bytes so they can't leak stale color values:
    for row in 0..size {
        let mut start = 4 * (size - row - 1) * size;
        for _ in 0..size {
            if bgra[start + 3] == 0 {
                data.write_u32::<LittleEndian>(0)?;
            } else {
                data.write_all(&bgra[start..start + 4])?;
            }
            start += 4;
        }
    }

    // Write the mask data, 1 bit per pixel, MSB first.  A set bit marks
    // a pixel the renderer should treat as transparent:
    for row in 0..size {
        let mut start = 4 * (size - row - 1) * size;
        let mut col = 0;
        for _ in 0..mask_row_data_size {
            let mut byte = 0;
            for bit in 0..8 {
                if bgra[start + 3] < 0x80 {
                    byte |= 1 << (7 - bit);
                }
                col += 1;
                if col == size {
                    break;
                }
                start += 4;
            }
            data.write_u8(byte)?;
        }
        data.write_all(&mask_row_padding)?;
    }

    debug_assert_eq!(data.len(), data_size);
    Ok(data)
}

/// Encodes an image as a complete PNG file; the blob is used verbatim as
/// the payload.
fn encode_png(image: &IconImage) -> Result<Vec<u8>, Error> {
    let mut rgba = image.bgra_data().to_vec();
    for pixel in rgba.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    let mut data = Vec::<u8>::new();
    let mut encoder =
        png::Encoder::new(&mut data, image.size(), image.size());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&rgba)?;
    writer.finish()?;
    Ok(data)
}

//===========================================================================//


//===========================================================================//
