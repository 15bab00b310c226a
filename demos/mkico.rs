use clap::{App, Arg, SubCommand};
use std::fs;
use std::path::PathBuf;

//===========================================================================//

struct PngSource {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl icoforge::SourceBitmap for PngSource {
    fn pixel_width(&self) -> u32 {
        self.width
    }

    fn pixel_height(&self) -> u32 {
        self.height
    }

    fn to_bgra(&self) -> Vec<u8> {
        let mut bgra = self.rgba.clone();
        for pixel in bgra.chunks_exact_mut(4) {
            pixel.swap(0, 2);
        }
        bgra
    }
}

fn load_png(path: &str) -> PngSource {
    let file = fs::File::open(path).unwrap();
    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    assert_eq!(info.bit_depth, png::BitDepth::Eight, "expected an 8-bit PNG");
    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => {
            let mut rgba = Vec::with_capacity(buf.len() / 3 * 4);
            for pixel in buf.chunks_exact(3) {
                rgba.extend_from_slice(pixel);
                rgba.push(0xff);
            }
            rgba
        }
        other => panic!("unsupported PNG color type {:?}", other),
    };
    PngSource { width: info.width, height: info.height, rgba }
}

//===========================================================================//

fn main() {
    let matches = App::new("mkico")
        .version("0.1")
        .about("Assembles ICO files from PNG images")
        .subcommand(
            SubCommand::with_name("create")
                .about("Creates an ICO file from square PNG files")
                .arg(
                    Arg::with_name("output")
                        .takes_value(true)
                        .value_name("PATH")
                        .short("o")
                        .long("output")
                        .help("Sets output path"),
                )
                .arg(Arg::with_name("image").multiple(true)),
        )
        .get_matches();
    if let Some(submatches) = matches.subcommand_matches("create") {
        let out_path = if let Some(path) = submatches.value_of("output") {
            PathBuf::from(path)
        } else {
            let mut path = PathBuf::from("out.ico");
            let mut index: i32 = 0;
            while path.exists() {
                index += 1;
                path = PathBuf::from(format!("out{}.ico", index));
            }
            path
        };
        let mut set = icoforge::ImageSet::new();
        if let Some(paths) = submatches.values_of("image") {
            for path in paths {
                println!("Adding {:?}", path);
                let source = load_png(path);
                set.set(&source).unwrap();
            }
        }
        icoforge::save_ico(&set, &out_path).unwrap();
        println!("Wrote {} images to {:?}", set.len(), out_path);
    }
}

//===========================================================================//
