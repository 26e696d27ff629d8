//! PNG format support.
//!
//! Decodes every PNG color type and bit depth into an ARGB
//! [`ImageBuffer`]: indexed images are expanded through their palette,
//! grayscale is widened to RGB, `tRNS` transparency becomes alpha and 16-bit
//! samples are stripped to 8 bits. Output is always 8-bit RGBA, optionally
//! carrying `tEXt` chunks.
//!
//! # Example
//!
//! ```rust,ignore
//! use rcx_io::png::{read, write_with_text};
//!
//! let image = read("knight.png")?;
//! write_with_text("knight-blue.png", &image, &[("Software", "rcx")])?;
//! ```

use crate::{IoError, IoResult};
use rcx_core::{Color, ImageBuffer};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Decodes a PNG stream into ARGB pixels.
pub fn decode<R: BufRead + Seek>(reader: R) -> IoResult<ImageBuffer> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader.output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(IoError::DecodeError(format!(
            "unexpected output bit depth {:?}",
            info.bit_depth
        )));
    }

    let data = &buf[..info.buffer_size()];
    let pixels: Vec<u32> = match info.color_type {
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|p| Color::new(p[0], p[1], p[2]).with_alpha(p[3]))
            .collect(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|p| Color::new(p[0], p[1], p[2]).with_alpha(0xFF))
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|ga| Color::new(ga[0], ga[0], ga[0]).with_alpha(ga[1]))
            .collect(),
        png::ColorType::Grayscale => data
            .iter()
            .map(|&g| Color::new(g, g, g).with_alpha(0xFF))
            .collect(),
        png::ColorType::Indexed => {
            return Err(IoError::DecodeError("indexed image was not expanded".into()));
        }
    };

    Ok(ImageBuffer::from_data(info.width, info.height, pixels)?)
}

/// Returns the `tEXt` chunks of a PNG file as `(keyword, text)` pairs.
pub fn read_text<P: AsRef<Path>>(path: P) -> IoResult<Vec<(String, String)>> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let reader = decoder.read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    Ok(reader
        .info()
        .uncompressed_latin1_text
        .iter()
        .map(|chunk| (chunk.keyword.clone(), chunk.text.clone()))
        .collect())
}

/// Writes an image to an 8-bit RGBA PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageBuffer) -> IoResult<()> {
    write_with_text(path, image, &[])
}

/// Writes an image to an 8-bit RGBA PNG file with `tEXt` chunks.
pub fn write_with_text<P: AsRef<Path>>(
    path: P,
    image: &ImageBuffer,
    text: &[(&str, &str)],
) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    encode(BufWriter::new(file), image, text)
}

/// Encodes an image as 8-bit RGBA PNG into `writer`.
pub fn encode<W: Write>(writer: W, image: &ImageBuffer, text: &[(&str, &str)]) -> IoResult<()> {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    for &(keyword, value) in text {
        encoder
            .add_text_chunk(keyword.to_string(), value.to_string())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
    }

    let mut png_writer = encoder.write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer.write_image_data(&image.to_rgba8())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer.finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
