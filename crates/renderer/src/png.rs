//! PNG encoding for rasterized heatmaps.
//!
//! Two encodings are supported:
//! - **Indexed (color type 3)** when the image has at most 256 distinct
//!   colors. Flat heatmaps without anti-aliased text usually qualify.
//! - **RGBA (color type 6)** otherwise.
//!
//! [`encode_png`] picks between them.

use std::collections::HashMap;
use std::io::Write;

use heatmap_common::{HeatmapError, HeatmapResult};

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
const MAX_PALETTE_SIZE: usize = 256;

/// RGBA palette entry.
pub type PaletteEntry = (u8, u8, u8, u8);

/// Encode straight-alpha RGBA pixels, indexed when the palette fits.
pub fn encode_png(pixels: &[u8], width: usize, height: usize) -> HeatmapResult<Vec<u8>> {
    check_len(pixels.len(), width * height * 4)?;
    match extract_palette(pixels) {
        Some((palette, indices)) => encode_indexed(width, height, &palette, &indices),
        None => encode_rgba(pixels, width, height),
    }
}

/// Collect distinct colors in first-seen order, giving up past 256.
pub fn extract_palette(pixels: &[u8]) -> Option<(Vec<PaletteEntry>, Vec<u8>)> {
    let mut lookup: HashMap<[u8; 4], u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices = Vec::with_capacity(pixels.len() / 4);

    for px in pixels.chunks_exact(4) {
        let key = [px[0], px[1], px[2], px[3]];
        let index = match lookup.get(&key) {
            Some(&idx) => idx,
            None => {
                if palette.len() == MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push((px[0], px[1], px[2], px[3]));
                lookup.insert(key, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Encode palette indices (one byte per pixel) as an indexed PNG.
pub fn encode_indexed(
    width: usize,
    height: usize,
    palette: &[PaletteEntry],
    indices: &[u8],
) -> HeatmapResult<Vec<u8>> {
    check_len(indices.len(), width * height)?;
    if palette.is_empty() || palette.len() > MAX_PALETTE_SIZE {
        return Err(HeatmapError::EncodeError(format!(
            "palette must hold 1-256 colors, got {}",
            palette.len()
        )));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &header(width, height, 3));

    let plte: Vec<u8> = palette.iter().flat_map(|&(r, g, b, _)| [r, g, b]).collect();
    write_chunk(&mut png, b"PLTE", &plte);

    if palette.iter().any(|&(_, _, _, a)| a < 255) {
        let trns: Vec<u8> = palette.iter().map(|&(_, _, _, a)| a).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    write_chunk(&mut png, b"IDAT", &deflate_scanlines(indices, width, height)?);
    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

/// Encode straight-alpha RGBA pixels as a truecolor PNG.
pub fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> HeatmapResult<Vec<u8>> {
    check_len(pixels.len(), width * height * 4)?;

    let mut png = Vec::new();
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &header(width, height, 6));
    write_chunk(&mut png, b"IDAT", &deflate_scanlines(pixels, width * 4, height)?);
    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

fn header(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(color_type);
    ihdr.push(0); // compression
    ihdr.push(0); // filter
    ihdr.push(0); // interlace
    ihdr
}

/// Prefix every row with filter type 0 and zlib-compress.
fn deflate_scanlines(data: &[u8], row_bytes: usize, rows: usize) -> HeatmapResult<Vec<u8>> {
    let mut raw = Vec::with_capacity(rows * (row_bytes + 1));
    for row in data.chunks_exact(row_bytes.max(1)).take(rows) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&raw)
        .map_err(|e| HeatmapError::EncodeError(format!("IDAT compression failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| HeatmapError::EncodeError(format!("IDAT compression failed: {}", e)))
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

fn check_len(actual: usize, expected: usize) -> HeatmapResult<()> {
    if actual != expected {
        return Err(HeatmapError::EncodeError(format!(
            "expected {} bytes of pixel data, got {}",
            expected, actual
        )));
    }
    Ok(())
}
