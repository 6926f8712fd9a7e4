//! Byte layouts for handing packed rasters to presentation targets.

use crate::core::data::colour::Colour;

/// Copies packed `0x00RRGGBB` pixels to tightly packed RGB bytes.
///
/// # Panics
/// Panics if `dst.len()` is not exactly `src.len() * 3`.
pub fn copy_packed_to_rgb(src: &[u32], dst: &mut [u8]) {
    assert_eq!(
        dst.len(),
        src.len() * 3,
        "dst length {} does not match expected {}",
        dst.len(),
        src.len() * 3
    );

    for (&packed, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(3)) {
        let colour = Colour::from_packed(packed);
        dst_pixel[0] = colour.r;
        dst_pixel[1] = colour.g;
        dst_pixel[2] = colour.b;
    }
}

/// Copies packed pixels to 32-bit BGRA bytes with opaque alpha, the layout of
/// little-endian `0xAARRGGBB` surfaces.
///
/// # Panics
/// Panics if `dst.len()` is not exactly `src.len() * 4`.
pub fn copy_packed_to_bgra(src: &[u32], dst: &mut [u8]) {
    assert_eq!(
        dst.len(),
        src.len() * 4,
        "dst length {} does not match expected {}",
        dst.len(),
        src.len() * 4
    );

    for (&packed, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel.copy_from_slice(&(packed | 0xFF00_0000).to_le_bytes());
    }
}

#[must_use]
pub fn packed_to_rgb(src: &[u32]) -> Vec<u8> {
    let mut dst = vec![0; src.len() * 3];
    copy_packed_to_rgb(src, &mut dst);
    dst
}

#[must_use]
pub fn packed_to_bgra(src: &[u32]) -> Vec<u8> {
    let mut dst = vec![0; src.len() * 4];
    copy_packed_to_bgra(src, &mut dst);
    dst
}
