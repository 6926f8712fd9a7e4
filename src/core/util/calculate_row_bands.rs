use std::num::NonZeroU32;

/// A contiguous run of raster rows owned by one worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowBand {
    pub first_row: u32,
    pub rows: u32,
}

/// Number of bands to cut `height` rows into: never more than `max_bands`,
/// never more than one per row, and at least one.
#[must_use]
pub fn calculate_bands_for_height(max_bands: NonZeroU32, height: u32) -> u32 {
    max_bands.get().min(height).max(1)
}

/// Splits `height` rows into contiguous bands of equal height; the last band
/// takes any remainder rows.
#[must_use]
pub fn calculate_row_bands(max_bands: NonZeroU32, height: u32) -> Vec<RowBand> {
    if height == 0 {
        return Vec::new();
    }

    let total_bands = calculate_bands_for_height(max_bands, height);
    let band_height = height / total_bands;

    (0..total_bands)
        .map(|band_num| {
            let first_row = band_num * band_height;
            let rows = if band_num == total_bands - 1 {
                height - first_row
            } else {
                band_height
            };

            RowBand { first_row, rows }
        })
        .collect()
}
