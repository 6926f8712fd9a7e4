use crate::adapters::pixel_format::packed_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster::Raster;
use log::debug;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    /// Writes `raster` as a binary (P6) PPM image.
    pub fn write_to(raster: &Raster, writer: &mut impl Write) -> std::io::Result<()> {
        let size = raster.size();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", size.width, size.height)?;
        writeln!(writer, "255")?;
        writer.write_all(&packed_to_rgb(raster.pixels()))?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, raster: &Raster, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(std::fs::File::create(filepath)?);
        Self::write_to(raster, &mut writer)?;
        writer.flush()?;

        debug!("wrote {}", filepath.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_size::PixelSize;

    #[test]
    fn test_write_to_emits_header_then_rgb_bytes() {
        let raster =
            Raster::from_data(PixelSize::new(2, 1), vec![0x00FF_0000, 0x0001_0203]).unwrap();
        let mut bytes = Vec::new();

        PpmFilePresenter::write_to(&raster, &mut bytes).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 1, 2, 3]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_present_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let filepath = dir.path().join("nested").join("frame.ppm");
        let raster = Raster::new(PixelSize::new(3, 2));

        PpmFilePresenter::new().present(&raster, &filepath).unwrap();

        let written = std::fs::read(&filepath).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);
    }
}
