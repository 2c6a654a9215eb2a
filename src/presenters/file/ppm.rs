use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

const PPM_MAX_COLOUR_VALUE: u8 = 255;

/// Binary (P6) PPM writer.
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
        let pixel_rect = buffer.pixel_rect();

        write!(
            writer,
            "P6\n{} {}\n{}\n",
            pixel_rect.width(),
            pixel_rect.height(),
            PPM_MAX_COLOUR_VALUE
        )?;
        writer.write_all(buffer.buffer())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(std::fs::File::create(filepath)?);

        self.write_to(buffer, &mut writer)?;
        writer.flush()
    }
}
