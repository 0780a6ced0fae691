//! Handing the finished buffer to the outside world.

use error::RenderError;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, ImageEncoder, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write the image to `outfile`.  `.ppm` and `.pnm` files are written
/// as binary pixmaps; anything else is left to the image crate, which
/// picks the format from the extension.
pub fn write_image<P: AsRef<Path>>(outfile: P, pixels: &RgbImage) -> Result<(), RenderError> {
    let path = outfile.as_ref();
    let is_pnm = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("ppm") || e.eq_ignore_ascii_case("pnm"))
        .unwrap_or(false);

    if is_pnm {
        let output = BufWriter::new(File::create(path)?);
        let encoder =
            PnmEncoder::new(output).with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
        encoder.write_image(
            pixels.as_raw(),
            pixels.width(),
            pixels.height(),
            ColorType::Rgb8,
        )?;
    } else {
        pixels.save(path)?;
    }
    info!("Wrote {}", path.display());
    Ok(())
}
