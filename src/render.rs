//! The pixel-buffer populator: walks every pixel of the canvas, takes
//! it through mapping, the escape-time engine and the color mapper, and
//! writes the color back at the same coordinates.  No pixel depends on
//! any other, so the canvas can also be cut into bands of rows and
//! handed to as many threads as you like.

use color::escape_color;
use config::RenderConfig;
use crossbeam;
use error::RenderError;
use escape::classify;
use image::{Rgb, RgbImage};
use itertools::iproduct;
use planes::{Pixel, ViewportMapper};

const CHANNELS: usize = 3;

/// Visit every pixel of the plane once, outer loop over columns and
/// inner loop over rows, and hand its color to `put`.
pub fn populate<F>(plane: &ViewportMapper, config: &RenderConfig, mut put: F)
where
    F: FnMut(Pixel, Rgb<u8>),
{
    for (x, y) in iproduct!(0..plane.width(), 0..plane.height()) {
        let pixel = Pixel(x, y);
        put(pixel, color_of(plane, config, &pixel));
    }
}

fn color_of(plane: &ViewportMapper, config: &RenderConfig, pixel: &Pixel) -> Rgb<u8> {
    escape_color(classify(plane.pixel_to_point(pixel), config.max_iter))
}

/// Holds the canvas and the configuration a Mandelbrot image is
/// rendered with.  Once built it cannot fail to render.
#[derive(Debug)]
pub struct Renderer {
    plane: ViewportMapper,
    config: RenderConfig,
}

impl Renderer {
    /// Requires the width and height of the image and the
    /// configuration carrying the viewport spans and iteration budget.
    pub fn new(width: u32, height: u32, config: RenderConfig) -> Result<Self, RenderError> {
        let plane = ViewportMapper::new(width, height, config.h_span, config.v_span)?;
        debug!(
            "Renderer {}x{}: spans {}x{}, {} iterations",
            width, height, config.h_span, config.v_span, config.max_iter
        );
        Ok(Renderer { plane, config })
    }

    /// Color of a single pixel.
    pub fn color_at(&self, pixel: &Pixel) -> Rgb<u8> {
        color_of(&self.plane, &self.config, pixel)
    }

    /// Fill an existing buffer.  The buffer has to be exactly the size
    /// of the canvas; otherwise nothing is written.
    pub fn render_into(&self, buffer: &mut RgbImage) -> Result<(), RenderError> {
        let (width, height) = buffer.dimensions();
        if (width, height) != (self.plane.width(), self.plane.height()) {
            return Err(RenderError::InvalidDimension { width, height });
        }
        populate(&self.plane, &self.config, |Pixel(x, y), color| {
            buffer.put_pixel(x, y, color)
        });
        Ok(())
    }

    /// The main function for single-threaded renders.  Allocates a
    /// buffer in the background color and fills it.
    pub fn render(&self) -> RgbImage {
        info!(
            "Rendering {}x{} on one thread",
            self.plane.width(),
            self.plane.height()
        );
        let mut buffer =
            RgbImage::from_pixel(self.plane.width(), self.plane.height(), self.config.background);
        populate(&self.plane, &self.config, |Pixel(x, y), color| {
            buffer.put_pixel(x, y, color)
        });
        info!("Render complete");
        buffer
    }

    /// A multi-threaded version of the render function.  The buffer is
    /// split into contiguous bands of whole rows, one per thread, so
    /// that no two threads ever touch the same pixel.
    pub fn render_threaded(&self, threads: usize) -> Result<RgbImage, RenderError> {
        if threads == 0 {
            return Err(RenderError::InvalidThreadCount);
        }

        let (width, height) = (self.plane.width(), self.plane.height());
        // Never more bands than rows.
        let threads = threads.min(height as usize);
        let rows_per_band = (height as usize - 1) / threads + 1;
        let band_len = rows_per_band * width as usize * CHANNELS;
        info!(
            "Rendering {}x{} on {} threads, {} rows per band",
            width, height, threads, rows_per_band
        );

        let background = self.config.background;
        let mut raw: Vec<u8> = background
            .0
            .iter()
            .cloned()
            .cycle()
            .take(self.plane.len() * CHANNELS)
            .collect();

        crossbeam::scope(|spawner| {
            for (band, region) in raw.chunks_mut(band_len).enumerate() {
                let top = (band * rows_per_band) as u32;
                spawner.spawn(move |_| self.render_band(region, top));
            }
        })
        .map_err(|_| RenderError::WorkerPanic)?;

        info!("Render complete");
        RgbImage::from_raw(width, height, raw)
            .ok_or(RenderError::InvalidDimension { width, height })
    }

    // Fill one band of raw RGB bytes whose first row is `top`.
    fn render_band(&self, region: &mut [u8], top: u32) {
        let width = self.plane.width();
        let rows = (region.len() / (width as usize * CHANNELS)) as u32;
        debug!("Band rows {}..{}", top, top + rows);
        for (x, y) in iproduct!(0..width, 0..rows) {
            let color = self.color_at(&Pixel(x, top + y));
            let offset = (y as usize * width as usize + x as usize) * CHANNELS;
            region[offset..offset + CHANNELS].copy_from_slice(&color.0);
        }
    }
}

/// Render a whole image in one call, on the current thread.
pub fn create_image(
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Result<RgbImage, RenderError> {
    Ok(Renderer::new(width, height, *config)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow(max_iter: usize) -> RenderConfig {
        RenderConfig::narrow().with_max_iter(max_iter)
    }

    #[test]
    fn renderer_fails_on_empty_canvas() {
        match Renderer::new(0, 3, RenderConfig::default()) {
            Err(RenderError::InvalidDimension { width: 0, height: 3 }) => {}
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
        assert!(create_image(3, 0, &RenderConfig::default()).is_err());
    }

    #[test]
    fn three_by_three_has_black_centre_and_gray_corner() {
        let img = create_image(3, 3, &narrow(50)).unwrap();
        assert_eq!(*img.get_pixel(1, 1), Rgb([0, 0, 0]));
        let corner = img.get_pixel(0, 0).0;
        assert!(corner[0] > 0 && corner[0] < 255);
        assert_eq!(corner[0], corner[1]);
        assert_eq!(corner[1], corner[2]);
    }

    #[test]
    fn three_by_three_corner_escapes_on_third_step() {
        // c = -4/3 + 2/3i: z goes c, -1.11i, -2.57+0.67i.
        let img = create_image(3, 3, &narrow(50)).unwrap();
        assert_eq!(*img.get_pixel(0, 0), Rgb([3, 3, 3]));
    }

    #[test]
    fn every_cell_is_written_exactly_once() {
        for &(w, h) in &[(1, 1), (1, 7), (7, 1), (13, 9)] {
            let plane = ViewportMapper::new(w, h, 4.0, 2.0).unwrap();
            let mut writes = vec![0u32; plane.len()];
            populate(&plane, &narrow(30), |Pixel(x, y), _| {
                writes[(y * w + x) as usize] += 1;
            });
            assert!(writes.iter().all(|&n| n == 1), "{}x{}: {:?}", w, h, writes);
        }
    }

    #[test]
    fn renders_are_bit_identical() {
        let r = Renderer::new(40, 30, RenderConfig::wide()).unwrap();
        assert_eq!(r.render().into_raw(), r.render().into_raw());
        let again = create_image(40, 30, &RenderConfig::wide()).unwrap();
        assert_eq!(r.render().into_raw(), again.into_raw());
    }

    #[test]
    fn threaded_render_matches_single_thread() {
        let r = Renderer::new(37, 23, narrow(100)).unwrap();
        let single = r.render().into_raw();
        for threads in 1..6 {
            let threaded = r.render_threaded(threads).unwrap().into_raw();
            assert_eq!(single, threaded, "{} threads", threads);
        }
    }

    #[test]
    fn more_threads_than_rows_is_fine() {
        let r = Renderer::new(5, 3, narrow(100)).unwrap();
        assert_eq!(r.render().into_raw(), r.render_threaded(16).unwrap().into_raw());
    }

    #[test]
    fn absurd_thread_counts_do_not_overflow() {
        let r = Renderer::new(5, 3, narrow(100)).unwrap();
        let threaded = r.render_threaded(usize::max_value()).unwrap();
        assert_eq!(r.render().into_raw(), threaded.into_raw());
    }

    #[test]
    fn pixels_are_colored_from_the_tagged_escape() {
        use escape::Escape;

        let r = Renderer::new(3, 3, narrow(50)).unwrap();
        // Centre is the cardioid fast path, the corner escapes on step 3.
        assert_eq!(r.color_at(&Pixel(1, 1)), escape_color(Escape::Interior));
        assert_eq!(r.color_at(&Pixel(0, 0)), escape_color(Escape::Escaped(3)));
    }

    #[test]
    fn zero_threads_is_an_error() {
        let r = Renderer::new(5, 3, narrow(100)).unwrap();
        match r.render_threaded(0) {
            Err(RenderError::InvalidThreadCount) => {}
            other => panic!("expected InvalidThreadCount, got {:?}", other),
        }
    }

    #[test]
    fn render_into_rejects_mismatched_buffer() {
        let r = Renderer::new(4, 4, narrow(100)).unwrap();
        let mut wrong = RgbImage::from_pixel(4, 5, Rgb([9, 9, 9]));
        assert!(r.render_into(&mut wrong).is_err());
        assert!(wrong.pixels().all(|p| *p == Rgb([9, 9, 9])));
    }

    #[test]
    fn render_into_overwrites_the_whole_buffer() {
        let r = Renderer::new(9, 6, narrow(100)).unwrap();
        let mut buffer = RgbImage::from_pixel(9, 6, Rgb([1, 2, 3]));
        r.render_into(&mut buffer).unwrap();
        assert_eq!(buffer.into_raw(), r.render().into_raw());
    }

    #[test]
    fn background_does_not_leak_into_output() {
        let config = narrow(100).with_background(Rgb([200, 0, 0]));
        let img = create_image(11, 11, &config).unwrap();
        assert!(img.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
    }
}
