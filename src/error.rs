//! The ways a render can fail.  Everything that happens per pixel is
//! total, so these are all raised either before the first pixel is
//! computed or after the last one, when the buffer leaves the crate.

use failure::Fail;
use image::ImageError;
use std::io;

/// Errors produced while setting up, running or writing out a render.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// A canvas dimension was zero, or a supplied buffer does not
    /// match the canvas it is meant to hold.
    #[fail(display = "invalid image dimensions {}x{}", width, height)]
    InvalidDimension {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The viewport spans must be finite and strictly positive.
    #[fail(display = "invalid viewport span {}x{}", h_span, v_span)]
    InvalidSpan {
        /// Horizontal extent on the complex plane.
        h_span: f64,
        /// Vertical extent on the complex plane.
        v_span: f64,
    },

    /// A threaded render was asked to run on no threads at all.
    #[fail(display = "thread count must be at least 1")]
    InvalidThreadCount,

    /// One of the render threads panicked.
    #[fail(display = "a render thread panicked")]
    WorkerPanic,

    /// Writing the finished image failed at the filesystem level.
    #[fail(display = "could not write image: {}", _0)]
    Io(#[cause] io::Error),

    /// The image encoder rejected the buffer or the output format.
    #[fail(display = "could not encode image: {}", _0)]
    Image(#[cause] ImageError),
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<ImageError> for RenderError {
    fn from(e: ImageError) -> Self {
        RenderError::Image(e)
    }
}
