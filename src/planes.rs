//! Contains the ViewportMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the top left corner, and a window of fixed span on the complex
//! plane centred on the origin.
use error::RenderError;
use num::Complex;

/// Describes the width and height of an integral plane that is assumed
/// to start at 0,0.  All values are non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub u32, pub u32);

/// Describes the x, y of a pixel in an image.  Row 0 is the top row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub u32, pub u32);

/// Maps pixels of an integral plane onto a window of the complex plane.
/// The window is `h_span` wide and `v_span` tall; the pixel at
/// ((width-1)/2, (height-1)/2), with integer division, lands on 0+0i.
#[derive(Debug)]
pub struct ViewportMapper {
    /// Size of the image in pixels.
    pub integral_plane: IntegralPlane,
    // Horizontal and vertical extent of the window on the complex plane.
    spans: (f64, f64),
    // The pixel that maps onto the origin.
    centre: (i64, i64),
}

impl ViewportMapper {
    /// Constructor.  Refuses empty images and spans that are not
    /// finite, positive numbers, so that mapping itself cannot fail.
    pub fn new(
        width: u32,
        height: u32,
        h_span: f64,
        v_span: f64,
    ) -> Result<ViewportMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimension { width, height });
        }

        if !(h_span.is_finite() && v_span.is_finite() && h_span > 0.0 && v_span > 0.0) {
            return Err(RenderError::InvalidSpan { h_span, v_span });
        }

        Ok(ViewportMapper {
            integral_plane: IntegralPlane(width, height),
            spans: (h_span, v_span),
            centre: ((i64::from(width) - 1) / 2, (i64::from(height) - 1) / 2),
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.integral_plane.0
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 as usize * self.integral_plane.1 as usize
    }

    /// Always false; a mapper cannot be built over an empty plane.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given a pixel on the integral plane, return the point it stands
    /// for on the complex plane.  The imaginary axis is flipped, so
    /// rows above the centre have a positive imaginary part.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let dx = i64::from(pixel.0) - self.centre.0;
        let dy = self.centre.1 - i64::from(pixel.1);
        Complex::new(
            (dx as f64) / f64::from(self.integral_plane.0) * self.spans.0,
            (dy as f64) / f64::from(self.integral_plane.1) * self.spans.1,
        )
    }
}
