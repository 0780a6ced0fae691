//! The escape-time engine and its fast path.
//!
//! A point `c` belongs to the Mandelbrot set if the orbit of zero under
//! `z ← z² + c` stays bounded.  Once `|z|` passes 2 the orbit is known
//! to run off to infinity, so we count how many steps that takes and
//! call it the point's escape time.

use num::Complex;

/// What became of a single point.  Rendering only cares about the step
/// count, but keeping the two flavours of "did not escape" apart makes
/// it possible to tell them apart later, e.g. for smooth coloring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Escape {
    /// The point is inside the main cardioid; no iteration was done.
    Interior,
    /// The orbit was still bounded when the iteration budget ran out.
    Bounded,
    /// The orbit left the radius-2 disc at this step.
    Escaped(usize),
}

impl Escape {
    /// Collapse to the classic escape count, where 0 stands for both
    /// kinds of non-escaping point.
    pub fn steps(self) -> usize {
        match self {
            Escape::Interior | Escape::Bounded => 0,
            Escape::Escaped(i) => i,
        }
    }
}

/// True if the point lies strictly inside the main cardioid, the big
/// heart-shaped bulb of the set, using its polar form around 1/4.
/// Points on or outside the boundary return false; they still have to
/// be iterated, but nothing this reports as inside will ever escape.
pub fn inside_cardioid(x0: f64, y0: f64) -> bool {
    let dx = x0 - 0.25;
    let r = 0.5 - 0.5 * y0.atan2(dx).cos();
    dx * dx + y0 * y0 < r * r
}

/// This is our classic iterator function.  Starting from zero, step
/// the orbit and return the first step (counting from 1) at which
/// `|z|² > 4`, or 0 if that never happens before `max_iter`.
pub fn iterate(c: Complex<f64>, max_iter: usize) -> usize {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 1..max_iter {
        z = z * z + c;
        if z.norm_sqr() > 4.0 {
            return i;
        }
    }
    0
}

/// Like `mandelbrot`, but says why a point came back as 0.
pub fn classify(c: Complex<f64>, max_iter: usize) -> Escape {
    if inside_cardioid(c.re, c.im) {
        return Escape::Interior;
    }
    match iterate(c, max_iter) {
        0 => Escape::Bounded,
        i => Escape::Escaped(i),
    }
}

/// The escape count of a point, skipping the iteration entirely for
/// points inside the main cardioid.  This is the one used per pixel.
pub fn mandelbrot(c: Complex<f64>, max_iter: usize) -> usize {
    classify(c, max_iter).steps()
}
