#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grayscale Mandelbrot renderer
//!
//! The Mandelbrot set is the collection of points `c` on the complex
//! plane for which repeatedly squaring `z` and adding `c` never runs
//! away to infinity.  For every pixel of the image we find the point
//! it stands for, count how many squarings it takes before `|z|`
//! passes 2, and paint the pixel that many steps of gray.  Points
//! that never leave, the "black heart" of the set, stay black.
//!
//! Most of the heart lives inside the main cardioid, which has a
//! closed form, so we test for it before paying for the iteration.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod output;
pub mod planes;
pub mod render;

pub use config::{Preset, RenderConfig};
pub use error::RenderError;
pub use escape::{classify, inside_cardioid, iterate, mandelbrot, Escape};
pub use planes::{Pixel, ViewportMapper};
pub use render::{create_image, populate, Renderer};
