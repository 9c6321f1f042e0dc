#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the sequence `z = z * z + c`, started at zero, stays
//! bounded.  Points outside the set eventually fly off to infinity;
//! the number of iterations it takes them to leave the circle of
//! radius two is their "escape time," and that is the number used to
//! color the image.
//!
//! This crate samples a rectangle of the complex plane on a regular
//! grid, computes the escape time of every sample in parallel, and
//! writes the result as an 8-bit Sun raster file with a synthesized
//! 256-entry palette.
//!
//! The pieces are:
//!
//! * [`escape`]: the per-point escape-time estimate.
//! * [`planes`]: the mapping from pixel grid to complex plane.
//! * [`render`]: the single- and multi-threaded grid fills.
//! * [`raster`]: the Sun raster encoder.
//! * [`params`]: the run parameters and their defaults.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod error;
pub mod escape;
pub mod params;
pub mod planes;
pub mod raster;
pub mod render;

pub use error::Error;
pub use escape::{escape_time, estimate};
pub use params::Parameters;
pub use planes::{Grid, Pixel, Region};
pub use raster::{encode, palette, write_raster, RasterHeader};
pub use render::{allocate, Renderer};
