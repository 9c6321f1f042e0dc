// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs of a single render.

use std::path::PathBuf;

use error::Error;
use planes::{Grid, Region};
use render::Renderer;

/// Default image width and height.
pub const DEFAULT_SIZE: u32 = 800;
/// Default maximum number of iterations per point.
pub const DEFAULT_DEPTH: u32 = 200;
/// Default output file.
pub const DEFAULT_OUTPUT: &str = "mandelbrot.ras";

/// Everything needed to go from nothing to a raster file.
#[derive(Clone, Debug)]
pub struct Parameters {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// The part of the complex plane to sample.
    pub region: Region,
    /// Maximum number of iterations per point.
    pub depth: u32,
    /// Where to write the image.
    pub output: PathBuf,
    /// Number of render threads.
    pub threads: usize,
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            region: Region::default(),
            depth: DEFAULT_DEPTH,
            output: PathBuf::from(DEFAULT_OUTPUT),
            threads: num_cpus::get(),
        }
    }
}

impl Parameters {
    /// The sample grid these parameters describe.
    pub fn grid(&self) -> Result<Grid, Error> {
        Grid::new(self.width, self.height, self.region)
    }

    /// A renderer for that grid at this depth.
    pub fn renderer(&self) -> Result<Renderer, Error> {
        Ok(Renderer::new(self.grid()?, self.depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    #[test]
    fn defaults_match_the_classic_view() {
        let params = Parameters::default();
        assert_eq!((params.width, params.height, params.depth), (800, 800, 200));
        assert_eq!(params.region.0, Complex::new(-2.0, -2.0));
        assert_eq!(params.region.1, Complex::new(2.0, 2.0));
        assert_eq!(params.output, PathBuf::from("mandelbrot.ras"));
        assert!(params.threads >= 1);
    }

    #[test]
    fn degenerate_sizes_fail_before_rendering() {
        let params = Parameters {
            height: 1,
            ..Parameters::default()
        };
        assert!(params.renderer().is_err());
    }

    #[test]
    fn default_grid_covers_the_square() {
        let grid = Parameters::default().grid().unwrap();
        assert_eq!(grid.len(), 640_000);
        let step = 4.0 / 799.0;
        assert_eq!(grid.increments(), (step, step));
    }
}
