// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Grid struct, which describes a relationship between
//! a rectangle on the integral plane with an origin at 0,0, and a
//! rectangle on the complex plane with an arbitrary pair of corners
//! defining its leftlower and rightupper corners.
//!
//! The corners of the integral plane land exactly on the corners of
//! the complex plane: pixel 0 samples `xmin` and pixel `width - 1`
//! samples `xmax`.
use error::Error;
use num::Complex;

/// Describes the lower-left corner and upper-right corner of the
/// complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.  Nothing checks that the corners are the right way
/// around; an inverted region simply samples backwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region(pub Complex<f64>, pub Complex<f64>);

impl Region {
    /// Build a region from its four bounds.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Region {
        Region(Complex::new(xmin, ymin), Complex::new(xmax, ymax))
    }
}

impl Default for Region {
    /// The square [-2, 2] x [-2, 2], which holds the whole set.
    fn default() -> Region {
        Region::new(-2.0, -2.0, 2.0, 2.0)
    }
}

/// The column and row of a pixel, in that order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// A width x height lattice of sample points over a Region.
#[derive(Copy, Clone, Debug)]
pub struct Grid {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// The sampled rectangle.
    pub region: Region,
    // The distance between neighbouring samples along each axis.
    increments: (f64, f64),
    len: usize,
}

impl Grid {
    /// Constructor.  Takes the size of the integral plane and the
    /// region of the complex plane it samples.  Both dimensions must
    /// be at least 2, since the sample step divides by `size - 1`.
    pub fn new(width: u32, height: u32, region: Region) -> Result<Grid, Error> {
        if width < 2 || height < 2 {
            return Err(Error::DegenerateDimensions { width, height });
        }

        // The raster header stores the pixel count in 32 bits.
        let len = width
            .checked_mul(height)
            .ok_or(Error::TooLarge { width, height })? as usize;

        let Region(leftlower, rightupper) = region;
        let increments = (
            (rightupper.re - leftlower.re) / f64::from(width - 1),
            (rightupper.im - leftlower.im) / f64::from(height - 1),
        );

        Ok(Grid {
            width,
            height,
            region,
            increments,
            len,
        })
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A grid is never empty; both sides are at least 2.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The step between neighbouring samples, as (xinc, yinc).
    pub fn increments(&self) -> (f64, f64) {
        self.increments
    }

    /// Given a pixel on the integral plane, return the point on the
    /// complex plane that it samples.  The coordinate comes straight
    /// from the index, never from a running sum, so every thread sees
    /// the same value for the same pixel.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let leftlower = self.region.0;
        Complex::new(
            leftlower.re + (pixel.0 as f64) * self.increments.0,
            leftlower.im + (pixel.1 as f64) * self.increments.1,
        )
    }

    /// The pixel stored at `offset` in a row-major buffer.
    #[inline]
    pub fn offset_to_pixel(&self, offset: usize) -> Pixel {
        let width = self.width as usize;
        Pixel(offset % width, offset / width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rejects_single_column() {
        match Grid::new(1, 800, Region::default()) {
            Err(Error::DegenerateDimensions { width, height }) => {
                assert_eq!((width, height), (1, 800))
            }
            other => panic!("expected DegenerateDimensions, got {:?}", other),
        }
    }

    #[test]
    fn grid_rejects_single_row() {
        assert!(Grid::new(800, 1, Region::default()).is_err());
        assert!(Grid::new(0, 0, Region::default()).is_err());
    }

    #[test]
    fn grid_rejects_pixel_counts_past_32_bits() {
        match Grid::new(65536, 65536, Region::default()) {
            Err(Error::TooLarge { width, height }) => assert_eq!((width, height), (65536, 65536)),
            other => panic!("expected TooLarge, got {:?}", other),
        }
        assert!(Grid::new(65536, 65535, Region::default()).is_ok());
    }

    #[test]
    fn grid_passes_on_good_shape() {
        let grid = Grid::new(4, 3, Region::default()).unwrap();
        assert_eq!(grid.len(), 12);
        assert!(!grid.is_empty());
    }

    #[test]
    fn inverted_region_is_accepted() {
        let grid = Grid::new(3, 3, Region::new(1.0, 1.0, -1.0, -1.0)).unwrap();
        assert_eq!(grid.increments(), (-1.0, -1.0));
    }

    #[test]
    fn increments_span_the_corners() {
        let grid = Grid::new(3, 2, Region::new(-1.0, -1.0, 1.0, 1.0)).unwrap();
        assert_eq!(grid.increments(), (1.0, 2.0));
    }

    #[test]
    fn pixel_to_point_on_positive_planes() {
        let grid = Grid::new(5, 5, Region::new(0.0, 0.0, 4.0, 4.0)).unwrap();
        assert_eq!(grid.pixel_to_point(&Pixel(0, 0)), Complex::new(0.0, 0.0));
        assert_eq!(grid.pixel_to_point(&Pixel(2, 3)), Complex::new(2.0, 3.0));
        assert_eq!(grid.pixel_to_point(&Pixel(4, 4)), Complex::new(4.0, 4.0));
    }

    #[test]
    fn pixel_to_point_on_mixed_planes() {
        let grid = Grid::new(5, 5, Region::default()).unwrap();
        assert_eq!(grid.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(grid.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(grid.pixel_to_point(&Pixel(4, 0)), Complex::new(2.0, -2.0));
    }

    #[test]
    fn offset_to_pixel_is_row_major() {
        let grid = Grid::new(3, 2, Region::default()).unwrap();
        assert_eq!(grid.offset_to_pixel(0), Pixel(0, 0));
        assert_eq!(grid.offset_to_pixel(2), Pixel(2, 0));
        assert_eq!(grid.offset_to_pixel(3), Pixel(0, 1));
        assert_eq!(grid.offset_to_pixel(5), Pixel(2, 1));
    }
}
