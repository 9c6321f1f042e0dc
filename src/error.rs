// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type shared by every stage of a render.

use std::io;

/// Everything that can stop a render from producing its raster file.
#[derive(Debug, Fail)]
pub enum Error {
    /// The pixel step is `(max - min) / (size - 1)`, so an image one
    /// pixel wide or tall has no step at all.
    #[fail(
        display = "image dimensions must be at least 2x2, got {}x{}",
        width, height
    )]
    DegenerateDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The pixel count does not fit the raster header's length field.
    #[fail(display = "an image of {}x{} pixels is too large", width, height)]
    TooLarge {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The image grid could not be allocated.
    #[fail(display = "could not allocate {} bytes for the image grid", bytes)]
    Allocation {
        /// Size of the failed request.
        bytes: usize,
    },

    /// A pixel buffer does not match the grid it is meant to hold.
    #[fail(
        display = "pixel buffer holds {} bytes, expected {}",
        actual, expected
    )]
    BufferSize {
        /// Width times height.
        expected: usize,
        /// Length of the buffer actually supplied.
        actual: usize,
    },

    /// The output file could not be opened for writing.
    #[fail(display = "could not create file {}", path)]
    FileCreation {
        /// The path as given.
        path: String,
        /// What the operating system said.
        #[fail(cause)]
        cause: io::Error,
    },

    /// A write to an already-open output failed.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[fail(cause)] io::Error),

    /// The first four bytes are not the Sun raster magic number.
    #[fail(display = "not a raster file: magic number {:#010x}", _0)]
    BadMagic(u32),

    /// Fewer bytes than a raster header needs.
    #[fail(
        display = "raster header truncated: got {} of {} bytes",
        actual, expected
    )]
    Truncated {
        /// Bytes a header occupies.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },

    /// One of the render threads panicked before finishing its chunks.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}
