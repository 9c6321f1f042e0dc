// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Filling a pixel grid with escape-time color indices.
//!
//! Every pixel is independent of every other, so the multi-threaded
//! fill cuts the flat buffer into fixed-size chunks and lets a pool of
//! scoped threads pull chunks off a shared queue until it runs dry.
//! Points near the edge of the set take far longer than points well
//! outside it, and handing out small chunks on demand keeps the
//! threads evenly loaded.  Chunks are disjoint slices of the one
//! buffer, so the threads never touch each other's pixels.

extern crate crossbeam;

use itertools::iproduct;
use std::sync::Mutex;

use error::Error;
use escape::estimate;
use planes::{Grid, Pixel};

/// Number of pixels handed to a worker at a time.
pub const CHUNK: usize = 1024;

/// Obtain a zeroed buffer of `len` bytes, reporting failure instead of
/// aborting the process.
pub fn allocate(len: usize) -> Result<Vec<u8>, Error> {
    let mut buffer: Vec<u8> = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::Allocation { bytes: len })?;
    buffer.resize(len, 0);
    Ok(buffer)
}

/// Takes a grid and a limit (the number of iterations to conduct
/// per point) and colors every pixel of the grid by how quickly its
/// point escapes.
pub struct Renderer {
    grid: Grid,
    limit: u32,
}

impl Renderer {
    /// Requires the grid to sample and the maximum number of
    /// iterations to perform for each point.
    pub fn new(grid: Grid, limit: u32) -> Self {
        Renderer { grid, limit }
    }

    /// The grid this renderer samples.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn check(&self, buffer: &[u8]) -> Result<(), Error> {
        if buffer.len() != self.grid.len() {
            return Err(Error::BufferSize {
                expected: self.grid.len(),
                actual: buffer.len(),
            });
        }
        Ok(())
    }

    /// Color one chunk of the buffer, `start` being the offset of its
    /// first pixel.
    fn fill_chunk(&self, start: usize, chunk: &mut [u8]) {
        for (i, pixel) in chunk.iter_mut().enumerate() {
            let point = self.grid.pixel_to_point(&self.grid.offset_to_pixel(start + i));
            *pixel = estimate(point, self.limit);
        }
    }

    /// The single-threaded fill: walk the grid row by row.
    pub fn fill_single(&self, buffer: &mut [u8]) -> Result<(), Error> {
        self.check(buffer)?;
        let rows = 0..self.grid.height as usize;
        let columns = 0..self.grid.width as usize;
        for (pixel, (row, column)) in buffer.iter_mut().zip(iproduct!(rows, columns)) {
            let point = self.grid.pixel_to_point(&Pixel(column, row));
            *pixel = estimate(point, self.limit);
        }
        Ok(())
    }

    /// The multi-threaded fill.  All workers have finished by the time
    /// this returns, and the result is the same for any thread count.
    pub fn fill(&self, buffer: &mut [u8], threads: usize) -> Result<(), Error> {
        self.check(buffer)?;
        if threads <= 1 {
            return self.fill_single(buffer);
        }

        debug!(
            "filling {} pixels in chunks of {} on {} threads",
            buffer.len(),
            CHUNK,
            threads
        );
        let chunks = Mutex::new(buffer.chunks_mut(CHUNK).enumerate());
        crossbeam::scope(|spawner| {
            for worker in 0..threads {
                let chunks = &chunks;
                spawner.spawn(move |_| {
                    let mut done = 0;
                    loop {
                        let chunk = match chunks.lock() {
                            Ok(mut chunks) => chunks.next(),
                            Err(_) => break,
                        };
                        match chunk {
                            Some((index, chunk)) => {
                                self.fill_chunk(index * CHUNK, chunk);
                                done += 1;
                            }
                            None => {
                                break;
                            }
                        }
                    }
                    debug!("worker {} filled {} chunks", worker, done);
                });
            }
        })
        .map_err(|_| Error::WorkerPanicked)
    }

    /// Allocate a buffer and fill it on the current thread.
    pub fn render_single(&self) -> Result<Vec<u8>, Error> {
        let mut buffer = allocate(self.grid.len())?;
        self.fill_single(&mut buffer)?;
        Ok(buffer)
    }

    /// Allocate a buffer and fill it on `threads` threads.
    pub fn render(&self, threads: usize) -> Result<Vec<u8>, Error> {
        let mut buffer = allocate(self.grid.len())?;
        self.fill(&mut buffer, threads)?;
        Ok(buffer)
    }
}
