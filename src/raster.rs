// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sun raster output.
//!
//! A Sun raster file is a 32-byte header of eight big-endian 32-bit
//! words, an optional color map, and then the pixels.  We always write
//! an 8-bit image with a 256-entry RGB color map stored as three
//! 256-byte planes: every red value, then every green, then every
//! blue.
//!
//! | word | field      | value             |
//! |------|------------|-------------------|
//! | 0    | magic      | `0x59a66a95`      |
//! | 1    | width      | image width       |
//! | 2    | height     | image height      |
//! | 3    | depth      | 8                 |
//! | 4    | length     | width * height    |
//! | 5    | type       | 1, standard       |
//! | 6    | map type   | 1, equal RGB      |
//! | 7    | map length | 768               |

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use error::Error;

/// Identifies a Sun raster file.
pub const RAS_MAGIC: u32 = 0x59a6_6a95;
/// Uncompressed pixel data.
pub const RT_STANDARD: u32 = 1;
/// The color map is three equal-length planes of red, green and blue.
pub const RMT_EQUAL_RGB: u32 = 1;
/// Bytes in a header.
pub const HEADER_LEN: usize = 32;
/// Bytes in the color map.
pub const PALETTE_LEN: usize = 256 * 3;

/// The eight words at the head of every raster file, less the magic
/// number, which never varies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RasterHeader {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bits per pixel.
    pub depth: u32,
    /// Bytes of pixel data.
    pub length: u32,
    /// Encoding of the pixel data.
    pub kind: u32,
    /// Layout of the color map.
    pub maptype: u32,
    /// Bytes of color map.
    pub maplength: u32,
}

impl RasterHeader {
    /// The header for an 8-bit, palette-mapped image of the given
    /// size.
    pub fn new(width: u32, height: u32) -> Result<RasterHeader, Error> {
        let length = width
            .checked_mul(height)
            .ok_or(Error::TooLarge { width, height })?;
        Ok(RasterHeader {
            width,
            height,
            depth: 8,
            length,
            kind: RT_STANDARD,
            maptype: RMT_EQUAL_RGB,
            maplength: PALETTE_LEN as u32,
        })
    }

    /// Serialize as eight big-endian words, whatever the byte order of
    /// the host.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let words = [
            RAS_MAGIC,
            self.width,
            self.height,
            self.depth,
            self.length,
            self.kind,
            self.maptype,
            self.maplength,
        ];
        let mut bytes = [0u8; HEADER_LEN];
        for (slot, word) in bytes.chunks_mut(4).zip(words.iter()) {
            slot.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Read a header back from the start of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<RasterHeader, Error> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::Truncated {
                expected: HEADER_LEN,
                actual: bytes.len(),
            });
        }
        let word = |n: usize| {
            let b = &bytes[n * 4..n * 4 + 4];
            u32::from_be_bytes([b[0], b[1], b[2], b[3]])
        };
        let magic = word(0);
        if magic != RAS_MAGIC {
            return Err(Error::BadMagic(magic));
        }
        Ok(RasterHeader {
            width: word(1),
            height: word(2),
            depth: word(3),
            length: word(4),
            kind: word(5),
            maptype: word(6),
            maplength: word(7),
        })
    }
}

/// The color map: red ramps up at half speed, green wraps every 190
/// entries, and blue climbs in steps of two, wrapping every 120.
pub fn palette() -> [u8; PALETTE_LEN] {
    let mut map = [0u8; PALETTE_LEN];
    {
        let (red, rest) = map.split_at_mut(256);
        let (green, blue) = rest.split_at_mut(256);
        for i in 0..256usize {
            red[i] = (i / 2) as u8;
            green[i] = (i % 190) as u8;
            blue[i] = ((i % 120) * 2) as u8;
        }
    }
    map
}

/// Write a complete raster image to `out`.
pub fn encode<W: Write>(out: &mut W, width: u32, height: u32, pixels: &[u8]) -> Result<(), Error> {
    let header = RasterHeader::new(width, height)?;
    check_len(&header, pixels)?;
    out.write_all(&header.to_bytes())?;
    out.write_all(&palette())?;
    out.write_all(pixels)?;
    Ok(())
}

fn check_len(header: &RasterHeader, pixels: &[u8]) -> Result<(), Error> {
    if pixels.len() != header.length as usize {
        return Err(Error::BufferSize {
            expected: header.length as usize,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Write a raster image to the file at `path`, replacing anything
/// already there.  Bad arguments are caught before the file is
/// touched; everything has been flushed by the time this returns, and
/// a write that fails part way removes what it left behind.
pub fn write_raster<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<(), Error> {
    let path = path.as_ref();
    let header = RasterHeader::new(width, height)?;
    check_len(&header, pixels)?;

    let file = File::create(path).map_err(|cause| Error::FileCreation {
        path: path.display().to_string(),
        cause,
    })?;
    let written = {
        let mut out = BufWriter::new(file);
        encode(&mut out, width, height, pixels).and_then(|_| out.flush().map_err(Error::from))
    };
    discard_on_error(path, written)?;

    info!(
        "wrote {}x{} raster to {} ({} bytes)",
        width,
        height,
        path.display(),
        HEADER_LEN + PALETTE_LEN + pixels.len()
    );
    Ok(())
}

/// Remove the partially written file at `path` if `result` failed.
fn discard_on_error<T>(path: &Path, result: Result<T, Error>) -> Result<T, Error> {
    if result.is_err() {
        if let Err(err) = fs::remove_file(path) {
            warn!("could not remove partial file {}: {}", path.display(), err);
        }
    }
    result
}
