// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time estimation for a single point of the complex plane.

use num::Complex;

/// The color index given to points that never escaped.
pub const INSIDE: u8 = 255;

/// Once |z|² reaches this, the orbit is known to diverge.
const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// This is our classic iterator function, which returns the number of
/// iterations it took `point` to leave the circle of radius two, or
/// nothing at all if it was still inside after `limit` iterations.
///
/// The modulus is taken from the value of `z` *before* the step that
/// advances it, so the reported iteration is one later than the step
/// that actually carried the orbit out of the circle.
pub fn escape_time(point: Complex<f64>, limit: u32) -> Option<u32> {
    let mut z = Complex::new(0.0_f64, 0.0_f64);
    for i in 0..limit {
        let modulus = z.norm_sqr();
        z = z * z + point;
        if modulus >= ESCAPE_RADIUS_SQR {
            return Some(i);
        }
    }
    None
}

/// Map an escape time to a palette index.  Escaped points wrap modulo
/// 255 rather than saturating, so an orbit that escapes at iteration
/// 255 gets the same color as one that escapes immediately.
pub fn color_index(escape: Option<u32>) -> u8 {
    match escape {
        None => INSIDE,
        Some(i) => (i % 255) as u8,
    }
}

/// The color index for `point`, iterating at most `limit` times.
#[inline]
pub fn estimate(point: Complex<f64>, limit: u32) -> u8 {
    color_index(escape_time(point, limit))
}
