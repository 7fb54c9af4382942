//! Packed text encoding for court coordinates.
//!
//! Attack lines and defense locations are stored as single text columns with
//! their coordinates joined by `|`:
//!
//! - point: `"<x>|<y>"`, e.g. `"12.5|30.0"`
//! - line: `"<x0>|<y0>|<x1>|<y1>"`, e.g. `"0.0|0.0|9.0|9.0"`
//!
//! Each coordinate uses the shortest decimal form that parses back to the
//! same `f64`, so packing then unpacking is exact for finite values.
//!
//! # Examples
//!
//! ```rust
//! use volley_tracker::codec::{pack_line, unpack_line};
//!
//! let packed = pack_line(0.0, 0.0, 9.0, 9.0);
//! assert_eq!(packed, "0.0|0.0|9.0|9.0");
//! assert_eq!(unpack_line(&packed).unwrap(), ((0.0, 0.0), (9.0, 9.0)));
//! ```

use crate::error::{Result, VolleyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Field separator inside a packed value.
pub const SEPARATOR: char = '|';

const POINT: &str = "point";
const LINE: &str = "line";

/// Pack a single point as `"x|y"`.
pub fn pack_point(x: f64, y: f64) -> String {
    format!("{:?}{}{:?}", x, SEPARATOR, y)
}

/// Unpack a `"x|y"` string into its two coordinates.
pub fn unpack_point(data: &str) -> Result<(f64, f64)> {
    let [x, y] = split_fields::<2>(POINT, data)?;
    Ok((x, y))
}

/// Pack a line segment as `"x0|y0|x1|y1"`.
pub fn pack_line(x_origin: f64, y_origin: f64, x_end: f64, y_end: f64) -> String {
    format!(
        "{:?}{sep}{:?}{sep}{:?}{sep}{:?}",
        x_origin,
        y_origin,
        x_end,
        y_end,
        sep = SEPARATOR
    )
}

/// Unpack a `"x0|y0|x1|y1"` string into its origin and end points.
pub fn unpack_line(data: &str) -> Result<((f64, f64), (f64, f64))> {
    let [x0, y0, x1, y1] = split_fields::<4>(LINE, data)?;
    Ok(((x0, y0), (x1, y1)))
}

/// Split `data` into exactly `N` numeric fields.
///
/// A wrong field count and an unparsable field both come back as
/// [`VolleyError::Format`], so callers only have one failure to handle.
fn split_fields<const N: usize>(shape: &'static str, data: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = data.split(SEPARATOR).collect();
    if parts.len() != N {
        return Err(VolleyError::format(
            shape,
            data,
            format!(
                "expected {} fields separated by '{}', found {}",
                N,
                SEPARATOR,
                parts.len()
            ),
        ));
    }

    let mut values = [0.0; N];
    for (index, (slot, part)) in values.iter_mut().zip(&parts).enumerate() {
        *slot = part.trim().parse::<f64>().map_err(|e| {
            VolleyError::format(
                shape,
                data,
                format!("field {} ({part:?}) is not a number: {e}", index + 1),
            )
        })?;
    }
    Ok(values)
}

/// A location on the court, e.g. where a dig was made.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Packed `"x|y"` form for storage.
    pub fn pack(&self) -> String {
        pack_point(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pack())
    }
}

impl FromStr for Point {
    type Err = VolleyError;

    fn from_str(s: &str) -> Result<Self> {
        unpack_point(s).map(Point::from)
    }
}

/// The path of an attack, from contact point to landing point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Packed `"x0|y0|x1|y1"` form for storage.
    pub fn pack(&self) -> String {
        pack_line(self.start.x, self.start.y, self.end.x, self.end.y)
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

impl From<((f64, f64), (f64, f64))> for Line {
    fn from((start, end): ((f64, f64), (f64, f64))) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl From<Line> for ((f64, f64), (f64, f64)) {
    fn from(line: Line) -> Self {
        (line.start.into(), line.end.into())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pack())
    }
}

impl FromStr for Line {
    type Err = VolleyError;

    fn from_str(s: &str) -> Result<Self> {
        unpack_line(s).map(Line::from)
    }
}
