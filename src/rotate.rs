//! Rotation by an arbitrary angle.
//!
//! The output canvas is the bounding box of the rotated input. Every output
//! pixel is mapped back through the inverse rotation and copies the input
//! pixel it lands on, or keeps the background when it lands outside. Mapping
//! destination to source means the result has no unassigned holes.

use core::ops::Neg;

use num_traits::Float;

use crate::buffer::PixelBuffer;
use crate::container::{Container2D, Size2D};
use crate::pixel::Rgb;
use crate::view::{OrientedFrame, Point};

/// An angle in degrees, counter-clockwise positive.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees(pub f64);

impl Degrees {
    /// The same angle in `[0, 360)`.
    pub fn normalized(self) -> Self {
        let r = self.0 % 360.0;
        let r = if r < 0.0 { r + 360.0 } else { r };
        // a tiny negative remainder can round up to exactly 360
        Self(if r >= 360.0 { 0.0 } else { r })
    }

    pub fn radians(self) -> f64 {
        Float::to_radians(self.0)
    }
}

impl Neg for Degrees {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

/// Rotation of integer frame points about the origin, rounded to the
/// nearest integer (halves away from zero).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameRotation {
    sin: f64,
    cos: f64,
}

impl FrameRotation {
    pub fn new(angle: Degrees) -> Self {
        let t = angle.radians();
        Self {
            sin: Float::sin(t),
            cos: Float::cos(t),
        }
    }

    /// `(round(x·cos − y·sin), round(x·sin + y·cos))`.
    pub fn apply(&self, p: Point) -> Point {
        let (x, y) = (p.x as f64, p.y as f64);
        Point::new(
            Float::round(x * self.cos - y * self.sin) as isize,
            Float::round(x * self.sin + y * self.cos) as isize,
        )
    }
}

/// Size of the canvas holding `src` rotated by `angle`.
///
/// Both diagonals of the centered input are rotated; the canvas spans the
/// largest absolute extent of either, plus the pixel the diagonal starts on.
pub fn rotated_size<C: Container2D>(src: &C, angle: Degrees) -> Size2D {
    let frame = OrientedFrame::centered(src);
    let rot = FrameRotation::new(angle);
    let d1 = rot.apply(frame.upper_right_corner() - frame.bottom_left_corner());
    let d2 = rot.apply(frame.upper_left_corner() - frame.bottom_right_corner());
    Size2D::new(
        d1.y.unsigned_abs().max(d2.y.unsigned_abs()) + 1,
        d1.x.unsigned_abs().max(d2.x.unsigned_abs()) + 1,
    )
}

/// Rotate `src` by `angle`, filling uncovered canvas with `background`.
///
/// # Panics
///
/// When `src` is empty.
pub fn rotate_with<C>(src: &C, angle: Degrees, background: C::Item) -> PixelBuffer<C::Item>
where
    C: Container2D,
    C::Item: Clone,
{
    assert!(!src.is_empty(), "cannot rotate an empty image");
    let angle = angle.normalized();
    let size = rotated_size(src, angle);
    log::debug!(
        "rotate {}x{} by {}°: canvas {}x{}",
        src.rows(),
        src.cols(),
        angle.0,
        size.rows,
        size.cols
    );

    let from = OrientedFrame::centered(src);
    let back = FrameRotation::new(-angle);
    let mut out = PixelBuffer::filled(size.rows, size.cols, background);
    let mut to = OrientedFrame::centered(&mut out);
    for x in to.x_min()..=to.x_max() {
        for y in to.y_min()..=to.y_max() {
            let p = back.apply(Point::new(x, y));
            if let Some(v) = from.get_xy(p.x, p.y) {
                *to.at_xy_mut(x, y) = v.clone();
            }
        }
    }
    out
}

/// Rotate an RGB image by `angle` onto a black canvas.
pub fn rotate<C>(src: &C, angle: Degrees) -> PixelBuffer<Rgb>
where
    C: Container2D<Item = Rgb>,
{
    rotate_with(src, angle, Rgb::BLACK)
}
