//! Image constructors and drawing primitives.
//!
//! Drawing is generic over [`Container2DMut`], so the same functions draw
//! into a buffer, a sub-image, a channel view or an oriented frame. Pixels
//! that fall outside the target are skipped.

use crate::buffer::{Image, PixelBuffer};
use crate::container::{Container2D, Container2DMut, Position};
use crate::pixel::Rgb;
use crate::view::{OrientedFrame, Point, PolarFrame};

/// Angular step, in degrees, used by [`draw_circles`].
pub const DEFAULT_THETA_STEP: f64 = 0.1;

/// Image of `rows × cols` pixels of `color`.
pub fn mono_color(rows: usize, cols: usize, color: Rgb) -> Image {
    PixelBuffer::filled(rows, cols, color)
}

pub fn black(rows: usize, cols: usize) -> Image {
    mono_color(rows, cols, Rgb::BLACK)
}

/// A straight segment between two container positions, both inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub a: Position,
    pub b: Position,
}

impl Segment {
    pub const fn new(a: Position, b: Position) -> Self {
        Self { a, b }
    }

    /// Positions covered by the segment, in drawing order.
    ///
    /// Integer Bresenham: endpoints are ordered by row then column, the axis
    /// with the larger delta drives, and the error term decides each step on
    /// the other axis. The result does not depend on which endpoint is `a`.
    pub fn for_each_position<F: FnMut(Position)>(&self, mut plot: F) {
        if self.a == self.b {
            plot(self.a);
            return;
        }
        let (a, b) = if (self.a.i, self.a.j) <= (self.b.i, self.b.j) {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };
        let di = b.i - a.i;
        let dj = b.j - a.j;
        if dj.abs() <= di {
            walk(a.i, b.i, a.j, dj, |i, j| plot(Position::new(i, j)));
        } else {
            let (a, b) = if a.j <= b.j { (a, b) } else { (b, a) };
            walk(a.j, b.j, a.i, b.i - a.i, |j, i| plot(Position::new(i, j)));
        }
    }
}

/// Step `major` from `major0` to `major1` inclusive, moving `minor` by one
/// toward `minor0 + dminor` whenever the error term reaches zero.
fn walk<F: FnMut(isize, isize)>(major0: isize, major1: isize, minor0: isize, dminor: isize, mut plot: F) {
    let dmajor = major1 - major0;
    let step = dminor.signum();
    let dminor = dminor.abs();
    let mut eps = dminor - dmajor;
    let mut minor = minor0;
    for major in major0..=major1 {
        plot(major, minor);
        if eps >= 0 {
            minor += step;
            eps -= dmajor;
        }
        eps += dminor;
    }
}

/// An axis-aligned rectangle given by two inclusive corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub upper_left: Position,
    pub bottom_right: Position,
}

impl Rect {
    pub const fn new(upper_left: Position, bottom_right: Position) -> Self {
        Self {
            upper_left,
            bottom_right,
        }
    }

    pub const fn upper_right(&self) -> Position {
        Position::new(self.upper_left.i, self.bottom_right.j)
    }

    pub const fn bottom_left(&self) -> Position {
        Position::new(self.bottom_right.i, self.upper_left.j)
    }
}

fn plot<C>(c: &mut C, p: Position, v: &C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    if let Some(slot) = c.at_pos_mut(p) {
        *slot = v.clone();
    }
}

/// Draw `s` with value `v`.
pub fn draw_segment<C>(c: &mut C, s: Segment, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    s.for_each_position(|p| plot(c, p, &v));
}

/// Draw the outline of `r` as four segments.
pub fn draw_rect<C>(c: &mut C, r: Rect, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    draw_segment(c, Segment::new(r.upper_left, r.upper_right()), v.clone());
    draw_segment(c, Segment::new(r.bottom_left(), r.bottom_right), v.clone());
    draw_segment(c, Segment::new(r.upper_left, r.bottom_left()), v.clone());
    draw_segment(c, Segment::new(r.upper_right(), r.bottom_right), v);
}

/// Horizontal line across the whole of row `i`.
pub fn draw_hline<C>(c: &mut C, i: usize, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    if c.cols() == 0 {
        return;
    }
    let i = i as isize;
    let last = c.cols() as isize - 1;
    draw_segment(c, Segment::new(Position::new(i, 0), Position::new(i, last)), v);
}

/// Vertical line across the whole of column `j`.
pub fn draw_vline<C>(c: &mut C, j: usize, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    if c.rows() == 0 {
        return;
    }
    let j = j as isize;
    let last = c.rows() as isize - 1;
    draw_segment(c, Segment::new(Position::new(0, j), Position::new(last, j)), v);
}

/// Horizontal and vertical lines crossing at `p`.
pub fn draw_axes<C>(c: &mut C, p: Position, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    if let Some((i, j)) = p.to_index() {
        draw_hline(c, i, v.clone());
        draw_vline(c, j, v);
    }
}

/// The frame's x axis shifted to ordinate `y`.
pub fn draw_x_axis<C>(frame: &mut OrientedFrame<C>, y: isize, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    if let Ok(i) = usize::try_from(frame.row_of(y)) {
        draw_hline(frame, i, v);
    }
}

/// The frame's y axis shifted to abscissa `x`.
pub fn draw_y_axis<C>(frame: &mut OrientedFrame<C>, x: isize, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    if let Ok(j) = usize::try_from(frame.col_of(x)) {
        draw_vline(frame, j, v);
    }
}

/// Segment between two frame points.
pub fn draw_segment_xy<C>(frame: &mut OrientedFrame<C>, a: Point, b: Point, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    let s = Segment::new(frame.position(a), frame.position(b));
    draw_segment(frame, s, v);
}

/// Ray from the center at angle `theta` degrees, out to `r_max`.
pub fn draw_ray<C>(polar: &mut PolarFrame<C>, theta: f64, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    let r_max = polar.r_max();
    let mut r = 0.0;
    while r <= r_max {
        polar.set(r, theta, v.clone());
        r += 1.0;
    }
}

/// Circle of radius `r`, sampled every `theta_step` degrees.
///
/// # Panics
///
/// When `theta_step` is not positive.
pub fn draw_circle<C>(polar: &mut PolarFrame<C>, r: f64, v: C::Item, theta_step: f64)
where
    C: Container2DMut,
    C::Item: Clone,
{
    assert!(theta_step > 0.0, "theta step must be positive, got {theta_step}");
    let mut theta = 0.0;
    while theta < 360.0 {
        polar.set(r, theta, v.clone());
        theta += theta_step;
    }
}

/// Rays every `theta_step` degrees.
///
/// # Panics
///
/// When `theta_step` is not positive.
pub fn draw_rays<C>(polar: &mut PolarFrame<C>, theta_step: f64, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    assert!(theta_step > 0.0, "theta step must be positive, got {theta_step}");
    let mut theta = 0.0;
    while theta < 360.0 {
        draw_ray(polar, theta, v.clone());
        theta += theta_step;
    }
}

/// Concentric circles every `r_step` pixels, from the center out to
/// `r_max`.
///
/// # Panics
///
/// When `r_step` is not positive.
pub fn draw_circles<C>(polar: &mut PolarFrame<C>, r_step: f64, v: C::Item)
where
    C: Container2DMut,
    C::Item: Clone,
{
    assert!(r_step > 0.0, "radius step must be positive, got {r_step}");
    let r_max = polar.r_max();
    let mut r = 0.0;
    while r <= r_max {
        draw_circle(polar, r, v.clone(), DEFAULT_THETA_STEP);
        r += r_step;
    }
}
