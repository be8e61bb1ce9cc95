use core::ops::{Add, Neg, Sub};

use crate::container::{Container2D, Container2DMut, Position};

/// Direction of one frame axis relative to the container's index growth.
///
/// For x, `Positive` means x grows with the column index (rightward). For y,
/// `Positive` means y grows as the row index shrinks (upward).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisSign {
    Positive,
    Negative,
}

impl AxisSign {
    pub const fn value(self) -> isize {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

/// An axis sign other than `+1` or `-1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("axis sign must be +1 or -1, got {0}")]
pub struct AxisSignError(pub i32);

impl TryFrom<i32> for AxisSign {
    type Error = AxisSignError;

    fn try_from(v: i32) -> Result<Self, AxisSignError> {
        match v {
            1 => Ok(Self::Positive),
            -1 => Ok(Self::Negative),
            _ => Err(AxisSignError(v)),
        }
    }
}

/// The `(x, y)` axis directions of an [`OrientedFrame`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AxisSigns {
    pub x: AxisSign,
    pub y: AxisSign,
}

impl AxisSigns {
    /// x rightward, y upward.
    pub const CARTESIAN: Self = Self {
        x: AxisSign::Positive,
        y: AxisSign::Positive,
    };
    /// x rightward, y downward.
    pub const SCREEN: Self = Self {
        x: AxisSign::Positive,
        y: AxisSign::Negative,
    };

    /// Validate a `(x_sign, y_sign)` pair given as integers.
    pub fn new(x: i32, y: i32) -> Result<Self, AxisSignError> {
        Ok(Self {
            x: AxisSign::try_from(x)?,
            y: AxisSign::try_from(y)?,
        })
    }
}

impl Default for AxisSigns {
    fn default() -> Self {
        Self::CARTESIAN
    }
}

/// A point in frame coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y)
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Signed Cartesian `(x, y)` indexing over a container, with a movable
/// origin.
///
/// With origin `(i0, j0)` in container indices, the point `(x, y)` is the
/// element `(i0 - y_sign * y, j0 + x_sign * x)`. The origin is always kept in
/// container indices, so moving it never accumulates drift and never touches
/// pixel storage.
///
/// As a [`Container2D`] the frame passes container indices straight through,
/// which lets channel views and sub-images wrap a frame unchanged.
#[derive(Clone, Debug)]
pub struct OrientedFrame<C> {
    inner: C,
    signs: AxisSigns,
    origin: Position,
}

impl<C: Container2D> OrientedFrame<C> {
    /// Cartesian frame (x right, y up) with the origin at the top-left pixel.
    pub fn new(inner: C) -> Self {
        Self::with_signs(inner, AxisSigns::CARTESIAN)
    }

    pub fn with_signs(inner: C, signs: AxisSigns) -> Self {
        Self {
            inner,
            signs,
            origin: Position::new(0, 0),
        }
    }

    /// Cartesian frame with the origin already at the center.
    pub fn centered(inner: C) -> Self {
        let mut f = Self::new(inner);
        f.center_origin();
        f
    }

    pub fn signs(&self) -> AxisSigns {
        self.signs
    }

    /// Current origin in container indices.
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Put the origin on `(rows / 2, cols / 2)`.
    pub fn center_origin(&mut self) {
        self.origin = Position::from((self.inner.rows() / 2, self.inner.cols() / 2));
    }

    /// Make the element currently at `(x, y)` the new `(0, 0)`.
    pub fn set_origin(&mut self, x: isize, y: isize) {
        self.origin = self.position(Point::new(x, y));
    }

    /// Container index of a frame point.
    pub fn position(&self, p: Point) -> Position {
        Position::new(self.row_of(p.y), self.col_of(p.x))
    }

    /// Frame point of a container index.
    pub fn point(&self, pos: Position) -> Point {
        Point::new(
            self.signs.x.value() * (pos.j - self.origin.j),
            self.signs.y.value() * (self.origin.i - pos.i),
        )
    }

    /// Container row holding frame ordinate `y`.
    pub fn row_of(&self, y: isize) -> isize {
        self.origin.i - self.signs.y.value() * y
    }

    /// Container column holding frame abscissa `x`.
    pub fn col_of(&self, x: isize) -> isize {
        self.origin.j + self.signs.x.value() * x
    }

    fn last(&self) -> Position {
        Position::new(self.inner.rows() as isize - 1, self.inner.cols() as isize - 1)
    }

    pub fn x_min(&self) -> isize {
        let a = self.point(Position::new(0, 0)).x;
        let b = self.point(self.last()).x;
        a.min(b)
    }

    pub fn x_max(&self) -> isize {
        let a = self.point(Position::new(0, 0)).x;
        let b = self.point(self.last()).x;
        a.max(b)
    }

    pub fn y_min(&self) -> isize {
        let a = self.point(Position::new(0, 0)).y;
        let b = self.point(self.last()).y;
        a.min(b)
    }

    pub fn y_max(&self) -> isize {
        let a = self.point(Position::new(0, 0)).y;
        let b = self.point(self.last()).y;
        a.max(b)
    }

    /// Frame point of the top-left pixel as displayed.
    pub fn upper_left_corner(&self) -> Point {
        self.point(Position::new(0, 0))
    }

    pub fn upper_right_corner(&self) -> Point {
        self.point(Position::new(0, self.last().j))
    }

    pub fn bottom_left_corner(&self) -> Point {
        self.point(Position::new(self.last().i, 0))
    }

    pub fn bottom_right_corner(&self) -> Point {
        self.point(self.last())
    }

    pub fn contains_xy(&self, x: isize, y: isize) -> bool {
        self.inner.contains(self.position(Point::new(x, y)))
    }

    pub fn get_xy(&self, x: isize, y: isize) -> Option<&C::Item> {
        self.inner.at_pos(self.position(Point::new(x, y)))
    }

    /// Element at `(x, y)`.
    ///
    /// # Panics
    ///
    /// When `(x, y)` lies outside the container.
    pub fn at_xy(&self, x: isize, y: isize) -> &C::Item {
        let (i, j) = self.index_of(x, y);
        self.inner.at(i, j)
    }

    fn index_of(&self, x: isize, y: isize) -> (usize, usize) {
        let pos = self.position(Point::new(x, y));
        match pos.to_index() {
            Some(ij) if self.inner.contains(pos) => ij,
            _ => panic!("({x}, {y}) outside the frame"),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Container2DMut> OrientedFrame<C> {
    /// Element at `(x, y)`, mutably.
    ///
    /// # Panics
    ///
    /// When `(x, y)` lies outside the container.
    pub fn at_xy_mut(&mut self, x: isize, y: isize) -> &mut C::Item {
        let (i, j) = self.index_of(x, y);
        self.inner.at_mut(i, j)
    }

    pub fn get_xy_mut(&mut self, x: isize, y: isize) -> Option<&mut C::Item> {
        let pos = self.position(Point::new(x, y));
        self.inner.at_pos_mut(pos)
    }

    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }
}

impl<C: Container2D> Container2D for OrientedFrame<C> {
    type Item = C::Item;

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn at(&self, i: usize, j: usize) -> &C::Item {
        self.inner.at(i, j)
    }
}

impl<C: Container2DMut> Container2DMut for OrientedFrame<C> {
    fn at_mut(&mut self, i: usize, j: usize) -> &mut C::Item {
        self.inner.at_mut(i, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Image, PixelBuffer, Rgb};

    fn numbered() -> PixelBuffer<usize> {
        PixelBuffer::from_fn(5, 7, |i, j| i * 7 + j)
    }

    #[test]
    fn axis_sign_validation() {
        assert_eq!(AxisSigns::new(1, -1), Ok(AxisSigns::SCREEN));
        assert_eq!(AxisSigns::new(1, 1), Ok(AxisSigns::CARTESIAN));
        assert_eq!(AxisSigns::new(0, 1), Err(AxisSignError(0)));
        assert_eq!(AxisSigns::new(1, 2), Err(AxisSignError(2)));
    }

    #[test]
    fn top_left_origin_cartesian() {
        let img = numbered();
        let f = OrientedFrame::new(&img);
        assert_eq!((f.x_min(), f.x_max()), (0, 6));
        assert_eq!((f.y_min(), f.y_max()), (-4, 0));
        assert_eq!(*f.at_xy(3, -2), 2 * 7 + 3);
        assert!(!f.contains_xy(0, 1));
        assert_eq!(f.get_xy(-1, 0), None);
    }

    #[test]
    fn centered_bounds() {
        let img = numbered();
        let f = OrientedFrame::centered(&img);
        assert_eq!(f.origin(), Position::new(2, 3));
        assert_eq!((f.x_min(), f.x_max()), (-3, 3));
        assert_eq!((f.y_min(), f.y_max()), (-2, 2));
        assert_eq!(*f.at_xy(0, 0), 2 * 7 + 3);
        assert_eq!(*f.at_xy(3, 2), 6);
        assert_eq!(*f.at_xy(-3, -2), 4 * 7);
    }

    #[test]
    fn centering_twice_is_idempotent() {
        let img = numbered();
        let mut f = OrientedFrame::new(&img);
        f.center_origin();
        let once = (f.x_min(), f.x_max(), f.y_min(), f.y_max());
        f.center_origin();
        assert_eq!((f.x_min(), f.x_max(), f.y_min(), f.y_max()), once);
    }

    #[test]
    fn set_origin_accumulates() {
        let img = numbered();
        let mut f = OrientedFrame::centered(&img);
        f.set_origin(1, 1);
        f.set_origin(1, 1);
        assert_eq!(f.origin(), Position::new(0, 5));
        assert_eq!(*f.at_xy(0, 0), 5);
        assert_eq!((f.x_min(), f.x_max()), (-5, 1));
    }

    #[test]
    fn screen_signs_flip_y() {
        let img = numbered();
        let f = OrientedFrame::with_signs(&img, AxisSigns::SCREEN);
        assert_eq!(*f.at_xy(2, 3), 3 * 7 + 2);
        assert_eq!((f.y_min(), f.y_max()), (0, 4));
    }

    #[test]
    fn corners_follow_signs() {
        let img = numbered();
        let f = OrientedFrame::centered(&img);
        assert_eq!(f.upper_left_corner(), Point::new(-3, 2));
        assert_eq!(f.upper_right_corner(), Point::new(3, 2));
        assert_eq!(f.bottom_left_corner(), Point::new(-3, -2));
        assert_eq!(f.bottom_right_corner(), Point::new(3, -2));

        let mirrored = AxisSigns::new(-1, -1).unwrap();
        let g = OrientedFrame::with_signs(&img, mirrored);
        assert_eq!(g.upper_left_corner(), Point::new(0, 0));
        assert_eq!(g.bottom_right_corner(), Point::new(-6, 4));
    }

    #[test]
    fn point_and_position_are_inverse() {
        let img = numbered();
        let mut f = OrientedFrame::with_signs(&img, AxisSigns::new(-1, 1).unwrap());
        f.set_origin(-2, -1);
        for i in 0..5 {
            for j in 0..7 {
                let pos = Position::new(i, j);
                assert_eq!(f.position(f.point(pos)), pos, "round trip of {pos:?}");
            }
        }
    }

    #[test]
    fn write_through_frame() {
        let mut img = Image::new(3, 3);
        let mut f = OrientedFrame::centered(&mut img);
        *f.at_xy_mut(1, 1) = Rgb::RED;
        assert!(f.get_xy_mut(2, 0).is_none());
        assert_eq!(img[(0, 2)], Rgb::RED);
    }

    #[test]
    #[should_panic(expected = "outside the frame")]
    fn out_of_frame_read_panics() {
        let img = numbered();
        let f = OrientedFrame::centered(&img);
        let _ = f.at_xy(4, 0);
    }
}
