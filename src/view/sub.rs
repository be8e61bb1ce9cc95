use crate::container::{Container2D, Container2DMut, Position, Size2D};

/// Rectangular window onto a container, indexed from its own top-left
/// corner.
///
/// The window never owns pixels. [`SubImage::set_extension`] moves it over
/// another rectangle of the same container in O(1), and
/// [`Container2D::to_buffer`] materialises it into an independent buffer.
#[derive(Clone, Debug)]
pub struct SubImage<C> {
    inner: C,
    i0: usize,
    j0: usize,
    size: Size2D,
}

impl<C: Container2D> SubImage<C> {
    /// Window of `size` whose top-left corner is `origin` in `inner`.
    ///
    /// # Panics
    ///
    /// When the rectangle does not fit inside `inner`.
    pub fn new(inner: C, origin: Position, size: Size2D) -> Self {
        let (i0, j0) = check_window(&inner, origin, size);
        Self { inner, i0, j0, size }
    }

    /// Window spanning `upper_left..=bottom_right`, both corners inclusive.
    ///
    /// # Panics
    ///
    /// When the corners are out of order or do not fit inside `inner`.
    pub fn from_corners(inner: C, upper_left: Position, bottom_right: Position) -> Self {
        assert!(
            upper_left.i <= bottom_right.i && upper_left.j <= bottom_right.j,
            "corners out of order: {upper_left:?} .. {bottom_right:?}"
        );
        let size = Size2D::new(
            (bottom_right.i - upper_left.i + 1) as usize,
            (bottom_right.j - upper_left.j + 1) as usize,
        );
        Self::new(inner, upper_left, size)
    }

    /// Re-point this window at another rectangle of the same container.
    ///
    /// # Panics
    ///
    /// When the new rectangle does not fit.
    pub fn set_extension(&mut self, origin: Position, size: Size2D) {
        let (i0, j0) = check_window(&self.inner, origin, size);
        self.i0 = i0;
        self.j0 = j0;
        self.size = size;
    }

    /// Top-left corner in the underlying container.
    pub fn origin(&self) -> Position {
        Position::from((self.i0, self.j0))
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    #[inline]
    fn map(&self, i: usize, j: usize) -> (usize, usize) {
        assert!(
            i < self.size.rows && j < self.size.cols,
            "({i}, {j}) outside {}x{} window",
            self.size.rows,
            self.size.cols
        );
        (self.i0 + i, self.j0 + j)
    }
}

fn check_window<C: Container2D>(inner: &C, origin: Position, size: Size2D) -> (usize, usize) {
    let fits = origin.to_index().filter(|&(i0, j0)| {
        i0.checked_add(size.rows).is_some_and(|e| e <= inner.rows())
            && j0.checked_add(size.cols).is_some_and(|e| e <= inner.cols())
    });
    match fits {
        Some(ij) => ij,
        None => panic!(
            "window at {origin:?} of {}x{} does not fit in {}x{}",
            size.rows,
            size.cols,
            inner.rows(),
            inner.cols()
        ),
    }
}

impl<C: Container2D> Container2D for SubImage<C> {
    type Item = C::Item;

    fn rows(&self) -> usize {
        self.size.rows
    }

    fn cols(&self) -> usize {
        self.size.cols
    }

    fn at(&self, i: usize, j: usize) -> &C::Item {
        let (i, j) = self.map(i, j);
        self.inner.at(i, j)
    }
}

impl<C: Container2DMut> Container2DMut for SubImage<C> {
    fn at_mut(&mut self, i: usize, j: usize) -> &mut C::Item {
        let (i, j) = self.map(i, j);
        self.inner.at_mut(i, j)
    }
}
