//! Iterators over any [`Container2D`].
//!
//! All of them borrow the container and go through [`Container2D::at`], so
//! they work over views of views without knowing how indices are remapped.

use core::iter::FusedIterator;
use core::ops::Sub;

use crate::container::{Container2D, Position};

/// Row-major iterator over every element of a container.
#[derive(Debug)]
pub struct Iter<'a, C: ?Sized> {
    c: &'a C,
    i: usize,
    j: usize,
    remaining: usize,
}

impl<'a, C: Container2D + ?Sized> Iter<'a, C> {
    pub(crate) fn new(c: &'a C) -> Self {
        Self {
            c,
            i: 0,
            j: 0,
            remaining: c.size(),
        }
    }

    /// Index of the element the next call to `next` returns.
    pub fn position(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

impl<C: ?Sized> Clone for Iter<'_, C> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, C: Container2D + ?Sized> Iterator for Iter<'a, C> {
    type Item = &'a C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let v = self.c.at(self.i, self.j);
        self.remaining -= 1;
        self.j += 1;
        if self.j == self.c.cols() {
            self.j = 0;
            self.i += 1;
        }
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<C: Container2D + ?Sized> ExactSizeIterator for Iter<'_, C> {}
impl<C: Container2D + ?Sized> FusedIterator for Iter<'_, C> {}

/// One row of a container, iterable from either end.
#[derive(Debug)]
pub struct Row<'a, C: ?Sized> {
    c: &'a C,
    i: usize,
    front: usize,
    back: usize,
}

impl<'a, C: Container2D + ?Sized> Row<'a, C> {
    pub(crate) fn new(c: &'a C, i: usize) -> Self {
        Self {
            c,
            i,
            front: 0,
            back: c.cols(),
        }
    }

    /// Row index within the container.
    pub fn index(&self) -> usize {
        self.i
    }
}

impl<C: ?Sized> Clone for Row<'_, C> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, C: Container2D + ?Sized> Iterator for Row<'a, C> {
    type Item = &'a C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let v = self.c.at(self.i, self.front);
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<C: Container2D + ?Sized> DoubleEndedIterator for Row<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.c.at(self.i, self.back))
    }
}

impl<C: Container2D + ?Sized> ExactSizeIterator for Row<'_, C> {}
impl<C: Container2D + ?Sized> FusedIterator for Row<'_, C> {}

/// Iterator over the rows of a container, top to bottom.
#[derive(Debug)]
pub struct Rows<'a, C: ?Sized> {
    c: &'a C,
    front: usize,
    back: usize,
}

impl<'a, C: Container2D + ?Sized> Rows<'a, C> {
    pub(crate) fn new(c: &'a C) -> Self {
        Self {
            c,
            front: 0,
            back: c.rows(),
        }
    }
}

impl<'a, C: Container2D + ?Sized> Iterator for Rows<'a, C> {
    type Item = Row<'a, C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let row = Row::new(self.c, self.front);
        self.front += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<C: Container2D + ?Sized> DoubleEndedIterator for Rows<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(Row::new(self.c, self.back))
    }
}

impl<C: Container2D + ?Sized> ExactSizeIterator for Rows<'_, C> {}

/// Horizontal first differences along one row: `at(i, j + 1) - at(i, j)`.
#[derive(Debug)]
pub struct DifferencesX<'a, C: ?Sized> {
    c: &'a C,
    i: usize,
    j: usize,
}

impl<C: Container2D + ?Sized> DifferencesX<'_, C> {
    /// Position of the right element of the next difference.
    pub fn position(&self) -> Position {
        Position::from((self.i, self.j + 1))
    }
}

impl<C> Iterator for DifferencesX<'_, C>
where
    C: Container2D + ?Sized,
    C::Item: Copy + Sub<Output = C::Item>,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.j + 1 >= self.c.cols() {
            return None;
        }
        let d = *self.c.at(self.i, self.j + 1) - *self.c.at(self.i, self.j);
        self.j += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.c.cols().saturating_sub(self.j + 1);
        (n, Some(n))
    }
}

/// Differences between horizontal neighbours in row `i`, starting with the
/// pair `(j0, j0 + 1)`.
///
/// # Panics
///
/// When row `i` does not exist.
pub fn differences_x<C: Container2D + ?Sized>(c: &C, i: usize, j0: usize) -> DifferencesX<'_, C> {
    assert!(i < c.rows(), "row {i} out of range ({} rows)", c.rows());
    DifferencesX { c, i, j: j0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PixelBuffer, Rgb};
    use alloc::vec::Vec;

    fn numbered(rows: usize, cols: usize) -> PixelBuffer<usize> {
        PixelBuffer::from_fn(rows, cols, |i, j| i * cols + j)
    }

    #[test]
    fn iter_is_row_major() {
        let img = numbered(3, 4);
        let got: Vec<usize> = img.iter().copied().collect();
        assert_eq!(got, (0..12).collect::<Vec<_>>());
        assert_eq!(img.iter().len(), 12);
    }

    #[test]
    fn iter_over_empty_container() {
        assert_eq!(numbered(0, 5).iter().count(), 0);
        assert_eq!(numbered(5, 0).iter().count(), 0);
    }

    #[test]
    fn row_both_ends() {
        let img = numbered(2, 4);
        let fwd: Vec<usize> = img.row(1).copied().collect();
        assert_eq!(fwd, [4, 5, 6, 7]);
        let rev: Vec<usize> = img.row(1).rev().copied().collect();
        assert_eq!(rev, [7, 6, 5, 4]);
        let mut r = img.row(0);
        assert_eq!(r.next(), Some(&0));
        assert_eq!(r.next_back(), Some(&3));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn rows_iterate_top_to_bottom() {
        let img = numbered(3, 2);
        let firsts: Vec<usize> = img.row_iter().map(|mut r| *r.next().unwrap()).collect();
        assert_eq!(firsts, [0, 2, 4]);
        let last = img.row_iter().next_back().unwrap();
        assert_eq!(last.index(), 2);
    }

    #[test]
    fn differences_along_row() {
        let mut img = PixelBuffer::filled(1, 4, Rgb::BLACK);
        img[(0, 1)] = Rgb::new(10, 0, 0);
        img[(0, 2)] = Rgb::new(10, 5, 0);
        img[(0, 3)] = Rgb::new(0, 5, 1);
        let mut d = differences_x(&img, 0, 0);
        assert_eq!(d.position(), Position::new(0, 1));
        assert_eq!(d.next(), Some(Rgb::new(10, 0, 0)));
        assert_eq!(d.next(), Some(Rgb::new(0, 5, 0)));
        assert_eq!(d.position(), Position::new(0, 3));
        assert_eq!(d.next(), Some(Rgb::new(-10, 0, 1)));
        assert_eq!(d.next(), None);
        assert_eq!(differences_x(&img, 0, 2).count(), 1);
    }
}
