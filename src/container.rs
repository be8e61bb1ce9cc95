//! The 2D container interface shared by buffers and every view.
//!
//! A container exposes `rows() × cols()` elements addressed by `(i, j)`,
//! row `i` from the top and column `j` from the left. Views implement the
//! same traits as [`PixelBuffer`], so algorithms are written once against
//! [`Container2D`] / [`Container2DMut`] and run over a buffer, a sub-image,
//! a channel projection, or any stack of those.
//!
//! Both traits are implemented for `&C`, and `&mut C` additionally gets
//! [`Container2DMut`]. A view stores its inner container by value, so a view
//! over `&buffer` is read-only and a view over `&mut buffer` is writable.

use alloc::vec::Vec;

use crate::buffer::PixelBuffer;
use crate::iter::{Iter, Row, Rows};

/// A signed container index `(i, j)`.
///
/// Signed so that positions outside the container (cursors that stepped off
/// the edge, frame points past a border) can be represented and tested with
/// [`Container2D::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub i: isize,
    pub j: isize,
}

impl Position {
    pub const fn new(i: isize, j: isize) -> Self {
        Self { i, j }
    }

    /// Convert to unsigned indices, `None` if either is negative.
    pub fn to_index(self) -> Option<(usize, usize)> {
        Some((usize::try_from(self.i).ok()?, usize::try_from(self.j).ok()?))
    }
}

impl From<(usize, usize)> for Position {
    fn from((i, j): (usize, usize)) -> Self {
        Self::new(i as isize, j as isize)
    }
}

/// Container extent in rows and columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size2D {
    pub rows: usize,
    pub cols: usize,
}

impl Size2D {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn area(self) -> usize {
        self.rows * self.cols
    }

    /// Rows and columns exchanged.
    pub const fn transposed(self) -> Self {
        Self::new(self.cols, self.rows)
    }
}

/// Read access to a 2D grid of elements.
pub trait Container2D {
    type Item;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Element `(i, j)`.
    ///
    /// # Panics
    ///
    /// When `(i, j)` lies outside the container.
    fn at(&self, i: usize, j: usize) -> &Self::Item;

    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    fn size2d(&self) -> Size2D {
        Size2D::new(self.rows(), self.cols())
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether `p` addresses an element of this container.
    fn contains(&self, p: Position) -> bool {
        match p.to_index() {
            Some((i, j)) => i < self.rows() && j < self.cols(),
            None => false,
        }
    }

    /// Checked access: `None` outside the container.
    fn get(&self, i: usize, j: usize) -> Option<&Self::Item> {
        (i < self.rows() && j < self.cols()).then(|| self.at(i, j))
    }

    fn at_pos(&self, p: Position) -> Option<&Self::Item> {
        let (i, j) = p.to_index()?;
        self.get(i, j)
    }

    /// All elements in row-major order.
    fn iter(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Row `i`, left to right.
    fn row(&self, i: usize) -> Row<'_, Self>
    where
        Self: Sized,
    {
        assert!(i < self.rows(), "row {i} out of range ({} rows)", self.rows());
        Row::new(self, i)
    }

    /// Every row, top to bottom.
    fn row_iter(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows::new(self)
    }

    /// Copy the addressed elements into a new, independent buffer.
    fn to_buffer(&self) -> PixelBuffer<Self::Item>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        let data: Vec<_> = self.iter().cloned().collect();
        PixelBuffer::from_vec(self.rows(), self.cols(), data)
    }
}

/// Write access to a 2D grid of elements.
pub trait Container2DMut: Container2D {
    /// Element `(i, j)`, mutably.
    ///
    /// # Panics
    ///
    /// When `(i, j)` lies outside the container.
    fn at_mut(&mut self, i: usize, j: usize) -> &mut Self::Item;

    fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut Self::Item> {
        if i < self.rows() && j < self.cols() {
            Some(self.at_mut(i, j))
        } else {
            None
        }
    }

    fn at_pos_mut(&mut self, p: Position) -> Option<&mut Self::Item> {
        let (i, j) = p.to_index()?;
        self.get_mut(i, j)
    }

    /// Set every element to `v`.
    fn fill(&mut self, v: Self::Item)
    where
        Self::Item: Clone,
    {
        self.for_each_mut(|_, _, x| *x = v.clone());
    }

    /// Visit every element in row-major order together with its index.
    fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize, &mut Self::Item),
    {
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                f(i, j, self.at_mut(i, j));
            }
        }
    }

    /// Copy `src` element by element into this container.
    ///
    /// # Panics
    ///
    /// When the two containers differ in size.
    fn copy_from<C>(&mut self, src: &C)
    where
        C: Container2D<Item = Self::Item>,
        Self::Item: Clone,
    {
        assert_eq!(self.size2d(), src.size2d(), "copy_from: size mismatch");
        self.for_each_mut(|i, j, x| *x = src.at(i, j).clone());
    }
}

impl<C: Container2D + ?Sized> Container2D for &C {
    type Item = C::Item;

    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn at(&self, i: usize, j: usize) -> &C::Item {
        (**self).at(i, j)
    }
}

impl<C: Container2D + ?Sized> Container2D for &mut C {
    type Item = C::Item;

    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn at(&self, i: usize, j: usize) -> &C::Item {
        (**self).at(i, j)
    }
}

impl<C: Container2DMut + ?Sized> Container2DMut for &mut C {
    fn at_mut(&mut self, i: usize, j: usize) -> &mut C::Item {
        (**self).at_mut(i, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    #[test]
    fn contains_rejects_negative_and_past_end() {
        let img = PixelBuffer::filled(2, 3, Rgb::WHITE);
        assert!(img.contains(Position::new(1, 2)));
        assert!(!img.contains(Position::new(2, 0)));
        assert!(!img.contains(Position::new(0, 3)));
        assert!(!img.contains(Position::new(-1, 0)));
    }

    #[test]
    fn checked_access() {
        let mut img = PixelBuffer::filled(2, 2, 7u8);
        assert_eq!(img.get(1, 1), Some(&7));
        assert_eq!(img.get(2, 0), None);
        assert!(img.get_mut(0, 2).is_none());
        *img.at_pos_mut(Position::new(0, 1)).unwrap() = 9;
        assert_eq!(img.at_pos(Position::new(0, 1)), Some(&9));
        assert_eq!(img.at_pos(Position::new(0, -1)), None);
    }

    #[test]
    fn works_through_references() {
        fn total<C: Container2D<Item = u32>>(c: C) -> u32 {
            c.iter().sum()
        }
        let mut img = PixelBuffer::from_fn(2, 3, |i, j| (i * 3 + j) as u32);
        assert_eq!(total(&img), 15);
        assert_eq!(total(&mut img), 15);
        assert_eq!(total(&&img), 15);
    }

    #[test]
    fn copy_from_and_fill() {
        let src = PixelBuffer::from_fn(2, 2, |i, j| i * 2 + j);
        let mut dst = PixelBuffer::filled(2, 2, 0usize);
        dst.copy_from(&src);
        assert_eq!(dst, src);
        dst.fill(4);
        assert!(dst.iter().all(|&v| v == 4));
    }

    #[test]
    fn to_buffer_copies() {
        let img = PixelBuffer::from_fn(3, 2, |i, j| (i, j));
        let copy = (&img).to_buffer();
        assert_eq!(copy, img);
    }
}
