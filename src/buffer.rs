//! Owned, contiguous, row-major pixel storage.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::container::{Container2D, Container2DMut, Position};
use crate::pixel::Rgb;

/// A `rows × cols` grid of `T` stored row-major in one allocation.
///
/// Element `(i, j)` lives at `data[i * cols + j]`. The column is checked
/// explicitly and the row by slice indexing, so an out-of-range `(i, j)`
/// panics instead of reading a neighbouring row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuffer<T = Rgb> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// An RGB image.
pub type Image = PixelBuffer<Rgb>;

impl<T> PixelBuffer<T> {
    /// Buffer of default-valued elements (black for [`Rgb`]).
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::filled(rows, cols, T::default())
    }

    /// Buffer with every element equal to `v`.
    pub fn filled(rows: usize, cols: usize, v: T) -> Self
    where
        T: Clone,
    {
        Self {
            rows,
            cols,
            data: alloc::vec![v; rows * cols],
        }
    }

    /// Wrap row-major `data`.
    ///
    /// # Panics
    ///
    /// When `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "buffer of {rows}x{cols} needs {} elements, got {}",
            rows * cols,
            data.len()
        );
        Self { rows, cols, data }
    }

    /// Buffer whose element `(i, j)` is `f(i, j)`, evaluated row-major.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Row `i` as a slice.
    pub fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        RowsMut {
            rest: &mut self.data,
            cols: self.cols,
            remaining: self.rows,
        }
    }

    /// The geometric center `(rows / 2, cols / 2)`.
    pub fn center(&self) -> Position {
        Position::from((self.rows / 2, self.cols / 2))
    }
}

impl<T> Container2D for PixelBuffer<T> {
    type Item = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn at(&self, i: usize, j: usize) -> &T {
        &self[(i, j)]
    }
}

impl<T> Container2DMut for PixelBuffer<T> {
    fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self[(i, j)]
    }

    fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize, &mut T),
    {
        for (i, row) in self.rows_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                f(i, j, v);
            }
        }
    }
}

impl<T> Index<(usize, usize)> for PixelBuffer<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(j < self.cols, "column {j} outside {}x{}", self.rows, self.cols);
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for PixelBuffer<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(j < self.cols, "column {j} outside {}x{}", self.rows, self.cols);
        &mut self.data[i * self.cols + j]
    }
}

/// One line per row, elements separated by a space.
impl<T: fmt::Display> fmt::Display for PixelBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for (j, v) in self.row_slice(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{v}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Iterator returned by [`PixelBuffer::rows_mut`].
#[derive(Debug)]
pub struct RowsMut<'a, T> {
    rest: &'a mut [T],
    cols: usize,
    remaining: usize,
}

impl<'a, T> Iterator for RowsMut<'a, T> {
    type Item = &'a mut [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (row, rest) = core::mem::take(&mut self.rest).split_at_mut(self.cols);
        self.rest = rest;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RowsMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn filled_buffer_is_uniform() {
        for &(rows, cols) in &[(0, 0), (1, 1), (3, 7), (10, 0), (4, 4)] {
            let img = Image::filled(rows, cols, Rgb::ORANGE);
            assert_eq!(img.size(), rows * cols, "size of {rows}x{cols}");
            assert!(img.iter().all(|&p| p == Rgb::ORANGE), "{rows}x{cols} not uniform");
        }
    }

    #[test]
    fn new_is_black() {
        let img = Image::new(2, 3);
        assert!(img.iter().all(|p| p.is_black()));
    }

    #[test]
    fn index_is_row_major() {
        let img = PixelBuffer::from_fn(3, 4, |i, j| i * 10 + j);
        assert_eq!(img[(2, 3)], 23);
        assert_eq!(img.as_slice()[4], 10);
        assert_eq!(img.row_slice(1), &[10, 11, 12, 13]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_panics() {
        let img = Image::new(2, 2);
        let _ = img.at(2, 0);
    }

    #[test]
    #[should_panic(expected = "needs 6 elements")]
    fn from_vec_checks_length() {
        let _ = PixelBuffer::from_vec(2, 3, alloc::vec![0u8; 5]);
    }

    #[test]
    fn rows_mut_with_zero_columns() {
        let mut img = PixelBuffer::<u8>::new(3, 0);
        assert_eq!(img.rows_mut().count(), 3);
        assert!(img.rows_mut().all(|r| r.is_empty()));
    }

    #[test]
    fn for_each_mut_sees_indices() {
        let mut img = PixelBuffer::filled(2, 3, (0, 0));
        img.for_each_mut(|i, j, v| *v = (i, j));
        assert_eq!(img, PixelBuffer::from_fn(2, 3, |i, j| (i, j)));
    }

    #[test]
    fn equality_is_elementwise() {
        let a = Image::filled(2, 2, Rgb::RED);
        let mut b = a.clone();
        assert_eq!(a, b);
        b[(1, 0)] = Rgb::BLUE;
        assert_ne!(a, b);
        assert_ne!(Image::new(2, 3), Image::new(3, 2));
    }

    #[test]
    fn center_floors() {
        assert_eq!(Image::new(5, 4).center(), Position::new(2, 2));
        assert_eq!(Image::new(1, 1).center(), Position::new(0, 0));
    }

    #[test]
    fn display_one_line_per_row() {
        let img = PixelBuffer::from_fn(2, 2, |i, j| i * 2 + j);
        assert_eq!(img.to_string(), "0 1\n2 3\n");
    }
}
