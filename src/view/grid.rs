use super::sub::SubImage;
use crate::container::{Container2D, Container2DMut, Position, Size2D};

/// A grid of `block_rows × block_cols` blocks laid over a container.
///
/// The grid has `rows / block_rows` by `cols / block_cols` cells. A partial
/// block at the right or bottom edge is not part of any cell.
#[derive(Clone, Debug)]
pub struct BlockGrid<C> {
    inner: C,
    block: Size2D,
}

impl<C: Container2D> BlockGrid<C> {
    /// # Panics
    ///
    /// When either block dimension is zero.
    pub fn new(inner: C, block: Size2D) -> Self {
        assert!(block.rows > 0 && block.cols > 0, "empty grid block {block:?}");
        Self { inner, block }
    }

    pub fn block_size(&self) -> Size2D {
        self.block
    }

    /// Number of cells vertically.
    pub fn rows(&self) -> usize {
        self.inner.rows() / self.block.rows
    }

    /// Number of cells horizontally.
    pub fn cols(&self) -> usize {
        self.inner.cols() / self.block.cols
    }

    fn corner(&self, i: usize, j: usize) -> Position {
        assert!(i < self.rows() && j < self.cols(), "cell ({i}, {j}) outside the grid");
        Position::from((i * self.block.rows, j * self.block.cols))
    }

    /// Block `(i, j)` as a window onto the container.
    pub fn cell(&self, i: usize, j: usize) -> SubImage<&C> {
        SubImage::new(&self.inner, self.corner(i, j), self.block)
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Container2DMut> BlockGrid<C> {
    pub fn cell_mut(&mut self, i: usize, j: usize) -> SubImage<&mut C> {
        let corner = self.corner(i, j);
        SubImage::new(&mut self.inner, corner, self.block)
    }
}

/// Magnified read-only view: every element of the inner container appears
/// as a `zoom.rows × zoom.cols` block.
///
/// There is no write access, since one write would have to change a whole
/// block.
#[derive(Clone, Debug)]
pub struct ZoomView<C> {
    inner: C,
    zoom: Size2D,
}

impl<C: Container2D> ZoomView<C> {
    /// # Panics
    ///
    /// When either zoom factor is zero.
    pub fn new(inner: C, zoom: Size2D) -> Self {
        assert!(zoom.rows > 0 && zoom.cols > 0, "zero zoom factor {zoom:?}");
        Self { inner, zoom }
    }

    pub fn zoom(&self) -> Size2D {
        self.zoom
    }
}

impl<C: Container2D> Container2D for ZoomView<C> {
    type Item = C::Item;

    fn rows(&self) -> usize {
        self.inner.rows() * self.zoom.rows
    }

    fn cols(&self) -> usize {
        self.inner.cols() * self.zoom.cols
    }

    fn at(&self, i: usize, j: usize) -> &C::Item {
        self.inner.at(i / self.zoom.rows, j / self.zoom.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelBuffer;
    use alloc::vec::Vec;

    #[test]
    fn grid_cells_are_blocks() {
        let img = PixelBuffer::from_fn(5, 7, |i, j| i * 7 + j);
        let g = BlockGrid::new(&img, Size2D::new(2, 3));
        assert_eq!((g.rows(), g.cols()), (2, 2));
        let c = g.cell(1, 1);
        assert_eq!(c.size2d(), Size2D::new(2, 3));
        assert_eq!(*c.at(0, 0), 2 * 7 + 3);
        assert_eq!(*c.at(1, 2), 3 * 7 + 5);
    }

    #[test]
    fn grid_cell_mut_fills_block() {
        let mut img = PixelBuffer::filled(4, 4, 0u8);
        let mut g = BlockGrid::new(&mut img, Size2D::new(2, 2));
        g.cell_mut(0, 1).fill(1);
        g.cell_mut(1, 0).fill(2);
        assert_eq!(img.row_slice(0), &[0, 0, 1, 1]);
        assert_eq!(img.row_slice(3), &[2, 2, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "outside the grid")]
    fn partial_block_is_not_a_cell() {
        let img = PixelBuffer::filled(3, 3, 0u8);
        let g = BlockGrid::new(&img, Size2D::new(2, 2));
        let _ = g.cell(1, 0);
    }

    #[test]
    fn zoom_repeats_pixels() {
        let img = PixelBuffer::from_fn(2, 2, |i, j| i * 2 + j);
        let z = ZoomView::new(&img, Size2D::new(2, 3));
        assert_eq!(z.size2d(), Size2D::new(4, 6));
        let row: Vec<usize> = z.row(3).copied().collect();
        assert_eq!(row, [2, 2, 2, 3, 3, 3]);
    }
}
