//! Exact quarter turns and mirrors as elements of the D4 dihedral group.
//!
//! These are pure index permutations: no resampling, no background fill,
//! and every output element is a copy of exactly one input element.

use crate::buffer::PixelBuffer;
use crate::container::{Container2D, Size2D};

/// A rotation by a multiple of 90° clockwise, optionally followed by a
/// left-right mirror.
///
/// ```text
///     IDENTITY   FLIP_H     ROTATE_180   FLIP_V
///     ┌───┐      ┌───┐      ┌───┐        ┌───┐
///     │ F │      │ Ꟊ │      │   │        │   │
///     │   │      │   │      │ Ꟊ │        │ F │
///     └───┘      └───┘      └───┘        └───┘
///
///     TRANSPOSE  ROTATE_90  TRANSVERSE   ROTATE_270
///     ┌────┐     ┌────┐     ┌────┐       ┌────┐
///     │ F  │     │  F │     │  Ꟊ │       │ Ꟊ  │
///     └────┘     └────┘     └────┘       └────┘
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Clockwise quarter turns (0-3).
    pub rotation: u8,
    /// Left-right mirror applied after rotation.
    pub flip: bool,
}

impl Orientation {
    pub const IDENTITY: Self = Self {
        rotation: 0,
        flip: false,
    };
    /// Left-right mirror.
    pub const FLIP_H: Self = Self {
        rotation: 0,
        flip: true,
    };
    pub const ROTATE_180: Self = Self {
        rotation: 2,
        flip: false,
    };
    /// Top-bottom mirror.
    pub const FLIP_V: Self = Self {
        rotation: 2,
        flip: true,
    };
    /// Reflection over the main diagonal.
    pub const TRANSPOSE: Self = Self {
        rotation: 1,
        flip: true,
    };
    /// 90° clockwise.
    pub const ROTATE_90: Self = Self {
        rotation: 1,
        flip: false,
    };
    /// Reflection over the anti-diagonal.
    pub const TRANSVERSE: Self = Self {
        rotation: 3,
        flip: true,
    };
    /// 90° counter-clockwise.
    pub const ROTATE_270: Self = Self {
        rotation: 3,
        flip: false,
    };

    /// The eight group elements.
    pub const ALL: [Self; 8] = [
        Self::IDENTITY,
        Self::FLIP_H,
        Self::ROTATE_180,
        Self::FLIP_V,
        Self::TRANSPOSE,
        Self::ROTATE_90,
        Self::TRANSVERSE,
        Self::ROTATE_270,
    ];

    pub fn is_identity(self) -> bool {
        self.rotation == 0 && !self.flip
    }

    /// Whether rows and columns trade places.
    pub fn swaps_axes(self) -> bool {
        self.rotation % 2 == 1
    }

    /// Apply `self` first, then `other`.
    pub fn compose(self, other: Self) -> Self {
        if !self.flip {
            Self {
                rotation: (self.rotation + other.rotation) & 3,
                flip: other.flip,
            }
        } else {
            Self {
                rotation: self.rotation.wrapping_sub(other.rotation) & 3,
                flip: !other.flip,
            }
        }
    }

    /// `self.compose(self.inverse()) == IDENTITY`.
    pub fn inverse(self) -> Self {
        if self.flip {
            // every mirrored element is an involution
            self
        } else {
            Self {
                rotation: (4 - self.rotation) & 3,
                flip: false,
            }
        }
    }

    /// Size of the result of transforming a container of size `s`.
    pub fn transform_size(self, s: Size2D) -> Size2D {
        if self.swaps_axes() { s.transposed() } else { s }
    }

    /// Source index that lands on `(i, j)` of the output, for a source of
    /// size `src`.
    fn source_index(self, i: usize, j: usize, src: Size2D) -> (usize, usize) {
        let last_i = src.rows - 1;
        let last_j = src.cols - 1;
        match (self.rotation & 3, self.flip) {
            (0, false) => (i, j),
            (0, true) => (i, last_j - j),
            (1, false) => (last_i - j, i),
            (1, true) => (j, i),
            (2, false) => (last_i - i, last_j - j),
            (2, true) => (last_i - i, j),
            (3, false) => (j, last_j - i),
            _ => (last_i - j, last_j - i),
        }
    }

    /// Permute `src` into a new buffer.
    pub fn apply<C>(self, src: &C) -> PixelBuffer<C::Item>
    where
        C: Container2D,
        C::Item: Clone,
    {
        let size = src.size2d();
        let out = self.transform_size(size);
        PixelBuffer::from_fn(out.rows, out.cols, |i, j| {
            let (si, sj) = self.source_index(i, j, size);
            src.at(si, sj).clone()
        })
    }
}

/// Rotate 90° counter-clockwise.
pub fn rotate_plus_90<C>(src: &C) -> PixelBuffer<C::Item>
where
    C: Container2D,
    C::Item: Clone,
{
    Orientation::ROTATE_270.apply(src)
}

/// Rotate 90° clockwise.
pub fn rotate_minus_90<C>(src: &C) -> PixelBuffer<C::Item>
where
    C: Container2D,
    C::Item: Clone,
{
    Orientation::ROTATE_90.apply(src)
}

pub fn rotate_180<C>(src: &C) -> PixelBuffer<C::Item>
where
    C: Container2D,
    C::Item: Clone,
{
    Orientation::ROTATE_180.apply(src)
}

/// Mirror across the vertical axis (left and right swap).
pub fn mirror_y<C>(src: &C) -> PixelBuffer<C::Item>
where
    C: Container2D,
    C::Item: Clone,
{
    Orientation::FLIP_H.apply(src)
}

/// Mirror across the horizontal axis (top and bottom swap).
pub fn mirror_x<C>(src: &C) -> PixelBuffer<C::Item>
where
    C: Container2D,
    C::Item: Clone,
{
    Orientation::FLIP_V.apply(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(rows: usize, cols: usize) -> PixelBuffer<usize> {
        PixelBuffer::from_fn(rows, cols, |i, j| i * cols + j)
    }

    #[test]
    fn plus_90_is_counter_clockwise() {
        // 0 1 2        2 5
        // 3 4 5   ->   1 4
        //              0 3
        let r = rotate_plus_90(&numbered(2, 3));
        assert_eq!(r, PixelBuffer::from_vec(3, 2, alloc::vec![2, 5, 1, 4, 0, 3]));
    }

    #[test]
    fn minus_90_is_clockwise() {
        let r = rotate_minus_90(&numbered(2, 3));
        assert_eq!(r, PixelBuffer::from_vec(3, 2, alloc::vec![3, 0, 4, 1, 5, 2]));
    }

    #[test]
    fn literal_quarter_turn() {
        let src = numbered(4, 7);
        let res = rotate_plus_90(&src);
        for i in 0..4 {
            for j in 0..7 {
                assert_eq!(res[(7 - 1 - j, i)], src[(i, j)], "source ({i}, {j})");
            }
        }
    }

    #[test]
    fn mirrors() {
        let src = numbered(2, 3);
        assert_eq!(mirror_y(&src), PixelBuffer::from_vec(2, 3, alloc::vec![2, 1, 0, 5, 4, 3]));
        assert_eq!(mirror_x(&src), PixelBuffer::from_vec(2, 3, alloc::vec![3, 4, 5, 0, 1, 2]));
        assert_eq!(rotate_180(&src), PixelBuffer::from_vec(2, 3, alloc::vec![5, 4, 3, 2, 1, 0]));
    }

    #[test]
    fn quarter_turns_undo_each_other() {
        let src = numbered(5, 3);
        assert_eq!(rotate_plus_90(&rotate_minus_90(&src)), src);
        assert_eq!(rotate_minus_90(&rotate_plus_90(&src)), src);
        assert_eq!(rotate_180(&rotate_180(&src)), src);
        assert_eq!(mirror_x(&mirror_x(&src)), src);
    }

    #[test]
    fn swaps_axes() {
        for o in Orientation::ALL {
            let s = o.apply(&numbered(2, 5)).size2d();
            let expected = if o.swaps_axes() { Size2D::new(5, 2) } else { Size2D::new(2, 5) };
            assert_eq!(s, expected, "{o:?}");
        }
    }

    #[test]
    fn compose_matches_sequential_apply() {
        let src = numbered(3, 4);
        for a in Orientation::ALL {
            for b in Orientation::ALL {
                let sequential = b.apply(&a.apply(&src));
                let composed = a.compose(b).apply(&src);
                assert_eq!(composed, sequential, "{a:?} then {b:?}");
            }
        }
    }

    #[test]
    fn inverse_undoes() {
        let src = numbered(3, 4);
        for o in Orientation::ALL {
            assert_eq!(o.compose(o.inverse()), Orientation::IDENTITY, "{o:?}");
            assert_eq!(o.inverse().apply(&o.apply(&src)), src, "{o:?}");
        }
    }

    #[test]
    fn transpose_is_diagonal_reflection() {
        let src = numbered(2, 3);
        let t = Orientation::TRANSPOSE.apply(&src);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(t[(j, i)], src[(i, j)]);
            }
        }
    }

    #[test]
    fn empty_input() {
        let src = PixelBuffer::<u8>::new(0, 4);
        assert_eq!(rotate_plus_90(&src).size2d(), Size2D::new(4, 0));
    }
}
