//! Area-weighted rescaling on an exact integer grid, and pixel replication.
//!
//! Source and destination are both laid on the grid whose size along each
//! axis is the least common multiple of the two extents. A source row then
//! covers `p0 = M / m0` grid rows and a destination row covers `p1 = M / m1`,
//! and every overlap is a whole number of grid cells. Each source pixel adds
//! `color × overlap_rows × overlap_cols` to the destination cells it touches,
//! and each destination cell is finally divided by its own area
//! `p1_rows × p1_cols`. No floating point is involved.

use alloc::vec::Vec;

use crate::buffer::{Image, PixelBuffer};
use crate::container::{Container2D, Container2DMut, Position, Size2D};
use crate::pixel::Rgb;
use crate::view::BlockGrid;

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

/// Cells per source index (`p0`) and per destination index (`p1`) along one
/// axis of the common grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Axis {
    p0: usize,
    p1: usize,
}

impl Axis {
    fn new(n0: usize, n1: usize) -> Self {
        let m = lcm(n0, n1);
        Self { p0: m / n0, p1: m / n1 }
    }

    /// Destination indices covered by source index `i0` when shrinking
    /// (`p0 <= p1`): at most two, with their overlap in grid cells.
    fn reduce_cover(self, i0: usize) -> impl Iterator<Item = (usize, usize)> {
        let Self { p0, p1 } = self;
        let b = i0 * p0;
        let i1 = b / p1;
        let r = b % p1;
        let (t1, t2) = if r != 0 && p1 - r < p0 {
            (p1 - r, p0 - (p1 - r))
        } else {
            (p0, 0)
        };
        [(i1, t1), (i1 + 1, t2)].into_iter().filter(|&(_, t)| t > 0)
    }

    /// Destination indices covered by source index `i0` when growing
    /// (`p0 >= p1`): a partial first cell, whole cells, a partial last cell.
    fn amplify_cover(self, i0: usize) -> impl Iterator<Item = (usize, usize)> {
        let Self { p0, p1 } = self;
        let b0 = i0 * p0;
        let first = b0 / p1;
        let r1 = match b0 % p1 {
            0 => 0,
            rem => p1 - rem,
        };
        let whole = (p0 - r1) / p1;
        let r2 = (p0 - r1) % p1;
        let len = whole + usize::from(r1 != 0) + usize::from(r2 != 0);
        (0..len).map(move |k| {
            let t = if k == 0 && r1 != 0 {
                r1
            } else if k == len - 1 && r2 != 0 {
                r2
            } else {
                p1
            };
            (first + k, t)
        })
    }
}

/// Column count keeping the aspect ratio of `src` at `rows` rows, rounded
/// down and never zero.
fn target_cols(src: Size2D, rows: usize) -> usize {
    let cols = (rows as u64 * src.cols as u64) / src.rows as u64;
    (cols as usize).max(1)
}

fn check_input<C: Container2D>(src: &C, rows: usize) {
    assert!(!src.is_empty(), "cannot scale an empty image");
    assert!(rows > 0, "cannot scale to zero rows");
}

/// Accumulate every source pixel into the destination cells reported by
/// `rows` and `cols`, then divide by the destination cell area.
fn resample<C, R, K, RI, KI>(src: &C, out: Size2D, area: usize, rows: R, cols: K) -> Image
where
    C: Container2D<Item = Rgb>,
    R: Fn(usize) -> RI,
    K: Fn(usize) -> KI,
    RI: Iterator<Item = (usize, usize)>,
    KI: Iterator<Item = (usize, usize)>,
{
    let col_cover: Vec<Vec<(usize, usize)>> = (0..src.cols()).map(|j0| cols(j0).collect()).collect();
    let mut acc = alloc::vec![[0i64; 3]; out.area()];
    for i0 in 0..src.rows() {
        for (i1, ti) in rows(i0) {
            for (j0, cover) in col_cover.iter().enumerate() {
                let p = src.at(i0, j0);
                for &(j1, tj) in cover {
                    let w = (ti * tj) as i64;
                    let cell = &mut acc[i1 * out.cols + j1];
                    cell[0] += w * i64::from(p.r);
                    cell[1] += w * i64::from(p.g);
                    cell[2] += w * i64::from(p.b);
                }
            }
        }
    }
    let area = area as i64;
    let data = acc
        .into_iter()
        .map(|[r, g, b]| Rgb::new((r / area) as i32, (g / area) as i32, (b / area) as i32))
        .collect();
    PixelBuffer::from_vec(out.rows, out.cols, data)
}

fn grid_for<C: Container2D>(src: &C, rows: usize) -> (Size2D, Axis, Axis) {
    let out = Size2D::new(rows, target_cols(src.size2d(), rows));
    let ax_i = Axis::new(src.rows(), out.rows);
    let ax_j = Axis::new(src.cols(), out.cols);
    log::debug!(
        "scale {}x{} -> {}x{}: rows p0={} p1={}, cols p0={} p1={}",
        src.rows(),
        src.cols(),
        out.rows,
        out.cols,
        ax_i.p0,
        ax_i.p1,
        ax_j.p0,
        ax_j.p1
    );
    (out, ax_i, ax_j)
}

/// Shrink `src` to `rows` rows, keeping the aspect ratio.
///
/// # Panics
///
/// When `src` is empty, `rows` is zero, or `rows` exceeds the source rows.
pub fn reduce<C: Container2D<Item = Rgb>>(src: &C, rows: usize) -> Image {
    check_input(src, rows);
    assert!(rows <= src.rows(), "reduce to {rows} rows from {}", src.rows());
    let (out, ax_i, ax_j) = grid_for(src, rows);
    assert!(out.cols <= src.cols(), "reduce to {} cols from {}", out.cols, src.cols());
    resample(src, out, ax_i.p1 * ax_j.p1, |i| ax_i.reduce_cover(i), |j| ax_j.reduce_cover(j))
}

/// Grow `src` to `rows` rows, keeping the aspect ratio.
///
/// # Panics
///
/// When `src` is empty or `rows` is smaller than the source rows.
pub fn amplify<C: Container2D<Item = Rgb>>(src: &C, rows: usize) -> Image {
    check_input(src, rows);
    assert!(rows >= src.rows(), "amplify to {rows} rows from {}", src.rows());
    let (out, ax_i, ax_j) = grid_for(src, rows);
    assert!(out.cols >= src.cols(), "amplify to {} cols from {}", out.cols, src.cols());
    resample(src, out, ax_i.p1 * ax_j.p1, |i| ax_i.amplify_cover(i), |j| ax_j.amplify_cover(j))
}

/// Rescale `src` to exactly `rows` rows. The column count follows the aspect
/// ratio, rounded down.
///
/// # Panics
///
/// When `src` is empty or `rows` is zero.
pub fn scale_to_rows<C: Container2D<Item = Rgb>>(src: &C, rows: usize) -> Image {
    check_input(src, rows);
    if rows == src.rows() {
        src.to_buffer()
    } else if rows < src.rows() {
        reduce(src, rows)
    } else {
        amplify(src, rows)
    }
}

/// Rescale `src` to the largest size that fits in `width × height` with the
/// same aspect ratio.
///
/// # Panics
///
/// When `src` is empty or the fitted size has no rows.
pub fn scale_to_fit<C: Container2D<Item = Rgb>>(src: &C, width: usize, height: usize) -> Image {
    assert!(!src.is_empty(), "cannot scale an empty image");
    let kw = width as f64 / src.cols() as f64;
    let kh = height as f64 / src.rows() as f64;
    let rows = (src.rows() as f64 * kw.min(kh)) as usize;
    scale_to_rows(src, rows)
}

/// Replicate every pixel into an `a × a` block.
///
/// # Panics
///
/// When `a` is zero.
pub fn expand<C>(src: &C, a: usize) -> PixelBuffer<C::Item>
where
    C: Container2D,
    C::Item: Clone,
{
    assert!(a > 0, "expansion factor must be positive");
    let Some(seed) = src.get(0, 0) else {
        return PixelBuffer::from_vec(src.rows() * a, src.cols() * a, Vec::new());
    };
    let mut out = PixelBuffer::filled(src.rows() * a, src.cols() * a, seed.clone());
    let mut grid = BlockGrid::new(&mut out, Size2D::new(a, a));
    for i in 0..src.rows() {
        for j in 0..src.cols() {
            grid.cell_mut(i, j).fill(src.at(i, j).clone());
        }
    }
    out
}

/// Maps indices of a scaled image back to the source pixel they mostly come
/// from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scaler {
    rows: Axis,
    cols: Axis,
}

impl Scaler {
    /// Scaler between a source of size `src` and its scaled version of size
    /// `scaled`.
    ///
    /// # Panics
    ///
    /// When either size is empty.
    pub fn new(src: Size2D, scaled: Size2D) -> Self {
        assert!(src.area() > 0 && scaled.area() > 0, "scaler needs non-empty sizes");
        Self {
            rows: Axis::new(src.rows, scaled.rows),
            cols: Axis::new(src.cols, scaled.cols),
        }
    }

    /// [`scale_to_fit`], returning the scaler for the result too.
    pub fn fit<C: Container2D<Item = Rgb>>(src: &C, width: usize, height: usize) -> (Image, Self) {
        let scaled = scale_to_fit(src, width, height);
        let scaler = Self::new(src.size2d(), scaled.size2d());
        (scaled, scaler)
    }

    // The scaled index covers grid cells `[ie·pe, (ie+1)·pe)`; take the
    // source index under the middle of that range.
    fn to_source_index(ax: Axis, ie: usize) -> usize {
        let first = ie * ax.p1 / ax.p0;
        let last = ((ie + 1) * ax.p1 - 1) / ax.p0;
        (first + last) / 2
    }

    pub fn source_row(&self, ie: usize) -> usize {
        Self::to_source_index(self.rows, ie)
    }

    pub fn source_col(&self, je: usize) -> usize {
        Self::to_source_index(self.cols, je)
    }

    /// Source position of a position in the scaled image.
    ///
    /// # Panics
    ///
    /// When `p` has a negative coordinate.
    pub fn to_source(&self, p: Position) -> Position {
        match p.to_index() {
            Some((i, j)) => Position::from((self.source_row(i), self.source_col(j))),
            None => panic!("negative position {p:?}"),
        }
    }
}
