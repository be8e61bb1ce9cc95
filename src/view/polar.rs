use num_traits::Float;

use super::oriented::{OrientedFrame, Point};
use crate::container::{Container2D, Container2DMut};

/// Polar `(r, theta)` indexing around the center of a container.
///
/// Built on a centered Cartesian [`OrientedFrame`]. `theta` is in degrees,
/// counter-clockwise from the positive x axis. The Cartesian coordinates
/// `r·cos θ`, `r·sin θ` are truncated toward zero, so many `(r, θ)` pairs
/// land on the same pixel.
///
/// [`PolarFrame::r_max`] is the horizontal half-width. On non-square images
/// some `(r, θ)` within that radius fall outside the image: [`PolarFrame::get`] returns `None` and [`PolarFrame::set`]
/// ignores the write for those.
#[derive(Clone, Debug)]
pub struct PolarFrame<C> {
    frame: OrientedFrame<C>,
}

impl<C: Container2D> PolarFrame<C> {
    pub fn new(inner: C) -> Self {
        Self {
            frame: OrientedFrame::centered(inner),
        }
    }

    /// Largest radius along the positive x axis.
    pub fn r_max(&self) -> f64 {
        self.frame.x_max() as f64
    }

    /// Cartesian frame point addressed by `(r, theta)`.
    pub fn point(&self, r: f64, theta: f64) -> Point {
        let t = Float::to_radians(theta);
        Point::new(
            (r * Float::cos(t)) as isize,
            (r * Float::sin(t)) as isize,
        )
    }

    pub fn contains(&self, r: f64, theta: f64) -> bool {
        let p = self.point(r, theta);
        self.frame.contains_xy(p.x, p.y)
    }

    pub fn get(&self, r: f64, theta: f64) -> Option<&C::Item> {
        let p = self.point(r, theta);
        self.frame.get_xy(p.x, p.y)
    }

    /// Element at `(r, theta)`.
    ///
    /// # Panics
    ///
    /// When the point falls outside the container.
    pub fn at(&self, r: f64, theta: f64) -> &C::Item {
        let p = self.point(r, theta);
        self.frame.at_xy(p.x, p.y)
    }

    pub fn frame(&self) -> &OrientedFrame<C> {
        &self.frame
    }

    pub fn into_inner(self) -> C {
        self.frame.into_inner()
    }
}

impl<C: Container2DMut> PolarFrame<C> {
    /// Element at `(r, theta)`, mutably.
    ///
    /// # Panics
    ///
    /// When the point falls outside the container.
    pub fn at_mut(&mut self, r: f64, theta: f64) -> &mut C::Item {
        let p = self.point(r, theta);
        self.frame.at_xy_mut(p.x, p.y)
    }

    /// Write `v` at `(r, theta)`. Returns `false`, writing nothing, when the
    /// point is outside the container.
    pub fn set(&mut self, r: f64, theta: f64, v: C::Item) -> bool {
        let p = self.point(r, theta);
        match self.frame.get_xy_mut(p.x, p.y) {
            Some(slot) => {
                *slot = v;
                true
            }
            None => false,
        }
    }

    pub fn frame_mut(&mut self) -> &mut OrientedFrame<C> {
        &mut self.frame
    }
}
