use crate::buffer::PixelBuffer;
use crate::container::{Container2D, Container2DMut};
use crate::pixel::{Channel, Rgb};

/// Scalar view of one color channel of an RGB container.
///
/// Element `(i, j)` aliases `inner.at(i, j).r` (or `.g`, `.b`). Writing is
/// available only when the wrapped container is writable, so a channel view
/// over a shared borrow cannot be written:
///
/// ```compile_fail
/// use zenraster::{Container2DMut, Image};
/// use zenraster::view::ChannelView;
///
/// let img = Image::new(2, 2);
/// let mut red = ChannelView::red(&img);
/// *red.at_mut(0, 0) = 255;
/// ```
///
/// ```
/// use zenraster::{Container2D, Container2DMut, Image, Rgb};
/// use zenraster::view::ChannelView;
///
/// let mut img = Image::filled(2, 2, Rgb::new(1, 2, 3));
/// *ChannelView::red(&mut img).at_mut(0, 1) = 255;
/// assert_eq!(img[(0, 1)], Rgb::new(255, 2, 3));
/// assert_eq!(*ChannelView::blue(&img).at(0, 1), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ChannelView<C> {
    inner: C,
    channel: Channel,
}

impl<C: Container2D<Item = Rgb>> ChannelView<C> {
    pub fn new(inner: C, channel: Channel) -> Self {
        Self { inner, channel }
    }

    pub fn red(inner: C) -> Self {
        Self::new(inner, Channel::Red)
    }

    pub fn green(inner: C) -> Self {
        Self::new(inner, Channel::Green)
    }

    pub fn blue(inner: C) -> Self {
        Self::new(inner, Channel::Blue)
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Container2D<Item = Rgb>> Container2D for ChannelView<C> {
    type Item = i32;

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn at(&self, i: usize, j: usize) -> &i32 {
        self.channel.get(self.inner.at(i, j))
    }
}

impl<C: Container2DMut<Item = Rgb>> Container2DMut for ChannelView<C> {
    fn at_mut(&mut self, i: usize, j: usize) -> &mut i32 {
        self.channel.get_mut(self.inner.at_mut(i, j))
    }
}

/// Read-only view that passes every element through `f`.
///
/// Elements are computed on access, so this view yields values rather than
/// references and does not implement [`Container2D`].
#[derive(Clone, Debug)]
pub struct MapView<C, F> {
    inner: C,
    f: F,
}

impl<C, F, U> MapView<C, F>
where
    C: Container2D,
    F: Fn(&C::Item) -> U,
{
    pub fn new(inner: C, f: F) -> Self {
        Self { inner, f }
    }

    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    /// `f(inner.at(i, j))`.
    pub fn get(&self, i: usize, j: usize) -> U {
        (self.f)(self.inner.at(i, j))
    }

    /// Mapped elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = U> + '_ {
        self.inner.iter().map(&self.f)
    }

    pub fn to_buffer(&self) -> PixelBuffer<U> {
        PixelBuffer::from_fn(self.rows(), self.cols(), |i, j| self.get(i, j))
    }
}
