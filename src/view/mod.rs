//! Non-owning views over a container.
//!
//! Every view is generic over the container `C` it wraps and holds it by
//! value. Pass `&buffer` for a read-only view, `&mut buffer` for a writable
//! one, or another view to stack them:
//!
//! ```
//! use zenraster::{Container2D, Container2DMut, Image, Position, Rgb, Size2D};
//! use zenraster::view::{ChannelView, SubImage};
//!
//! let mut img = Image::filled(4, 4, Rgb::BLACK);
//! {
//!     let window = SubImage::new(&mut img, Position::new(1, 1), Size2D::new(2, 2));
//!     let mut green = ChannelView::green(window);
//!     green.fill(200);
//! }
//! assert_eq!(img[(1, 2)], Rgb::new(0, 200, 0));
//! assert_eq!(img[(0, 0)], Rgb::BLACK);
//! ```

mod channel;
mod grid;
mod oriented;
mod polar;
mod sub;

pub use channel::{ChannelView, MapView};
pub use grid::{BlockGrid, ZoomView};
pub use oriented::{AxisSign, AxisSignError, AxisSigns, OrientedFrame, Point};
pub use polar::PolarFrame;
pub use sub::SubImage;
