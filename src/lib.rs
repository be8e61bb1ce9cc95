//! 2D RGB pixel containers with zero-copy views and exact geometric transforms.
//!
//! Pixel data lives in a [`PixelBuffer`]. Everything else reads and writes it
//! through the [`Container2D`] and [`Container2DMut`] traits, so views can be
//! stacked on buffers or on other views without copying.
//!
//! # Modules
//!
//! - [`pixel`]: the [`Rgb`] pixel value, its arithmetic and text format
//! - [`container`]: container traits, [`Position`], [`Size2D`]
//! - [`buffer`]: the owning [`PixelBuffer`]
//! - [`iter`]: element, row and horizontal-difference iterators
//! - [`view`]: sub-images, channel projections, block grids, oriented and polar frames
//! - [`cursor`]: a movable position with 8-neighbour directions
//! - [`orientation`]: exact quarter turns and mirrors (D4 group)
//! - [`rotate`]: rotation by an arbitrary angle
//! - [`draw`]: segments, rectangles, axes, rays and circles
//! - [`scale`]: area-weighted rescaling on an integer grid, pixel replication
//! - `codec` (feature `codec`): reading and writing image files

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod buffer;
pub mod container;
pub mod cursor;
pub mod draw;
pub mod iter;
pub mod orientation;
pub mod pixel;
pub mod rotate;
pub mod scale;
pub mod view;

#[cfg(feature = "codec")]
pub mod codec;

pub use buffer::{Image, PixelBuffer};
pub use container::{Container2D, Container2DMut, Position, Size2D};
pub use cursor::{Cursor2D, Direction, DirectionVector};
pub use orientation::Orientation;
pub use pixel::{Channel, ParsePixelError, Rgb};
pub use rotate::{Degrees, rotate, rotate_with};
pub use scale::{Scaler, expand, scale_to_fit, scale_to_rows};

#[cfg(feature = "codec")]
pub use codec::CodecError;
