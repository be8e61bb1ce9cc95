//! Reading and writing RGB images through the `image` crate.
//!
//! Errors carry the location they were raised at via [`whereat::At`].

use std::path::{Path, PathBuf};

use whereat::{At, ErrorAtExt};

use crate::buffer::{Image, PixelBuffer};
use crate::container::Container2D;
use crate::pixel::Rgb;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("{0}: not a regular file")]
    NotFound(PathBuf),
    #[error("{path}: cannot decode")]
    CannotRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{path}: unsupported channel count {channels}")]
    UnsupportedChannels { path: PathBuf, channels: u8 },
    #[error("pixel {pixel} at ({i}, {j}) is not an 8-bit color")]
    OutOfGamut { i: usize, j: usize, pixel: Rgb },
    #[error("{path}: cannot encode")]
    CannotWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decode the image at `path`.
///
/// Gray images come back with the gray level in all three channels.
pub fn read(path: impl AsRef<Path>) -> Result<Image, At<CodecError>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(CodecError::NotFound(path.to_path_buf()).start_at());
    }
    let decoded = image::open(path).map_err(|source| {
        CodecError::CannotRead {
            path: path.to_path_buf(),
            source,
        }
        .start_at()
    })?;
    let channels = decoded.color().channel_count();
    let (cols, rows) = (decoded.width() as usize, decoded.height() as usize);
    log::debug!("read {}: {rows}x{cols}, {channels} channel(s)", path.display());

    let data = match channels {
        1 => decoded
            .to_luma8()
            .pixels()
            .map(|p| Rgb::gray(i32::from(p.0[0])))
            .collect(),
        3 => decoded
            .to_rgb8()
            .pixels()
            .map(|p| Rgb::new(i32::from(p.0[0]), i32::from(p.0[1]), i32::from(p.0[2])))
            .collect(),
        _ => {
            return Err(CodecError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels,
            }
            .start_at());
        }
    };
    Ok(PixelBuffer::from_vec(rows, cols, data))
}

/// Encode `img` to `path`; the format follows the file extension.
pub fn write<C>(img: &C, path: impl AsRef<Path>) -> Result<(), At<CodecError>>
where
    C: Container2D<Item = Rgb>,
{
    let path = path.as_ref();
    for i in 0..img.rows() {
        for j in 0..img.cols() {
            let pixel = *img.at(i, j);
            if !pixel.is_valid() {
                return Err(CodecError::OutOfGamut { i, j, pixel }.start_at());
            }
        }
    }
    log::debug!("write {}: {}x{}", path.display(), img.rows(), img.cols());

    // components are known to be in 0..=255 here
    let encoded = image::RgbImage::from_fn(img.cols() as u32, img.rows() as u32, |x, y| {
        let p = img.at(y as usize, x as usize);
        image::Rgb([p.r as u8, p.g as u8, p.b as u8])
    });
    encoded.save(path).map_err(|source| {
        CodecError::CannotWrite {
            path: path.to_path_buf(),
            source,
        }
        .start_at()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let err = read("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err.error(), CodecError::NotFound(_)));
    }

    #[test]
    fn directory_is_not_found() {
        let err = read(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err.error(), CodecError::NotFound(_)));
    }

    #[test]
    fn out_of_gamut_is_rejected_before_writing() {
        let mut img = Image::filled(2, 2, Rgb::WHITE);
        img[(1, 0)] = Rgb::new(256, 0, 0);
        let path = std::env::temp_dir().join("zenraster-gamut.png");
        let err = write(&img, &path).unwrap_err();
        assert!(matches!(err.error(), CodecError::OutOfGamut { i: 1, j: 0, .. }));
        assert!(!path.exists());
    }
}
