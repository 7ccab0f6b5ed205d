//! EXIF orientation for phone photos.
//!
//! Cameras store portrait shots as landscape pixels plus an orientation tag.
//! The aspect ratio must be measured after the tag is honored, otherwise a
//! tall capsule photographed upright reads as a wide one.

use std::io::Cursor;

use image::DynamicImage;

/// EXIF tag 0x0112 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    MirrorHorizontal,
    Rotate180,
    MirrorVertical,
    MirrorRotate90,
    Rotate90,
    MirrorRotate270,
    Rotate270,
}

impl Orientation {
    /// Unknown values are treated as [`Orientation::Normal`].
    pub fn from_exif(value: u32) -> Self {
        match value {
            2 => Self::MirrorHorizontal,
            3 => Self::Rotate180,
            4 => Self::MirrorVertical,
            5 => Self::MirrorRotate90,
            6 => Self::Rotate90,
            7 => Self::MirrorRotate270,
            8 => Self::Rotate270,
            _ => Self::Normal,
        }
    }

    /// Read the tag from a JPEG/TIFF container. Anything unreadable is Normal.
    pub fn detect(image_bytes: &[u8]) -> Self {
        let mut cursor = Cursor::new(image_bytes);
        let Ok(exif) = exif::Reader::new().read_from_container(&mut cursor) else {
            return Self::Normal;
        };
        exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Self::from_exif)
            .unwrap_or_default()
    }

    /// Width and height trade places.
    pub fn swaps_axes(&self) -> bool {
        matches!(
            self,
            Self::MirrorRotate90 | Self::Rotate90 | Self::MirrorRotate270 | Self::Rotate270
        )
    }

    pub fn apply(&self, img: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => img,
            Self::MirrorHorizontal => img.fliph(),
            Self::Rotate180 => img.rotate180(),
            Self::MirrorVertical => img.flipv(),
            Self::MirrorRotate90 => img.rotate90().fliph(),
            Self::Rotate90 => img.rotate90(),
            Self::MirrorRotate270 => img.rotate270().fliph(),
            Self::Rotate270 => img.rotate270(),
        }
    }
}
