//! Profile photo decoding.
//!
//! Photos arrive as `data:image/...;base64` URLs. Every payload is fully
//! decoded, so a corrupt image fails here instead of inside a PDF viewer.
//! Gray and RGB JPEGs are embedded unchanged under DCTDecode; anything else
//! (PNG, WebP, CMYK JPEG) is flattened onto white and embedded as raw RGB,
//! which the writer Flate-compresses.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegDecoder;
use image::{ExtendedColorType, GenericImageView, ImageDecoder, ImageFormat};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("photo is not a base64 data URL")]
    NotDataUrl,

    #[error("unsupported photo type: {0}")]
    Unsupported(String),

    #[error("photo payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("photo could not be decoded: {0}")]
    Decode(#[from] image::ImageError),
}

/// Pixel payload as it goes into the image XObject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pixels {
    /// An untouched JPEG stream.
    Jpeg(Vec<u8>),
    /// 8-bit samples, row-major, `components` per pixel.
    Raw(Vec<u8>),
}

/// A decoded photo ready for embedding.
#[derive(Clone, PartialEq, Eq)]
pub struct Photo {
    pub pixels: Pixels,
    pub width: u32,
    pub height: u32,
    /// 1 = grayscale, 3 = RGB.
    pub components: u8,
}

impl std::fmt::Debug for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (kind, len) = match &self.pixels {
            Pixels::Jpeg(bytes) => ("jpeg", bytes.len()),
            Pixels::Raw(bytes) => ("raw", bytes.len()),
        };
        f.debug_struct("Photo")
            .field("pixels", &format_args!("{kind}({len} bytes)"))
            .field("width", &self.width)
            .field("height", &self.height)
            .field("components", &self.components)
            .finish()
    }
}

impl Photo {
    /// Parses `data:image/<any>;base64,<payload>`.
    pub fn from_data_url(url: &str) -> Result<Self, PhotoError> {
        let rest = url.trim().strip_prefix("data:").ok_or(PhotoError::NotDataUrl)?;
        let (meta, payload) = rest.split_once(',').ok_or(PhotoError::NotDataUrl)?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or(PhotoError::NotDataUrl)?
            .to_ascii_lowercase();
        if !mime.starts_with("image/") {
            return Err(PhotoError::Unsupported(mime));
        }
        let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = STANDARD.decode(cleaned)?;
        Self::from_bytes(bytes)
    }

    /// Decodes image file bytes; the format is sniffed from the content.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PhotoError> {
        let format = image::guess_format(&bytes)?;
        let decoded = image::load_from_memory_with_format(&bytes, format)?;
        let (width, height) = decoded.dimensions();

        if format == ImageFormat::Jpeg {
            let components = match JpegDecoder::new(Cursor::new(bytes.as_slice()))?.original_color_type() {
                ExtendedColorType::L8 => Some(1),
                ExtendedColorType::Rgb8 => Some(3),
                _ => None,
            };
            if let Some(components) = components {
                return Ok(Self {
                    pixels: Pixels::Jpeg(bytes),
                    width,
                    height,
                    components,
                });
            }
        }

        let rgba = decoded.to_rgba8();
        let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[over_white(r, a), over_white(g, a), over_white(b, a)]);
        }
        Ok(Self {
            pixels: Pixels::Raw(rgb),
            width,
            height,
            components: 3,
        })
    }

    pub fn color_space(&self) -> &'static str {
        match self.components {
            1 => "DeviceGray",
            _ => "DeviceRGB",
        }
    }
}

/// Composites one channel onto a white page.
fn over_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (channel as u32, alpha as u32);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
fn encode_fixture(image: image::DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).unwrap();
    out.into_inner()
}

/// A real 2×3 RGB JPEG.
#[cfg(test)]
pub(crate) fn tiny_jpeg() -> Vec<u8> {
    let image = image::RgbImage::from_fn(2, 3, |x, y| image::Rgb([x as u8 * 120, y as u8 * 80, 60]));
    encode_fixture(image::DynamicImage::ImageRgb8(image), ImageFormat::Jpeg)
}

#[cfg(test)]
pub(crate) fn tiny_jpeg_data_url() -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(tiny_jpeg()))
}

/// A 16×16 PNG, left half opaque red, right half fully transparent.
#[cfg(test)]
pub(crate) fn tiny_png() -> Vec<u8> {
    let image = image::RgbaImage::from_fn(16, 16, |x, _| {
        if x < 8 {
            image::Rgba([255, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    encode_fixture(image::DynamicImage::ImageRgba8(image), ImageFormat::Png)
}

#[cfg(test)]
pub(crate) fn tiny_png_data_url() -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(tiny_png()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_passes_through_unchanged() {
        let photo = Photo::from_data_url(&tiny_jpeg_data_url()).unwrap();
        assert_eq!(photo.width, 2);
        assert_eq!(photo.height, 3);
        assert_eq!(photo.components, 3);
        assert_eq!(photo.color_space(), "DeviceRGB");
        assert_eq!(photo.pixels, Pixels::Jpeg(tiny_jpeg()));
    }

    #[test]
    fn test_png_is_flattened_to_rgb() {
        let photo = Photo::from_data_url(&tiny_png_data_url()).unwrap();
        assert_eq!((photo.width, photo.height, photo.components), (16, 16, 3));
        let Pixels::Raw(rgb) = &photo.pixels else {
            panic!("PNG should be re-encoded as raw RGB");
        };
        assert_eq!(rgb.len(), 16 * 16 * 3);
        assert_eq!(&rgb[..3], &[255, 0, 0]);
        // Transparent pixels land on white.
        assert_eq!(&rgb[8 * 3..9 * 3], &[255, 255, 255]);
    }

    #[test]
    fn test_mime_label_does_not_decide_format() {
        let url = format!("data:image/jpg;base64,{}", STANDARD.encode(tiny_png()));
        let photo = Photo::from_data_url(&url).unwrap();
        assert!(matches!(photo.pixels, Pixels::Raw(_)));
    }

    #[test]
    fn test_rejects_jpeg_without_scan_data() {
        // SOI, APP0, a complete SOF0 header, EOI: dimensions but no pixels.
        let bytes = vec![
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x06, b'J', b'F', b'I', b'F', 0xFF, 0xC0, 0x00, 0x11,
            0x08, 0x00, 0x03, 0x00, 0x02, 0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11,
            0x01, 0xFF, 0xD9,
        ];
        assert!(matches!(Photo::from_bytes(bytes), Err(PhotoError::Decode(_))));
    }

    #[test]
    fn test_rejects_truncated_png() {
        let mut bytes = tiny_png();
        bytes.truncate(40);
        assert!(matches!(Photo::from_bytes(bytes), Err(PhotoError::Decode(_))));
    }

    #[test]
    fn test_rejects_non_image_mime() {
        let err = Photo::from_data_url("data:text/plain;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(err, PhotoError::Unsupported(ref m) if m == "text/plain"));
    }

    #[test]
    fn test_rejects_plain_url() {
        assert!(matches!(
            Photo::from_data_url("https://example.com/me.jpg"),
            Err(PhotoError::NotDataUrl)
        ));
    }

    #[test]
    fn test_rejects_bad_base64() {
        assert!(matches!(
            Photo::from_data_url("data:image/jpeg;base64,@@@"),
            Err(PhotoError::Base64(_))
        ));
    }

    #[test]
    fn test_over_white() {
        assert_eq!(over_white(10, 255), 10);
        assert_eq!(over_white(10, 0), 255);
    }
}
