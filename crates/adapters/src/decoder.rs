use std::io::Cursor;

use effect_studio_application::{ApplicationError, ImageDecoder};
use effect_studio_domain::{DecodedImage, ImageBlob, ImageKind};
use image::{ImageFormat, ImageReader};

#[derive(Debug, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, blob: &ImageBlob) -> Result<DecodedImage, ApplicationError> {
        let reader = ImageReader::new(Cursor::new(blob.bytes.as_slice()))
            .with_guessed_format()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        let kind = match reader.format() {
            Some(ImageFormat::Jpeg) => ImageKind::Jpeg,
            Some(ImageFormat::Png) => ImageKind::Png,
            _ => {
                return Err(ApplicationError::Decode(format!(
                    "unsupported image format (content type {:?})",
                    blob.content_type
                )))
            }
        };

        let image = reader
            .decode()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        Ok(DecodedImage {
            width: image.width(),
            height: image.height(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, ImageBuffer, Rgb};

    use super::*;

    fn encoded(format: ImageFormat) -> Vec<u8> {
        let buffer = ImageBuffer::from_fn(12, 7, |_x, _y| Rgb([10_u8, 20_u8, 30_u8]));
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(buffer)
            .write_to(&mut bytes, format)
            .expect("encode");
        bytes.into_inner()
    }

    #[test]
    fn decodes_png_and_jpeg_dimensions() {
        for (format, kind) in [
            (ImageFormat::Png, ImageKind::Png),
            (ImageFormat::Jpeg, ImageKind::Jpeg),
        ] {
            let decoded = ImageCrateDecoder
                .decode(&ImageBlob {
                    content_type: None,
                    bytes: encoded(format),
                })
                .expect("decode");
            assert_eq!((decoded.width, decoded.height), (12, 7));
            assert_eq!(decoded.kind, kind);
        }
    }

    #[test]
    fn rejects_non_image_bodies() {
        let result = ImageCrateDecoder.decode(&ImageBlob {
            content_type: Some("text/html".to_string()),
            bytes: b"<html>missing parameter</html>".to_vec(),
        });
        assert!(matches!(result, Err(ApplicationError::Decode(_))));
    }
}
