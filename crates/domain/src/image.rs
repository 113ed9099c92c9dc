use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Backend image identifier. `0` is a valid backend id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct ImageId(i64);

impl ImageId {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 0 {
            return Err(DomainError::InvalidImageId(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ImageId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Unsupported,
}

impl ImageKind {
    pub fn content_type(self) -> Option<&'static str> {
        match self {
            Self::Jpeg => Some("image/jpeg"),
            Self::Png => Some("image/png"),
            Self::Unsupported => None,
        }
    }
}

/// One gallery entry as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub id: ImageId,
    pub name: String,
    #[serde(rename = "type")]
    pub image_type: String,
    pub size: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageListing {
    /// Number of images held by the backend, independent of paging.
    pub total: u64,
    pub images: Vec<ImageMetadata>,
}

/// Image the pipeline will be applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub id: ImageId,
    pub source: String,
    pub name: String,
    pub image_type: String,
    pub size: String,
    pub url: String,
}

impl SelectedImage {
    pub fn from_metadata(metadata: &ImageMetadata, base_url: &str) -> Self {
        let url = format!(
            "{}/images/{}",
            base_url.trim_end_matches('/'),
            metadata.id.get()
        );
        Self {
            id: metadata.id,
            source: url.clone(),
            name: metadata.name.clone(),
            image_type: metadata.image_type.clone(),
            size: metadata.size.clone(),
            url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub kind: ImageKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let content_type = detect_image_kind(Path::new(file_name))
            .content_type()
            .ok_or_else(|| DomainError::UnsupportedImageFormat(file_name.to_string()))?;
        Ok(Self {
            file_name: file_name.to_string(),
            content_type,
            bytes,
        })
    }
}

pub fn detect_image_kind(path: &Path) -> ImageKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return ImageKind::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => ImageKind::Jpeg,
        "png" => ImageKind::Png,
        _ => ImageKind::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_id_must_not_be_negative() {
        assert!(ImageId::new(0).is_ok());
        assert!(matches!(
            ImageId::new(-1),
            Err(DomainError::InvalidImageId(-1))
        ));
    }

    #[test]
    fn deserialized_ids_are_validated() {
        let id: ImageId = serde_json::from_str("7").expect("id");
        assert_eq!(id.get(), 7);
        assert!(serde_json::from_str::<ImageId>("-3").is_err());
        assert!(serde_json::from_str::<ImageMetadata>(
            r#"{"id":-1,"name":"x.png","type":"png","size":"1*1*3"}"#
        )
        .is_err());
    }

    #[test]
    fn image_kind_detection_works() {
        assert_eq!(detect_image_kind(Path::new("a.JPG")), ImageKind::Jpeg);
        assert_eq!(detect_image_kind(Path::new("a.png")), ImageKind::Png);
        assert_eq!(
            detect_image_kind(Path::new("a.gif")),
            ImageKind::Unsupported
        );
        assert_eq!(detect_image_kind(Path::new("noext")), ImageKind::Unsupported);
    }

    #[test]
    fn upload_requires_jpeg_or_png() {
        let upload = ImageUpload::new("cat.jpeg", vec![1, 2]).expect("jpeg upload");
        assert_eq!(upload.content_type, "image/jpeg");
        assert!(matches!(
            ImageUpload::new("cat.tiff", vec![]),
            Err(DomainError::UnsupportedImageFormat(_))
        ));
    }

    #[test]
    fn metadata_uses_backend_field_names() {
        let metadata: ImageMetadata = serde_json::from_str(
            r#"{"id":3,"name":"lena.png","type":"png","size":"512*512*3"}"#,
        )
        .expect("metadata");
        assert_eq!(metadata.id.get(), 3);
        assert_eq!(metadata.image_type, "png");

        let selected = SelectedImage::from_metadata(&metadata, "http://localhost:8080/");
        assert_eq!(selected.url, "http://localhost:8080/images/3");
    }
}
