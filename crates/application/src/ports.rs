use async_trait::async_trait;
use effect_studio_domain::{
    DecodedImage, EffectQuery, ImageBlob, ImageId, ImageListing, ImageUpload,
};

use crate::ApplicationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageListQuery {
    #[default]
    All,
    Page {
        index: u64,
        size: u32,
    },
    /// Images of one format whose name contains `name`.
    Filtered {
        image_type: String,
        name: String,
    },
}

/// Remote image service. Failures are reported as-is, never retried.
#[async_trait]
pub trait ImageGateway: Send + Sync {
    async fn list_images(&self, query: &ImageListQuery) -> Result<ImageListing, ApplicationError>;

    async fn fetch_image(&self, image_id: ImageId) -> Result<ImageBlob, ApplicationError>;

    async fn fetch_processed_image(
        &self,
        image_id: ImageId,
        query: &EffectQuery,
    ) -> Result<ImageBlob, ApplicationError>;

    async fn upload_image(&self, upload: ImageUpload) -> Result<String, ApplicationError>;

    async fn delete_image(&self, image_id: ImageId) -> Result<String, ApplicationError>;
}

pub trait ImageDecoder: Send + Sync {
    fn decode(&self, blob: &ImageBlob) -> Result<DecodedImage, ApplicationError>;
}
