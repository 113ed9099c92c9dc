use effect_studio_domain::{ImageId, ImageUpload};

use crate::ImageListQuery;

#[derive(Debug, Clone, Default)]
pub struct ListImagesCommand {
    pub query: ImageListQuery,
}

#[derive(Debug, Clone, Copy)]
pub struct OpenImageCommand {
    pub image_id: ImageId,
}

#[derive(Debug, Clone, Copy)]
pub struct FetchImageCommand {
    pub image_id: ImageId,
}

#[derive(Debug, Clone, Default)]
pub struct RenderPipelineCommand;

#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    pub upload: ImageUpload,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteImageCommand {
    pub image_id: ImageId,
}
