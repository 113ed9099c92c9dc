use effect_studio_domain::{DecodedImage, ImageBlob, ImageListing, SelectedImage};

use crate::{
    ApplicationError, DeleteImageCommand, FetchImageCommand, ImageDecoder, ImageGateway,
    ImageListQuery, ListImagesCommand, OpenImageCommand, PipelineSession, RenderPipelineCommand,
    UploadImageCommand,
};

pub struct ApplicationService {
    gateway: Box<dyn ImageGateway>,
    decoder: Box<dyn ImageDecoder>,
    base_url: String,
}

impl ApplicationService {
    pub fn new(
        gateway: Box<dyn ImageGateway>,
        decoder: Box<dyn ImageDecoder>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            decoder,
            base_url: base_url.into(),
        }
    }

    pub async fn list_images(
        &self,
        command: ListImagesCommand,
    ) -> Result<ImageListing, ApplicationError> {
        self.gateway.list_images(&command.query).await
    }

    /// Looks the image up in the gallery and makes it the session's target.
    pub async fn open_image(
        &self,
        session: &mut PipelineSession,
        command: OpenImageCommand,
    ) -> Result<SelectedImage, ApplicationError> {
        let listing = self.gateway.list_images(&ImageListQuery::All).await?;
        let metadata = listing
            .images
            .iter()
            .find(|image| image.id == command.image_id)
            .ok_or_else(|| {
                ApplicationError::NotFound(format!(
                    "image not found for id={}",
                    command.image_id.get()
                ))
            })?;

        let selected = SelectedImage::from_metadata(metadata, &self.base_url);
        session.select_image(selected.clone());
        Ok(selected)
    }

    pub async fn fetch_image(
        &self,
        command: FetchImageCommand,
    ) -> Result<ImageBlob, ApplicationError> {
        self.gateway.fetch_image(command.image_id).await
    }

    /// Sends the session pipeline for the selected image to the backend.
    ///
    /// An incomplete pipeline fails before any request is issued.
    pub async fn render_pipeline(
        &self,
        session: &PipelineSession,
        _command: RenderPipelineCommand,
    ) -> Result<ImageBlob, ApplicationError> {
        let image = session
            .selected_image()
            .ok_or(ApplicationError::NoImageSelected)?;
        let query = session.pipeline().to_query()?;
        log::info!(
            "rendering image {} with algorithm={:?}",
            image.id.get(),
            query.algorithm
        );
        self.gateway.fetch_processed_image(image.id, &query).await
    }

    /// Checks that bytes returned by the backend are a readable image.
    pub fn describe_image(&self, blob: &ImageBlob) -> Result<DecodedImage, ApplicationError> {
        if blob.bytes.is_empty() {
            return Err(ApplicationError::Decode("empty image body".to_string()));
        }
        self.decoder.decode(blob)
    }

    pub async fn upload_image(
        &self,
        session: &mut PipelineSession,
        command: UploadImageCommand,
    ) -> Result<String, ApplicationError> {
        let message = self.gateway.upload_image(command.upload).await?;
        session.mark_uploaded();
        Ok(message)
    }

    pub async fn delete_image(
        &self,
        session: &mut PipelineSession,
        command: DeleteImageCommand,
    ) -> Result<String, ApplicationError> {
        let message = self.gateway.delete_image(command.image_id).await?;
        if session
            .selected_image()
            .is_some_and(|image| image.id == command.image_id)
        {
            session.clear_selection();
        }
        session.mark_deleted();
        Ok(message)
    }
}
