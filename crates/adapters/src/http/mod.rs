mod wire;

use std::time::Duration;

use async_trait::async_trait;
use effect_studio_application::{ApplicationError, ImageGateway, ImageListQuery};
use effect_studio_domain::{EffectQuery, ImageBlob, ImageId, ImageListing, ImageUpload};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};

pub use wire::parse_listing;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// [`ImageGateway`] backed by the REST image service.
#[derive(Debug, Clone)]
pub struct HttpImageGateway {
    client: Client,
    base_url: Url,
}

impl HttpImageGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApplicationError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|error| ApplicationError::InvalidInput(format!("{base_url}: {error}")))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_transport)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApplicationError> {
        self.base_url
            .join(path)
            .map_err(|error| ApplicationError::InvalidInput(format!("{path}: {error}")))
    }

    fn image_endpoint(&self, image_id: ImageId) -> Result<Url, ApplicationError> {
        self.endpoint(&format!("images/{}", image_id.get()))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApplicationError> {
        let response = request.send().await.map_err(map_transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::warn!("backend answered {status}: {body}");
        Err(ApplicationError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn send_for_blob(&self, request: RequestBuilder) -> Result<ImageBlob, ApplicationError> {
        let response = self.send(request).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await.map_err(map_transport)?;
        Ok(ImageBlob {
            content_type,
            bytes: bytes.to_vec(),
        })
    }

    async fn send_for_text(&self, request: RequestBuilder) -> Result<String, ApplicationError> {
        self.send(request)
            .await?
            .text()
            .await
            .map_err(map_transport)
    }
}

#[async_trait]
impl ImageGateway for HttpImageGateway {
    async fn list_images(&self, query: &ImageListQuery) -> Result<ImageListing, ApplicationError> {
        let mut request = self.client.get(self.endpoint("images")?);
        request = match query {
            ImageListQuery::All => request,
            ImageListQuery::Page { index, size } => {
                request.query(&[("index", index.to_string()), ("size", size.to_string())])
            }
            ImageListQuery::Filtered { image_type, name } => {
                request.query(&[("type", image_type.as_str()), ("nameImg", name.as_str())])
            }
        };
        log::debug!("listing images with {query:?}");

        let body = self.send_for_text(request).await?;
        parse_listing(&body).map_err(|error| ApplicationError::Decode(error.to_string()))
    }

    async fn fetch_image(&self, image_id: ImageId) -> Result<ImageBlob, ApplicationError> {
        let url = self.image_endpoint(image_id)?;
        log::debug!("GET {url}");
        self.send_for_blob(self.client.get(url)).await
    }

    async fn fetch_processed_image(
        &self,
        image_id: ImageId,
        query: &EffectQuery,
    ) -> Result<ImageBlob, ApplicationError> {
        let url = self.image_endpoint(image_id)?;
        let pairs = query.pairs();
        log::debug!("GET {url} with {pairs:?}");
        self.send_for_blob(self.client.get(url).query(&pairs)).await
    }

    async fn upload_image(&self, upload: ImageUpload) -> Result<String, ApplicationError> {
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name.clone())
            .mime_str(upload.content_type)
            .map_err(map_transport)?;
        let form = Form::new().part("file", part);
        log::debug!("POST images ({})", upload.file_name);

        let request = self.client.post(self.endpoint("images")?).multipart(form);
        self.send_for_text(request).await
    }

    async fn delete_image(&self, image_id: ImageId) -> Result<String, ApplicationError> {
        let url = self.image_endpoint(image_id)?;
        log::debug!("DELETE {url}");
        self.send_for_text(self.client.delete(url)).await
    }
}

fn map_transport(error: reqwest::Error) -> ApplicationError {
    if error.is_timeout() {
        log::warn!("request timed out: {error}");
        return ApplicationError::Timeout;
    }
    log::warn!("request failed: {error}");
    ApplicationError::Transport(error.to_string())
}
