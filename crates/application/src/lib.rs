mod error;
mod ports;
mod service;
mod session;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{ImageDecoder, ImageGateway, ImageListQuery};
pub use service::ApplicationService;
pub use session::PipelineSession;
pub use use_cases::{
    DeleteImageCommand, FetchImageCommand, ListImagesCommand, OpenImageCommand,
    RenderPipelineCommand, UploadImageCommand,
};
