pub mod decoder;
pub mod fs;
pub mod http;
pub mod presenters;

pub use decoder::ImageCrateDecoder;
pub use fs::{read_upload, save_blob};
pub use http::{HttpImageGateway, DEFAULT_TIMEOUT};
pub use presenters::{
    present_decoded, present_effect, present_effect_schema, present_image_row, present_listing,
    present_pipeline,
};
