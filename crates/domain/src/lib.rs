pub mod catalog;
mod effect;
mod error;
mod image;
mod pipeline;
mod route;

pub use catalog::{ChoiceSchema, EffectSchema, RangeSchema};
pub use effect::{ChoiceParam, Effect, EffectParameterSet, EffectType, Parameter, RangeParam};
pub use error::DomainError;
pub use image::{
    detect_image_kind, DecodedImage, ImageBlob, ImageId, ImageKind, ImageListing, ImageMetadata,
    ImageUpload, SelectedImage,
};
pub use pipeline::{EffectQuery, Pipeline};
pub use route::Route;
