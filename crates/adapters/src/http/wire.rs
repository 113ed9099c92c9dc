use effect_studio_domain::{ImageListing, ImageMetadata};
use serde::Deserialize;

/// The list endpoint answers with a count object followed by image entries.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListEntry {
    Count {
        #[serde(rename = "nbImages")]
        nb_images: u64,
    },
    Image(ImageMetadata),
}

pub fn parse_listing(body: &str) -> Result<ImageListing, serde_json::Error> {
    let entries: Vec<ListEntry> = serde_json::from_str(body)?;
    let mut total = None;
    let mut images = Vec::new();

    for entry in entries {
        match entry {
            ListEntry::Count { nb_images } => total = Some(nb_images),
            ListEntry::Image(image) => images.push(image),
        }
    }

    Ok(ImageListing {
        total: total.unwrap_or(images.len() as u64),
        images,
    })
}
