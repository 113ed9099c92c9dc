use std::fs;
use std::path::{Path, PathBuf};

use effect_studio_application::ApplicationError;
use effect_studio_domain::{ImageBlob, ImageUpload};

/// Reads a local JPEG or PNG file for upload.
pub fn read_upload(path: &Path) -> Result<ImageUpload, ApplicationError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            ApplicationError::InvalidInput(format!("not a file path: {}", path.display()))
        })?;
    let bytes = fs::read(path).map_err(|error| ApplicationError::Io(error.to_string()))?;
    Ok(ImageUpload::new(file_name, bytes)?)
}

/// Writes a blob under `dir` as `<stem>.<ext>`, the extension taken from the
/// content type.
pub fn save_blob(dir: &Path, stem: &str, blob: &ImageBlob) -> Result<PathBuf, ApplicationError> {
    let extension = match blob.content_type.as_deref() {
        Some(content_type) if content_type.starts_with("image/png") => "png",
        Some(content_type) if content_type.starts_with("image/jpeg") => "jpg",
        _ => "bin",
    };
    fs::create_dir_all(dir).map_err(|error| ApplicationError::Io(error.to_string()))?;

    let path = dir.join(format!("{stem}.{extension}"));
    fs::write(&path, &blob.bytes).map_err(|error| ApplicationError::Io(error.to_string()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn reads_supported_upload() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("photo.JPG");
        fs::write(&path, [0xff, 0xd8, 0xff]).expect("write");

        let upload = read_upload(&path).expect("upload");
        assert_eq!(upload.file_name, "photo.JPG");
        assert_eq!(upload.content_type, "image/jpeg");
        assert_eq!(upload.bytes.len(), 3);
    }

    #[test]
    fn rejects_unsupported_and_missing_files() {
        let dir = TempDir::new().expect("tempdir");
        let gif = dir.path().join("anim.gif");
        fs::write(&gif, b"GIF89a").expect("write");

        assert!(matches!(read_upload(&gif), Err(ApplicationError::Domain(_))));
        assert!(matches!(
            read_upload(&dir.path().join("missing.png")),
            Err(ApplicationError::Io(_))
        ));
    }

    #[test]
    fn saves_blob_with_extension_from_content_type() {
        let dir = TempDir::new().expect("tempdir");
        let out_dir = dir.path().join("renders");
        let blob = ImageBlob {
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        };

        let path = save_blob(&out_dir, "image-4", &blob).expect("save");
        assert_eq!(path, out_dir.join("image-4.png"));
        assert_eq!(fs::read(&path).expect("read"), vec![1, 2, 3]);
    }
}
