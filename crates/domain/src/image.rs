use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Opaque reference to a displayable image: a file path, URL or bundle key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageResource(String);

impl ImageResource {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().to_string())
    }

    pub fn location(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl Display for ImageResource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Unsupported,
}

pub fn detect_image_kind(path: &Path) -> ImageKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return ImageKind::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "png" => ImageKind::Png,
        "jpg" | "jpeg" => ImageKind::Jpeg,
        _ => ImageKind::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_kind_detection_works() {
        assert_eq!(detect_image_kind(Path::new("a.png")), ImageKind::Png);
        assert_eq!(detect_image_kind(Path::new("a.JPG")), ImageKind::Jpeg);
        assert_eq!(
            detect_image_kind(Path::new("a.svg")),
            ImageKind::Unsupported
        );
        assert_eq!(detect_image_kind(Path::new("README")), ImageKind::Unsupported);
    }

    #[test]
    fn resource_keeps_location_verbatim() {
        let resource = ImageResource::new("assets/img/1.png");
        assert_eq!(resource.location(), "assets/img/1.png");
        assert_eq!(resource.as_path(), Path::new("assets/img/1.png"));
        assert_eq!(resource.to_string(), "assets/img/1.png");
    }
}
