use std::path::PathBuf;

use template_picker_application::{ApplicationError, CatalogProvider};
use template_picker_domain::{detect_image_kind, ImageKind, ImageResource};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Enumerates the template images bundled in an assets directory, sorted by
/// file name so the catalog order is stable between runs.
#[derive(Debug, Clone)]
pub struct WalkdirCatalogProvider {
    assets_dir: PathBuf,
}

impl WalkdirCatalogProvider {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }
}

impl CatalogProvider for WalkdirCatalogProvider {
    fn images(&self) -> Result<Vec<ImageResource>, ApplicationError> {
        if !self.assets_dir.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "assets folder does not exist or is not a directory: {}",
                self.assets_dir.display()
            )));
        }

        let mut scanned_files = 0_usize;
        let mut images = Vec::new();

        for entry in WalkDir::new(&self.assets_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }

            scanned_files += 1;
            let file_path = entry.path();
            if detect_image_kind(file_path) == ImageKind::Unsupported {
                debug!(path = %file_path.display(), "skipping unsupported asset");
                continue;
            }
            images.push(ImageResource::from_path(file_path));
        }

        info!(
            folder = %self.assets_dir.display(),
            scanned_files,
            images = images.len(),
            "template assets scanned"
        );
        Ok(images)
    }
}
