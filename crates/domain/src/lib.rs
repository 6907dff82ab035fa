mod catalog;
mod error;
mod image;
mod preview;
mod template;

pub use catalog::Catalog;
pub use error::DomainError;
pub use image::{detect_image_kind, ImageKind, ImageResource};
pub use preview::{PreviewOverlay, PreviewState, PreviewTransition};
pub use template::{is_active, template_label, TemplateId};
