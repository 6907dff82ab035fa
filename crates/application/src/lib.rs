mod controller;
mod error;
mod events;
mod ports;
mod view;

pub use controller::GalleryController;
pub use error::ApplicationError;
pub use events::GalleryEvent;
pub use ports::{CatalogProvider, SelectionListener, SelectionStore, SubscriptionId};
pub use view::{
    render_gallery, GalleryCell, GalleryView, OverlayView, SelectorView, ThumbnailView,
    GALLERY_HEADING,
};
