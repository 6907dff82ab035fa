/// User gestures routed into a gallery controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    ThumbnailActivated(usize),
    SelectorActivated(usize),
    OverlayDismissed,
}
