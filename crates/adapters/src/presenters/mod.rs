use template_picker_application::{ApplicationError, GalleryCell, GalleryView, OverlayView};
use template_picker_domain::TemplateId;

pub fn present_cell_row(cell: &GalleryCell) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        if cell.is_active() { "*" } else { " " },
        cell.template_id,
        cell.selector.label,
        cell.thumbnail.image
    )
}

pub fn present_overlay(overlay: &OverlayView) -> String {
    format!("previewing {} ({})", overlay.caption, overlay.image)
}

pub fn present_selection(selection: Option<TemplateId>) -> String {
    match selection {
        Some(id) => format!("selected {}", id.label()),
        None => "no template selected".to_string(),
    }
}

pub fn present_gallery_json(view: &GalleryView) -> Result<String, ApplicationError> {
    serde_json::to_string_pretty(view)
        .map_err(|error| ApplicationError::Serialization(error.to_string()))
}
