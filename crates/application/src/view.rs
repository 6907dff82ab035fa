use serde::Serialize;
use template_picker_domain::{
    is_active, template_label, Catalog, ImageResource, PreviewOverlay, TemplateId,
};

pub const GALLERY_HEADING: &str = "Choose a Template";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    pub heading: &'static str,
    pub cells: Vec<GalleryCell>,
    pub overlay: Option<OverlayView>,
}

impl GalleryView {
    pub fn active_cell(&self) -> Option<&GalleryCell> {
        self.cells.iter().find(|cell| cell.is_active())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryCell {
    pub index: usize,
    pub template_id: TemplateId,
    pub thumbnail: ThumbnailView,
    pub selector: SelectorView,
}

impl GalleryCell {
    pub fn is_active(&self) -> bool {
        self.thumbnail.active
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThumbnailView {
    pub image: ImageResource,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorView {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub index: usize,
    pub image: ImageResource,
    pub caption: String,
}

impl From<PreviewOverlay<'_>> for OverlayView {
    fn from(value: PreviewOverlay<'_>) -> Self {
        Self {
            index: value.index,
            image: value.image.clone(),
            caption: value.caption,
        }
    }
}

/// Builds one cell per catalog entry. Pure: equal inputs give equal views.
pub fn render_gallery(catalog: &Catalog, selection: Option<TemplateId>) -> GalleryView {
    let cells = catalog
        .iter()
        .map(|(index, image)| {
            let active = is_active(selection, index);
            GalleryCell {
                index,
                template_id: TemplateId::from_index(index),
                thumbnail: ThumbnailView {
                    image: image.clone(),
                    active,
                },
                selector: SelectorView {
                    label: template_label(index),
                    active,
                },
            }
        })
        .collect();

    GalleryView {
        heading: GALLERY_HEADING,
        cells,
        overlay: None,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn catalog_of(n: usize) -> Catalog {
        Catalog::new(
            (0..n)
                .map(|i| ImageResource::new(format!("img/{i}.png")))
                .collect(),
        )
    }

    #[test]
    fn empty_catalog_renders_no_cells() {
        let view = render_gallery(&Catalog::default(), None);
        assert!(view.cells.is_empty());
        assert!(view.overlay.is_none());
        assert_eq!(view.heading, "Choose a Template");
    }

    #[test]
    fn selection_two_highlights_second_cell() {
        let view = render_gallery(&catalog_of(3), TemplateId::new(2).ok());
        let active: Vec<usize> = view
            .cells
            .iter()
            .filter(|cell| cell.is_active())
            .map(|cell| cell.index)
            .collect();
        assert_eq!(active, vec![1]);
        assert_eq!(view.cells[1].selector.label, "Template 2");
        assert_eq!(view.cells[1].thumbnail.image.location(), "img/1.png");
    }

    #[test]
    fn out_of_range_selection_highlights_nothing() {
        let view = render_gallery(&catalog_of(2), TemplateId::new(5).ok());
        assert!(view.active_cell().is_none());
    }

    #[test]
    fn rendering_is_idempotent() {
        let catalog = catalog_of(4);
        let selection = TemplateId::new(3).ok();
        assert_eq!(
            render_gallery(&catalog, selection),
            render_gallery(&catalog, selection)
        );
    }

    fn catalog_and_selection() -> impl Strategy<Value = (usize, Option<u32>)> {
        (0usize..12).prop_flat_map(|n| {
            let selection = if n == 0 {
                Just(None).boxed()
            } else {
                prop::option::of(1..=n as u32).boxed()
            };
            (Just(n), selection)
        })
    }

    proptest! {
        #[test]
        fn highlight_is_consistent((n, selection) in catalog_and_selection()) {
            let selection = selection.map(|value| TemplateId::new(value).expect("positive"));
            let view = render_gallery(&catalog_of(n), selection);
            prop_assert_eq!(view.cells.len(), n);

            for cell in &view.cells {
                prop_assert_eq!(cell.thumbnail.active, cell.selector.active);
            }

            let active: Vec<usize> = view
                .cells
                .iter()
                .filter(|cell| cell.is_active())
                .map(|cell| cell.index)
                .collect();
            match selection {
                None => prop_assert!(active.is_empty()),
                Some(id) => prop_assert_eq!(active, vec![id.get() as usize - 1]),
            }
        }
    }
}
