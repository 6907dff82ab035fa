use std::rc::Rc;

use template_picker_domain::{Catalog, PreviewState, PreviewTransition, TemplateId};
use tracing::{debug, info, warn};

use crate::{
    render_gallery, ApplicationError, CatalogProvider, GalleryEvent, GalleryView, OverlayView,
    SelectionStore,
};

/// Mediates between the catalog, the shared selection store and the local
/// preview overlay.
pub struct GalleryController {
    catalog: Catalog,
    store: Rc<dyn SelectionStore>,
    preview: PreviewState,
}

impl GalleryController {
    pub fn new(
        provider: &dyn CatalogProvider,
        store: Rc<dyn SelectionStore>,
    ) -> Result<Self, ApplicationError> {
        let catalog = Catalog::new(provider.images()?);
        info!(images = catalog.len(), "gallery catalog loaded");
        Ok(Self {
            catalog,
            store,
            preview: PreviewState::default(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn preview(&self) -> PreviewState {
        self.preview
    }

    pub fn current_selection(&self) -> Option<TemplateId> {
        self.store.selected_template()
    }

    /// Reads the latest published selection and renders the full view.
    pub fn render(&self) -> GalleryView {
        let selection = self.store.selected_template();
        if let Some(id) = selection {
            if self.catalog.index_for(id).is_err() {
                warn!(
                    template = id.get(),
                    images = self.catalog.len(),
                    "selected template is outside the catalog"
                );
            }
        }

        let mut view = render_gallery(&self.catalog, selection);
        view.overlay = self.preview.overlay(&self.catalog).map(OverlayView::from);
        view
    }

    pub fn on_thumbnail_activate(
        &mut self,
        index: usize,
    ) -> Result<PreviewTransition, ApplicationError> {
        let transition = self.preview.open(index, &self.catalog)?;
        debug!(index, ?transition, "preview opened");
        Ok(transition)
    }

    /// Issues the selection command for `index`. Takes `&self`: the preview
    /// overlay is never touched by a selection.
    pub fn on_selector_activate(&self, index: usize) -> Result<TemplateId, ApplicationError> {
        let id = self.catalog.template_id_for(index)?;
        info!(template = id.get(), "template selected");
        self.store.set_selected_template(id);
        Ok(id)
    }

    pub fn on_overlay_dismiss(&mut self) -> PreviewTransition {
        let transition = self.preview.close();
        debug!(?transition, "preview dismissed");
        transition
    }

    /// Selects a template by its 1-based id, as typed by a user.
    pub fn select_template(&self, id: TemplateId) -> Result<TemplateId, ApplicationError> {
        let index = self.catalog.index_for(id)?;
        self.on_selector_activate(index)
    }

    pub fn dispatch(&mut self, event: GalleryEvent) -> Result<(), ApplicationError> {
        match event {
            GalleryEvent::ThumbnailActivated(index) => {
                self.on_thumbnail_activate(index)?;
            }
            GalleryEvent::SelectorActivated(index) => {
                self.on_selector_activate(index)?;
            }
            GalleryEvent::OverlayDismissed => {
                self.on_overlay_dismiss();
            }
        }
        Ok(())
    }
}
