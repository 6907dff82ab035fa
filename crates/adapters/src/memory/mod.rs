use std::cell::Cell;

use template_picker_application::{
    ApplicationError, CatalogProvider, SelectionListener, SelectionStore, SubscriptionId,
};
use template_picker_domain::{ImageResource, TemplateId};
use tracing::debug;

use crate::listeners::Subscribers;

/// Catalog provider over a list computed ahead of time.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogProvider {
    images: Vec<ImageResource>,
}

impl StaticCatalogProvider {
    pub fn new(images: Vec<ImageResource>) -> Self {
        Self { images }
    }
}

impl CatalogProvider for StaticCatalogProvider {
    fn images(&self) -> Result<Vec<ImageResource>, ApplicationError> {
        Ok(self.images.clone())
    }
}

/// Process-local selection store that publishes every change immediately.
#[derive(Default)]
pub struct InMemorySelectionStore {
    selected: Cell<Option<TemplateId>>,
    subscribers: Subscribers,
}

impl InMemorySelectionStore {
    pub fn with_selection(selection: Option<TemplateId>) -> Self {
        Self {
            selected: Cell::new(selection),
            subscribers: Subscribers::default(),
        }
    }
}

impl SelectionStore for InMemorySelectionStore {
    fn selected_template(&self) -> Option<TemplateId> {
        self.selected.get()
    }

    fn set_selected_template(&self, id: TemplateId) {
        if self.selected.replace(Some(id)) == Some(id) {
            return;
        }
        debug!(template = id.get(), "selection changed");
        self.subscribers.publish(Some(id));
    }

    fn subscribe(&self, listener: SelectionListener) -> SubscriptionId {
        self.subscribers.add(listener)
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.subscribers.remove(subscription);
    }
}
