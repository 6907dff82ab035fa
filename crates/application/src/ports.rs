use template_picker_domain::{ImageResource, TemplateId};

use crate::ApplicationError;

/// Supplies the ordered image list once, when a controller is built.
pub trait CatalogProvider {
    fn images(&self) -> Result<Vec<ImageResource>, ApplicationError>;
}

pub type SelectionListener = Box<dyn Fn(Option<TemplateId>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Application-wide owner of the selected template.
///
/// Writes are fire-and-forget: a store may publish them later, so callers
/// must not expect `selected_template` to reflect a `set_selected_template`
/// issued in the same turn.
pub trait SelectionStore {
    fn selected_template(&self) -> Option<TemplateId>;

    fn set_selected_template(&self, id: TemplateId);

    fn subscribe(&self, listener: SelectionListener) -> SubscriptionId;

    fn unsubscribe(&self, subscription: SubscriptionId);
}
