use std::cell::{Cell, RefCell};
use std::rc::Rc;

use template_picker_application::{SelectionListener, SubscriptionId};
use template_picker_domain::TemplateId;

type SharedListener = Rc<dyn Fn(Option<TemplateId>)>;

/// Listener registry shared by the selection store adapters.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, SharedListener)>>,
}

impl Subscribers {
    pub(crate) fn add(&self, listener: SelectionListener) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));
        id
    }

    pub(crate) fn remove(&self, subscription: SubscriptionId) {
        self.listeners
            .borrow_mut()
            .retain(|(id, _)| *id != subscription);
    }

    /// Calls every listener with `selection`. Listeners may re-enter the
    /// registry; they run against a snapshot taken before the first call.
    pub(crate) fn publish(&self, selection: Option<TemplateId>) {
        let snapshot: Vec<SharedListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(selection);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.listeners.borrow().len()
    }
}
