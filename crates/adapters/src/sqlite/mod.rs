mod queries;

use std::fs;
use std::path::PathBuf;

use rusqlite::Connection;
use template_picker_application::{
    ApplicationError, SelectionListener, SelectionStore, SubscriptionId,
};
use template_picker_domain::TemplateId;
use tracing::{error, info, warn};

use crate::listeners::Subscribers;
use crate::migrations::MIGRATIONS;

/// Selection store persisted in a single-row sqlite table.
///
/// Subscribers in this process are notified after each successful write.
pub struct SqliteSelectionStore {
    path: PathBuf,
    subscribers: Subscribers,
}

impl SqliteSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            subscribers: Subscribers::default(),
        }
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    pub fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "selection database path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }

        Ok(())
    }

    pub fn load(&self) -> Result<Option<TemplateId>, ApplicationError> {
        let conn = self.open_connection()?;
        let stored = queries::load_selection(&conn)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        let Some(value) = stored else {
            return Ok(None);
        };

        let id = u32::try_from(value).map_err(|_| {
            ApplicationError::Persistence(format!("stored template id {value} is out of range"))
        })?;
        Ok(Some(TemplateId::new(id)?))
    }

    pub fn save(&self, id: TemplateId) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        queries::save_selection(&conn, i64::from(id.get()))
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl SelectionStore for SqliteSelectionStore {
    fn selected_template(&self) -> Option<TemplateId> {
        match self.load() {
            Ok(selection) => selection,
            Err(error) => {
                warn!(%error, "could not read selected template, treating as unset");
                None
            }
        }
    }

    fn set_selected_template(&self, id: TemplateId) {
        if let Err(error) = self.save(id) {
            error!(%error, template = id.get(), "could not persist selected template");
            return;
        }
        info!(template = id.get(), path = %self.path.display(), "selection persisted");
        self.subscribers.publish(Some(id));
    }

    fn subscribe(&self, listener: SelectionListener) -> SubscriptionId {
        self.subscribers.add(listener)
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.subscribers.remove(subscription);
    }
}
