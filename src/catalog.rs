use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::{Item, NewItem};
use crate::store::{ItemStore, StoreError};

/// Item operations over an [`ItemStore`]
///
/// Creation runs read, id assignment, append and write under one lock, so
/// concurrent creates in this process never observe the same maximum id or
/// overwrite each other's additions.
pub struct Catalog {
    store: Arc<dyn ItemStore>,
    write_lock: Mutex<()>,
}

impl Catalog {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<Item>, StoreError> {
        self.store.read_all().await
    }

    pub async fn get(&self, id: u64) -> Result<Option<Item>, StoreError> {
        let items = self.store.read_all().await?;
        Ok(items.into_iter().find(|item| item.id == id))
    }

    pub async fn create(&self, new_item: NewItem) -> Result<Item, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.store.read_all().await?;
        let id = next_id(&items).ok_or(StoreError::IdsExhausted)?;
        let item = Item::from_new(id, new_item);
        items.push(item.clone());
        self.store.write_all(&items).await?;

        tracing::debug!("Assigned id {} to new item", item.id);
        Ok(item)
    }
}

/// One past the largest existing id, or 1 for an empty collection.
/// `None` once the largest id is `u64::MAX`.
fn next_id(items: &[Item]) -> Option<u64> {
    match items.iter().map(|item| item.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
