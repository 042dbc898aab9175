//! Document store for todos.
//!
//! `TodoStore` is the persistence seam: every method is a single
//! independent round-trip, and nothing groups calls into a transaction.
//! `MemoryStore` keeps documents in a map behind a `RwLock`, holding the lock
//! only for the duration of one call.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::Todo;

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn insert(&self, todo: Todo) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, StoreError>;

    /// First item currently holding `order`.
    async fn find_by_order(&self, order: u32) -> Result<Option<Todo>, StoreError>;

    /// Item with the highest order, if any.
    async fn find_max_order(&self) -> Result<Option<Todo>, StoreError>;

    /// All items, highest order first.
    async fn find_all_sorted(&self) -> Result<Vec<Todo>, StoreError>;

    /// Overwrites the stored item with the same id.
    async fn save(&self, todo: Todo) -> Result<(), StoreError>;

    /// Returns `false` if nothing was stored under `id`.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

type Db = Arc<RwLock<HashMap<Uuid, Todo>>>;

#[derive(Clone, Default)]
pub struct MemoryStore {
    db: Db,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Descending by order. Ties (possible after racing writes) fall back to id
/// so listings stay stable.
fn display_order(a: &Todo, b: &Todo) -> std::cmp::Ordering {
    b.order.cmp(&a.order).then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn insert(&self, todo: Todo) -> Result<(), StoreError> {
        self.db.write().await.insert(todo.id, todo);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        Ok(self.db.read().await.get(&id).cloned())
    }

    async fn find_by_order(&self, order: u32) -> Result<Option<Todo>, StoreError> {
        let todos = self.db.read().await;
        Ok(todos
            .values()
            .filter(|todo| todo.order == order)
            .min_by_key(|todo| todo.id)
            .cloned())
    }

    async fn find_max_order(&self) -> Result<Option<Todo>, StoreError> {
        let todos = self.db.read().await;
        Ok(todos.values().min_by(|a, b| display_order(a, b)).cloned())
    }

    async fn find_all_sorted(&self) -> Result<Vec<Todo>, StoreError> {
        let mut todos: Vec<Todo> = self.db.read().await.values().cloned().collect();
        todos.sort_by(display_order);
        Ok(todos)
    }

    async fn save(&self, todo: Todo) -> Result<(), StoreError> {
        let mut todos = self.db.write().await;
        let slot = todos.get_mut(&todo.id).ok_or(StoreError::Missing(todo.id))?;
        *slot = todo;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.db.write().await.remove(&id).is_some())
    }
}
