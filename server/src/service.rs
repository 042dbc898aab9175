//! The todo list operations.
//!
//! `TodoService` owns no state beyond a handle to the store. Create and
//! update read and then write without isolation: concurrent creates can hand
//! out the same order, and a reorder's two writes can interleave with other
//! requests. Nothing here rolls back the first write of a swap if the
//! second one fails.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::store::{MemoryStore, TodoStore};
use crate::types::{CreateTodo, Todo, UpdateTodo};
use crate::validate::validate_value;

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Appends a todo above every existing one.
    pub async fn create(&self, input: CreateTodo) -> Result<Todo, ServiceError> {
        let value = validate_value(input.value.as_deref())?.to_string();

        let order = match self.store.find_max_order().await? {
            Some(top) => top
                .order
                .checked_add(1)
                .ok_or(ServiceError::OrderExhausted(top.order))?,
            None => 1,
        };

        let todo = Todo {
            id: Uuid::new_v4(),
            value,
            order,
            done_at: None,
        };
        self.store.insert(todo.clone()).await?;
        info!(id = %todo.id, order, "created todo");
        Ok(todo)
    }

    pub async fn list(&self) -> Result<Vec<Todo>, ServiceError> {
        Ok(self.store.find_all_sorted().await?)
    }

    /// Applies a partial update. Moving an item onto an order that another
    /// item holds swaps the two; the other item is written first.
    pub async fn update(&self, id: Uuid, input: UpdateTodo) -> Result<(), ServiceError> {
        let mut current = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        let value = match input.value.as_deref() {
            Some(value) if !value.is_empty() => Some(validate_value(Some(value))?.to_string()),
            _ => None,
        };

        if let Some(order) = input.order.filter(|&o| o != 0 && o != current.order) {
            if let Some(mut target) = self.store.find_by_order(order).await? {
                target.order = current.order;
                debug!(id = %target.id, order = target.order, "swapped todo order");
                self.store.save(target).await?;
            }
            current.order = order;
        }

        if let Some(done) = input.done {
            current.done_at = done.then(Utc::now);
        }

        if let Some(value) = value {
            current.value = value;
        }

        let order = current.order;
        self.store.save(current).await?;
        info!(id = %id, order, "updated todo");
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.store.delete(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        info!(id = %id, "deleted todo");
        Ok(())
    }
}
