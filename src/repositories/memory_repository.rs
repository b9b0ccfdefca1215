//! Repositorio en memoria
//!
//! Cada colección vive detrás de un único `RwLock` junto con su contador de
//! ids: asignar id + insertar, y buscar + modificar/eliminar, ocurren bajo
//! la misma guarda de escritura.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{Mutation, Repository};
use crate::models::Entity;
use crate::utils::errors::{AppError, AppResult};

struct Collection<E> {
    items: Vec<E>,
    next_id: i32,
}

pub struct InMemoryRepository<E> {
    inner: RwLock<Collection<E>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collection {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn find_page(&self, skip: usize, take: usize) -> AppResult<(Vec<E>, usize)> {
        let collection = self.inner.read().await;
        let page = collection
            .items
            .iter()
            .skip(skip)
            .take(take)
            .cloned()
            .collect();

        Ok((page, collection.items.len()))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<E>> {
        let collection = self.inner.read().await;
        Ok(collection.items.iter().find(|e| e.id() == id).cloned())
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let collection = self.inner.read().await;
        Ok(collection.items.iter().any(|e| e.id() == id))
    }

    async fn create(&self, draft: E::Draft) -> AppResult<E> {
        let mut collection = self.inner.write().await;

        let id = collection.next_id;
        collection.next_id = id.checked_add(1).ok_or_else(|| {
            AppError::Internal(format!("{}: identificadores agotados", E::RESOURCE))
        })?;

        let entity = E::from_draft(id, draft);
        collection.items.push(entity.clone());
        debug!("💾 {} #{} almacenado ({} en total)", E::RESOURCE, id, collection.items.len());

        Ok(entity)
    }

    async fn update(&self, id: i32, mutation: Mutation<E>) -> AppResult<Option<E>> {
        let mut collection = self.inner.write().await;

        let Some(entity) = collection.items.iter_mut().find(|e| e.id() == id) else {
            return Ok(None);
        };
        mutation(&mut *entity);

        Ok(Some(entity.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut collection = self.inner.write().await;

        match collection.items.iter().position(|e| e.id() == id) {
            Some(index) => {
                collection.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
