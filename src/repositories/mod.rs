//! Repositorios
//!
//! Acceso a las colecciones de entidades. Los controladores sólo conocen el
//! trait [`Repository`], así que el almacenamiento en memoria puede
//! reemplazarse por otro backend sin tocar la lógica de los handlers.

pub mod memory_repository;

pub use memory_repository::InMemoryRepository;

use async_trait::async_trait;

use crate::models::Entity;
use crate::utils::errors::AppResult;

/// Cambio a aplicar sobre una entidad existente dentro de la sección crítica
pub type Mutation<E> = Box<dyn FnOnce(&mut E) + Send>;

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Saltar `skip` elementos en orden de inserción y devolver hasta `take`,
    /// junto con el tamaño total de la colección
    async fn find_page(&self, skip: usize, take: usize) -> AppResult<(Vec<E>, usize)>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<E>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Asignar el siguiente id y añadir la entidad al final de la colección
    async fn create(&self, draft: E::Draft) -> AppResult<E>;

    /// Aplicar `mutation` a la entidad con `id`; `None` si no existe
    async fn update(&self, id: i32, mutation: Mutation<E>) -> AppResult<Option<E>>;

    /// Eliminar la entidad; `false` si no existía. El id no se reutiliza.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}
