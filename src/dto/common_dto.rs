use serde::{Deserialize, Serialize};

/// Link HATEOAS: acción que el cliente puede ejecutar sobre el recurso
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    pub method: String,
}

/// Los tres links que acompañan a cada entidad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub update: Link,
    pub delete: Link,
}

// Respuesta paginada para listas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    /// Tamaño de la colección completa, no de la página devuelta
    pub total_count: usize,
    pub page: i32,
    pub page_size: i32,
}
