//! Generación de links HATEOAS
//!
//! Cada entidad devuelta por la API lleva `self` (GET), `update` (PUT) y
//! `delete` (DELETE), todos apuntando a `/{resource}/{id}`.

use crate::dto::common_dto::{Link, Links};

/// Generar los tres links de una entidad
pub fn generate_links(resource: &str, id: i32) -> Links {
    let href = resource_path(resource, id);

    Links {
        self_link: link(&href, "self", "GET"),
        update: link(&href, "update", "PUT"),
        delete: link(&href, "delete", "DELETE"),
    }
}

/// Ruta canónica de una entidad; también se usa como `Location` al crear
pub fn resource_path(resource: &str, id: i32) -> String {
    format!("/{}/{}", resource, id)
}

fn link(href: &str, rel: &str, method: &str) -> Link {
    Link {
        href: href.to_string(),
        rel: rel.to_string(),
        method: method.to_string(),
    }
}
