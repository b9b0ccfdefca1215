//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, links HATEOAS
//! y paginación.

pub mod errors;
pub mod hateoas;
pub mod pagination;
