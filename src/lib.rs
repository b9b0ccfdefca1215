//! API del pátio Mottu
//!
//! Expone motos, colaboradores y alertas en memoria con paginación y
//! links HATEOAS. La librería contiene todo el dominio para que el binario
//! y los tests de integración construyan exactamente el mismo router.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Router;
use tower::ServiceBuilder;

use middleware::{cors_middleware, trace_middleware};
use state::AppState;

/// Construir el router completo de la API con sus capas de middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes::create_health_router())
        .merge(routes::moto_routes::create_moto_router())
        .merge(routes::colaborador_routes::create_colaborador_router())
        .merge(routes::alerta_routes::create_alerta_router())
        .layer(
            ServiceBuilder::new()
                .layer(trace_middleware())
                .layer(cors_middleware()),
        )
        .with_state(state)
}
