//! Middleware de CORS
//!
//! La API es pública: cualquier origen, método y cabecera.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS abierto
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::permissive()
}
