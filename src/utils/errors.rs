//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.
//!
//! Los clientes existentes esperan el cuerpo del error como un string JSON
//! con el mensaje literal en portugués (`"Moto não encontrada"`), así que
//! la respuesta no se envuelve en un objeto.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::NotFound(msg) => {
                warn!("🔍 Recurso no encontrado: {}", msg);
                msg
            }
            AppError::BadRequest(msg) => {
                warn!("⚠️ Solicitud inválida: {}", msg);
                msg
            }
            AppError::Internal(msg) => {
                error!("❌ Error interno: {}", msg);
                "Erro interno do servidor".to_string()
            }
        };

        (status, Json(message)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Errores de configuración al arrancar el servidor
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
