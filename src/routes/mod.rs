pub mod alerta_routes;
pub mod colaborador_routes;
pub mod health_routes;
pub mod moto_routes;

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::utils::errors::{bad_request_error, AppResult};
use crate::utils::hateoas::resource_path;

/// `201 Created` con `Location` apuntando a la entidad nueva
pub fn created<T: Serialize>(resource: &str, id: i32, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, resource_path(resource, id))],
        Json(body),
    )
        .into_response()
}

/// Cuerpo JSON ya deserializado; un cuerpo rechazado (JSON mal formado,
/// `null` en un campo obligatorio, tipo equivocado) responde 400 con `message`
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>, message: &str) -> AppResult<T> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!("⚠️ Cuerpo JSON rechazado: {}", rejection.body_text());
        bad_request_error(message)
    })
}
