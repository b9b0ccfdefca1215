use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};

use crate::controllers::alerta_controller::{AlertaController, MSG_DADOS_INVALIDOS_OU_MOTO};
use crate::controllers::MSG_DADOS_INVALIDOS;
use crate::dto::alerta_dto::{AlertaResponse, CreateAlertaRequest, UpdateAlertaRequest};
use crate::dto::common_dto::PagedResponse;
use crate::models::{Alerta, Entity};
use crate::routes::{created, json_body};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

pub fn create_alerta_router() -> Router<AppState> {
    Router::new()
        .route("/alertas", get(list_alertas).post(create_alerta))
        .route(
            "/alertas/:id",
            get(get_alerta).put(update_alerta).delete(delete_alerta),
        )
}

async fn list_alertas(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<AlertaResponse>>, AppError> {
    let controller = AlertaController::from_state(&state);
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn get_alerta(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AlertaResponse>, AppError> {
    let controller = AlertaController::from_state(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_alerta(
    State(state): State<AppState>,
    payload: Result<Json<CreateAlertaRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = json_body(payload, MSG_DADOS_INVALIDOS_OU_MOTO)?;
    let controller = AlertaController::from_state(&state);
    let response = controller.create(request).await?;
    Ok(created(Alerta::RESOURCE, response.id, response))
}

async fn update_alerta(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateAlertaRequest>, JsonRejection>,
) -> Result<Json<AlertaResponse>, AppError> {
    let request = json_body(payload, MSG_DADOS_INVALIDOS)?;
    let controller = AlertaController::from_state(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_alerta(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = AlertaController::from_state(&state);
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
