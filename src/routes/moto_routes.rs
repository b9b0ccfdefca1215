use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};

use crate::controllers::moto_controller::MotoController;
use crate::controllers::MSG_DADOS_INVALIDOS;
use crate::dto::common_dto::PagedResponse;
use crate::dto::moto_dto::{CreateMotoRequest, MotoResponse, UpdateMotoRequest};
use crate::models::{Entity, Moto};
use crate::routes::{created, json_body};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

pub fn create_moto_router() -> Router<AppState> {
    Router::new()
        .route("/motos", get(list_motos).post(create_moto))
        .route(
            "/motos/:id",
            get(get_moto).put(update_moto).delete(delete_moto),
        )
}

async fn list_motos(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<MotoResponse>>, AppError> {
    let controller = MotoController::from_state(&state);
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn get_moto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MotoResponse>, AppError> {
    let controller = MotoController::from_state(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_moto(
    State(state): State<AppState>,
    payload: Result<Json<CreateMotoRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = json_body(payload, MSG_DADOS_INVALIDOS)?;
    let controller = MotoController::from_state(&state);
    let response = controller.create(request).await?;
    Ok(created(Moto::RESOURCE, response.id, response))
}

async fn update_moto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateMotoRequest>, JsonRejection>,
) -> Result<Json<MotoResponse>, AppError> {
    let request = json_body(payload, MSG_DADOS_INVALIDOS)?;
    let controller = MotoController::from_state(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_moto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = MotoController::from_state(&state);
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
