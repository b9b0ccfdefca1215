use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};

use crate::controllers::colaborador_controller::ColaboradorController;
use crate::controllers::MSG_DADOS_INVALIDOS;
use crate::dto::colaborador_dto::{
    ColaboradorResponse, CreateColaboradorRequest, UpdateColaboradorRequest,
};
use crate::dto::common_dto::PagedResponse;
use crate::models::{Colaborador, Entity};
use crate::routes::{created, json_body};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

pub fn create_colaborador_router() -> Router<AppState> {
    Router::new()
        .route(
            "/colaboradores",
            get(list_colaboradores).post(create_colaborador),
        )
        .route(
            "/colaboradores/:id",
            get(get_colaborador)
                .put(update_colaborador)
                .delete(delete_colaborador),
        )
}

async fn list_colaboradores(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PagedResponse<ColaboradorResponse>>, AppError> {
    let controller = ColaboradorController::from_state(&state);
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn get_colaborador(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ColaboradorResponse>, AppError> {
    let controller = ColaboradorController::from_state(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_colaborador(
    State(state): State<AppState>,
    payload: Result<Json<CreateColaboradorRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = json_body(payload, MSG_DADOS_INVALIDOS)?;
    let controller = ColaboradorController::from_state(&state);
    let response = controller.create(request).await?;
    Ok(created(Colaborador::RESOURCE, response.id, response))
}

async fn update_colaborador(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateColaboradorRequest>, JsonRejection>,
) -> Result<Json<ColaboradorResponse>, AppError> {
    let request = json_body(payload, MSG_DADOS_INVALIDOS)?;
    let controller = ColaboradorController::from_state(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_colaborador(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = ColaboradorController::from_state(&state);
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
