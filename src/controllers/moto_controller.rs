use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::controllers::MSG_DADOS_INVALIDOS;
use crate::dto::common_dto::PagedResponse;
use crate::dto::moto_dto::{CreateMotoRequest, MotoResponse, UpdateMotoRequest};
use crate::models::Moto;
use crate::repositories::Repository;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use crate::utils::pagination::{paginate, PageRequest, PaginationParams};

pub const MSG_MOTO_NAO_ENCONTRADA: &str = "Moto não encontrada";

pub struct MotoController {
    repository: Arc<dyn Repository<Moto>>,
    max_page_size: Option<i32>,
}

impl MotoController {
    pub fn new(repository: Arc<dyn Repository<Moto>>, max_page_size: Option<i32>) -> Self {
        Self {
            repository,
            max_page_size,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.motos.clone(), state.config.max_page_size)
    }

    pub async fn list(&self, params: PaginationParams) -> AppResult<PagedResponse<MotoResponse>> {
        let request = PageRequest::from_params(&params, self.max_page_size);
        paginate(self.repository.as_ref(), request).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MotoResponse> {
        let moto = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(MSG_MOTO_NAO_ENCONTRADA))?;

        Ok(moto.into())
    }

    pub async fn create(&self, request: CreateMotoRequest) -> AppResult<MotoResponse> {
        request
            .validate()
            .map_err(|_| bad_request_error(MSG_DADOS_INVALIDOS))?;

        let moto = self.repository.create(request.into()).await?;
        info!("🏍️ Moto #{} registrada (placa {})", moto.id, moto.placa);

        Ok(moto.into())
    }

    pub async fn update(&self, id: i32, request: UpdateMotoRequest) -> AppResult<MotoResponse> {
        let moto = self
            .repository
            .update(id, Box::new(move |moto: &mut Moto| request.apply_to(moto)))
            .await?
            .ok_or_else(|| not_found_error(MSG_MOTO_NAO_ENCONTRADA))?;
        info!("✏️ Moto #{} actualizada", id);

        Ok(moto.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error(MSG_MOTO_NAO_ENCONTRADA));
        }
        info!("🗑️ Moto #{} eliminada", id);

        Ok(())
    }
}
