use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::controllers::MSG_DADOS_INVALIDOS;
use crate::dto::colaborador_dto::{
    ColaboradorResponse, CreateColaboradorRequest, UpdateColaboradorRequest,
};
use crate::dto::common_dto::PagedResponse;
use crate::models::Colaborador;
use crate::repositories::Repository;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use crate::utils::pagination::{paginate, PageRequest, PaginationParams};

pub const MSG_COLABORADOR_NAO_ENCONTRADO: &str = "Colaborador não encontrado";

pub struct ColaboradorController {
    repository: Arc<dyn Repository<Colaborador>>,
    max_page_size: Option<i32>,
}

impl ColaboradorController {
    pub fn new(repository: Arc<dyn Repository<Colaborador>>, max_page_size: Option<i32>) -> Self {
        Self {
            repository,
            max_page_size,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.colaboradores.clone(), state.config.max_page_size)
    }

    pub async fn list(
        &self,
        params: PaginationParams,
    ) -> AppResult<PagedResponse<ColaboradorResponse>> {
        let request = PageRequest::from_params(&params, self.max_page_size);
        paginate(self.repository.as_ref(), request).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ColaboradorResponse> {
        let colaborador = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(MSG_COLABORADOR_NAO_ENCONTRADO))?;

        Ok(colaborador.into())
    }

    pub async fn create(&self, request: CreateColaboradorRequest) -> AppResult<ColaboradorResponse> {
        request
            .validate()
            .map_err(|_| bad_request_error(MSG_DADOS_INVALIDOS))?;

        let colaborador = self.repository.create(request.into()).await?;
        info!("👷 Colaborador #{} registrado", colaborador.id);

        Ok(colaborador.into())
    }

    // Sin validación de contenido: un string vacío reemplaza el valor actual
    pub async fn update(
        &self,
        id: i32,
        request: UpdateColaboradorRequest,
    ) -> AppResult<ColaboradorResponse> {
        let colaborador = self
            .repository
            .update(
                id,
                Box::new(move |colaborador: &mut Colaborador| request.apply_to(colaborador)),
            )
            .await?
            .ok_or_else(|| not_found_error(MSG_COLABORADOR_NAO_ENCONTRADO))?;
        info!("✏️ Colaborador #{} actualizado", id);

        Ok(colaborador.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error(MSG_COLABORADOR_NAO_ENCONTRADO));
        }
        info!("🗑️ Colaborador #{} eliminado", id);

        Ok(())
    }
}
