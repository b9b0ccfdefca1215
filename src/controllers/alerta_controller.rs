use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::controllers::moto_controller::MSG_MOTO_NAO_ENCONTRADA;
use crate::dto::alerta_dto::{AlertaResponse, CreateAlertaRequest, UpdateAlertaRequest};
use crate::dto::common_dto::PagedResponse;
use crate::models::{Alerta, Moto};
use crate::repositories::Repository;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use crate::utils::pagination::{paginate, PageRequest, PaginationParams};

pub const MSG_ALERTA_NAO_ENCONTRADO: &str = "Alerta não encontrado";
pub const MSG_DADOS_INVALIDOS_OU_MOTO: &str = "Dados inválidos ou moto não encontrada";

pub struct AlertaController {
    repository: Arc<dyn Repository<Alerta>>,
    motos: Arc<dyn Repository<Moto>>,
    max_page_size: Option<i32>,
}

impl AlertaController {
    pub fn new(
        repository: Arc<dyn Repository<Alerta>>,
        motos: Arc<dyn Repository<Moto>>,
        max_page_size: Option<i32>,
    ) -> Self {
        Self {
            repository,
            motos,
            max_page_size,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.alertas.clone(),
            state.motos.clone(),
            state.config.max_page_size,
        )
    }

    pub async fn list(&self, params: PaginationParams) -> AppResult<PagedResponse<AlertaResponse>> {
        let request = PageRequest::from_params(&params, self.max_page_size);
        paginate(self.repository.as_ref(), request).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<AlertaResponse> {
        let alerta = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(MSG_ALERTA_NAO_ENCONTRADO))?;

        Ok(alerta.into())
    }

    pub async fn create(&self, request: CreateAlertaRequest) -> AppResult<AlertaResponse> {
        // `motoId` <= 0 ya falla la validación, no hace falta buscarlo
        if request.validate().is_err() || !self.motos.exists(request.moto_id).await? {
            warn!("🚫 Alerta rechazada para moto #{}", request.moto_id);
            return Err(bad_request_error(MSG_DADOS_INVALIDOS_OU_MOTO));
        }

        let alerta = self.repository.create(request.into()).await?;
        info!("🚨 Alerta #{} creada para moto #{}", alerta.id, alerta.moto_id);

        Ok(alerta.into())
    }

    pub async fn update(&self, id: i32, request: UpdateAlertaRequest) -> AppResult<AlertaResponse> {
        if !self.repository.exists(id).await? {
            return Err(not_found_error(MSG_ALERTA_NAO_ENCONTRADO));
        }

        if let Some(moto_id) = request.moto_id {
            if !self.motos.exists(moto_id).await? {
                return Err(bad_request_error(MSG_MOTO_NAO_ENCONTRADA));
            }
        }

        let alerta = self
            .repository
            .update(id, Box::new(move |alerta: &mut Alerta| request.apply_to(alerta)))
            .await?
            .ok_or_else(|| not_found_error(MSG_ALERTA_NAO_ENCONTRADO))?;
        info!("✏️ Alerta #{} actualizada", id);

        Ok(alerta.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error(MSG_ALERTA_NAO_ENCONTRADO));
        }
        info!("🗑️ Alerta #{} eliminada", id);

        Ok(())
    }
}
