use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::common_dto::Links;
use crate::models::{Alerta, Entity, NewAlerta};
use crate::utils::hateoas::generate_links;

// Request para crear alerta ligada a una moto
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAlertaRequest {
    #[validate(length(min = 1))]
    pub descricao: String,
    #[validate(range(min = 1))]
    pub moto_id: i32,
}

impl From<CreateAlertaRequest> for NewAlerta {
    fn from(request: CreateAlertaRequest) -> Self {
        Self {
            descricao: request.descricao,
            moto_id: request.moto_id,
        }
    }
}

// Request para actualizar alerta; un `motoId` nuevo se revalida contra las motos
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlertaRequest {
    pub descricao: Option<String>,
    pub moto_id: Option<i32>,
}

impl UpdateAlertaRequest {
    pub fn apply_to(self, alerta: &mut Alerta) {
        if let Some(descricao) = self.descricao {
            alerta.descricao = descricao;
        }
        if let Some(moto_id) = self.moto_id {
            alerta.moto_id = moto_id;
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertaResponse {
    pub id: i32,
    pub descricao: String,
    pub moto_id: i32,
    pub data_alerta: DateTime<Utc>,
    pub links: Links,
}

impl From<Alerta> for AlertaResponse {
    fn from(alerta: Alerta) -> Self {
        Self {
            links: generate_links(Alerta::RESOURCE, alerta.id),
            id: alerta.id,
            descricao: alerta.descricao,
            moto_id: alerta.moto_id,
            data_alerta: alerta.data_alerta,
        }
    }
}
