use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::common_dto::Links;
use crate::models::{Entity, Moto, NewMoto};
use crate::utils::hateoas::generate_links;

// Request para registrar una moto en el pátio
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateMotoRequest {
    #[validate(length(min = 1))]
    pub placa: String,
    #[validate(length(min = 1))]
    pub cor: String,
    #[validate(length(min = 1))]
    pub status: String,
    pub tempo_limite: i32,
}

impl From<CreateMotoRequest> for NewMoto {
    fn from(request: CreateMotoRequest) -> Self {
        Self {
            placa: request.placa,
            cor: request.cor,
            status: request.status,
            tempo_limite: request.tempo_limite,
        }
    }
}

// Request para actualizar una moto; los campos ausentes no se tocan
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMotoRequest {
    pub placa: Option<String>,
    pub cor: Option<String>,
    pub status: Option<String>,
    pub tempo_limite: Option<i32>,
}

impl UpdateMotoRequest {
    pub fn apply_to(self, moto: &mut Moto) {
        if let Some(placa) = self.placa {
            moto.placa = placa;
        }
        if let Some(cor) = self.cor {
            moto.cor = cor;
        }
        if let Some(status) = self.status {
            moto.status = status;
        }
        if let Some(tempo_limite) = self.tempo_limite {
            moto.tempo_limite = tempo_limite;
        }
    }
}

// Response de moto con links HATEOAS
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotoResponse {
    pub id: i32,
    pub placa: String,
    pub cor: String,
    pub status: String,
    pub data_entrada: DateTime<Utc>,
    pub tempo_limite: i32,
    pub links: Links,
}

impl From<Moto> for MotoResponse {
    fn from(moto: Moto) -> Self {
        Self {
            links: generate_links(Moto::RESOURCE, moto.id),
            id: moto.id,
            placa: moto.placa,
            cor: moto.cor,
            status: moto.status,
            data_entrada: moto.data_entrada,
            tempo_limite: moto.tempo_limite,
        }
    }
}
