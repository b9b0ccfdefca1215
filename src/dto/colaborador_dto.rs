use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::common_dto::Links;
use crate::models::{Colaborador, Entity, NewColaborador};
use crate::utils::hateoas::generate_links;

// Request para crear colaborador
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateColaboradorRequest {
    #[validate(length(min = 1))]
    pub nome: String,
    #[validate(length(min = 1))]
    pub cargo: String,
}

impl From<CreateColaboradorRequest> for NewColaborador {
    fn from(request: CreateColaboradorRequest) -> Self {
        Self {
            nome: request.nome,
            cargo: request.cargo,
        }
    }
}

// Request para actualizar colaborador (sin validación de contenido)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColaboradorRequest {
    pub nome: Option<String>,
    pub cargo: Option<String>,
}

impl UpdateColaboradorRequest {
    pub fn apply_to(self, colaborador: &mut Colaborador) {
        if let Some(nome) = self.nome {
            colaborador.nome = nome;
        }
        if let Some(cargo) = self.cargo {
            colaborador.cargo = cargo;
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColaboradorResponse {
    pub id: i32,
    pub nome: String,
    pub cargo: String,
    pub links: Links,
}

impl From<Colaborador> for ColaboradorResponse {
    fn from(colaborador: Colaborador) -> Self {
        Self {
            links: generate_links(Colaborador::RESOURCE, colaborador.id),
            id: colaborador.id,
            nome: colaborador.nome,
            cargo: colaborador.cargo,
        }
    }
}
