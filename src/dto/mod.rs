//! DTOs de la API
//!
//! Requests y responses en JSON (camelCase) de cada recurso.

pub mod alerta_dto;
pub mod colaborador_dto;
pub mod common_dto;
pub mod moto_dto;
