//! Modelo de Moto
//!
//! Moto estacionada en el pátio. `data_entrada` se fija al crearla y
//! ninguna actualización la modifica.

use chrono::{DateTime, Utc};

use super::Entity;

#[derive(Debug, Clone, PartialEq)]
pub struct Moto {
    pub id: i32,
    pub placa: String,
    pub cor: String,
    /// Texto libre, p.ej. "Pronta" o "Em manutenção"
    pub status: String,
    pub data_entrada: DateTime<Utc>,
    pub tempo_limite: i32,
}

/// Datos para registrar una moto nueva
#[derive(Debug, Clone)]
pub struct NewMoto {
    pub placa: String,
    pub cor: String,
    pub status: String,
    pub tempo_limite: i32,
}

impl Entity for Moto {
    type Draft = NewMoto;

    const RESOURCE: &'static str = "motos";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewMoto) -> Self {
        Self {
            id,
            placa: draft.placa,
            cor: draft.cor,
            status: draft.status,
            data_entrada: Utc::now(),
            tempo_limite: draft.tempo_limite,
        }
    }
}
