//! Modelo de Alerta
//!
//! Alerta ligada a una moto (p.ej. tiempo límite excedido). `moto_id`
//! tiene que existir en la colección de motos al crear o reasignar.

use chrono::{DateTime, Utc};

use super::Entity;

#[derive(Debug, Clone, PartialEq)]
pub struct Alerta {
    pub id: i32,
    pub descricao: String,
    pub moto_id: i32,
    pub data_alerta: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAlerta {
    pub descricao: String,
    pub moto_id: i32,
}

impl Entity for Alerta {
    type Draft = NewAlerta;

    const RESOURCE: &'static str = "alertas";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewAlerta) -> Self {
        Self {
            id,
            descricao: draft.descricao,
            moto_id: draft.moto_id,
            data_alerta: Utc::now(),
        }
    }
}
