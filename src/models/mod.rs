//! Modelos del sistema
//!
//! Este módulo contiene las entidades del pátio tal como se guardan en las
//! colecciones: motos, colaboradores y alertas.

pub mod alerta;
pub mod colaborador;
pub mod moto;

pub use alerta::{Alerta, NewAlerta};
pub use colaborador::{Colaborador, NewColaborador};
pub use moto::{Moto, NewMoto};

/// Entidad guardada en una colección con id entero asignado por la misma
pub trait Entity: Clone + Send + Sync + 'static {
    /// Datos de creación, todo menos el id y los campos por defecto
    type Draft: Send + 'static;

    /// Segmento de ruta del recurso (`/{RESOURCE}/{id}`)
    const RESOURCE: &'static str;

    fn id(&self) -> i32;

    fn from_draft(id: i32, draft: Self::Draft) -> Self;
}
