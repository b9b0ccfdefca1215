//! Controladores
//!
//! Lógica de cada recurso: validación, verificación de claves foráneas y
//! armado de las responses con sus links.

pub mod alerta_controller;
pub mod colaborador_controller;
pub mod moto_controller;

/// Mensaje de validación compartido por los recursos
pub const MSG_DADOS_INVALIDOS: &str = "Dados inválidos";
