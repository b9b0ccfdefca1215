//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del servidor leída de variables
//! de entorno.

pub mod environment;

pub use environment::*;
