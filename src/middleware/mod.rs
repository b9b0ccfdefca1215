//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y de trazas HTTP.

pub mod cors;
pub mod trace;

pub use cors::*;
pub use trace::*;
