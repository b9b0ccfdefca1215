//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::models::{Alerta, Colaborador, Moto};
use crate::repositories::{InMemoryRepository, Repository};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub motos: Arc<dyn Repository<Moto>>,
    pub colaboradores: Arc<dyn Repository<Colaborador>>,
    pub alertas: Arc<dyn Repository<Alerta>>,
}

impl AppState {
    /// Estado con las tres colecciones en memoria, vacías
    pub fn new(config: EnvironmentConfig) -> Self {
        Self::with_repositories(
            config,
            Arc::new(InMemoryRepository::<Moto>::new()),
            Arc::new(InMemoryRepository::<Colaborador>::new()),
            Arc::new(InMemoryRepository::<Alerta>::new()),
        )
    }

    pub fn with_repositories(
        config: EnvironmentConfig,
        motos: Arc<dyn Repository<Moto>>,
        colaboradores: Arc<dyn Repository<Colaborador>>,
        alertas: Arc<dyn Repository<Alerta>>,
    ) -> Self {
        Self {
            config,
            motos,
            colaboradores,
            alertas,
        }
    }
}
