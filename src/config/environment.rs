//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;

use crate::utils::errors::ConfigError;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    /// Tamaño máximo de página; `None` deja pasar cualquier `pageSize`
    pub max_page_size: Option<i32>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            max_page_size: None,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde el entorno
    ///
    /// | Variable        | Default       |
    /// |-----------------|---------------|
    /// | `ENVIRONMENT`   | `development` |
    /// | `HOST`          | `0.0.0.0`     |
    /// | `PORT`          | `3000`        |
    /// | `LOG_LEVEL`     | `info`        |
    /// | `MAX_PAGE_SIZE` | sin límite    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_page_size = parse_max_page_size(env::var("MAX_PAGE_SIZE").ok().as_deref())?;

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: match env::var("PORT") {
                Ok(raw) => parse_var("PORT", &raw)?,
                Err(_) => defaults.port,
            },
            host: env::var("HOST").unwrap_or(defaults.host),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            max_page_size,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de logging para el subscriber; `info` si el valor no se reconoce
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

/// `MAX_PAGE_SIZE` ausente significa sin límite; si está, tiene que ser positivo
fn parse_max_page_size(raw: Option<&str>) -> Result<Option<i32>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let max = parse_var::<i32>("MAX_PAGE_SIZE", raw)?;
    if max <= 0 {
        return Err(ConfigError::InvalidVar {
            name: "MAX_PAGE_SIZE",
            value: raw.to_string(),
        });
    }

    Ok(Some(max))
}

fn parse_var<T: FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
        name,
        value: raw.to_string(),
    })
}
