//! Configuración de base de datos
//!
//! Este módulo maneja la dirección de MongoDB y la base de datos a seleccionar.

use mongodb::options::ClientOptions;
use validator::{Validate, ValidationError};

use crate::utils::errors::{configuration_error, AppResult};

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Nombre con el que el cliente se identifica ante el servidor
pub const APP_NAME: &str = "student-reports";

/// Configuración de la base de datos
#[derive(Debug, Clone, Validate)]
pub struct DatabaseConfig {
    #[validate(custom = "validate_mongo_uri")]
    pub uri: String,
    #[validate(length(min = 1))]
    pub db_name: String,
}

impl DatabaseConfig {
    pub fn new(uri: impl Into<String>, db_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            db_name: db_name.into(),
        }
    }

    /// Cargar configuración desde variables de entorno
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Cargar configuración a partir de una función de búsqueda de claves
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let uri = lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string());
        let db_name = lookup("MONGODB_DB_NAME")
            .ok_or_else(|| configuration_error("MONGODB_DB_NAME", "must be set"))?;

        let config = Self::new(uri.trim(), db_name.trim());
        config.validate()?;
        Ok(config)
    }

    /// Opciones del cliente MongoDB derivadas de la URI
    pub async fn client_options(&self) -> mongodb::error::Result<ClientOptions> {
        let mut options = ClientOptions::parse(&self.uri).await?;
        options.app_name = Some(APP_NAME.to_string());
        Ok(options)
    }

    /// URI apta para logs, sin credenciales
    pub fn masked_uri(&self) -> String {
        mask_database_url(&self.uri)
    }
}

fn validate_mongo_uri(uri: &str) -> Result<(), ValidationError> {
    if uri.starts_with("mongodb://") || uri.starts_with("mongodb+srv://") {
        Ok(())
    } else {
        Err(ValidationError::new("mongo_uri_scheme"))
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|pos| pos + 3) else {
        return url.to_string();
    };
    let rest = &url[scheme_end..];
    match rest.rfind('@') {
        Some(at_pos) => format!("{}***:***@{}", &url[..scheme_end], &rest[at_pos + 1..]),
        None => url.to_string(),
    }
}
