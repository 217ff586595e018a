//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema de reportes.
//! Todas las operaciones registran el error localmente y lo propagan sin cambios.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Connection error: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("Query error: {0}")]
    Query(#[from] mongodb::error::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] mongodb::bson::de::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl AppError {
    /// Indica si el error proviene de la conexión con la base de datos
    pub fn is_connection(&self) -> bool {
        matches!(self, AppError::Connection(_))
    }

    /// Indica si el error lo produjo la ejecución de una consulta
    pub fn is_query(&self) -> bool {
        matches!(self, AppError::Query(_) | AppError::Decode(_))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de configuración
pub fn configuration_error(setting: &str, reason: &str) -> AppError {
    AppError::Configuration(format!("{}: {}", setting, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_message() {
        let err = configuration_error("MONGODB_DB_NAME", "must be set");
        assert_eq!(
            err.to_string(),
            "Configuration error: MONGODB_DB_NAME: must be set"
        );
        assert!(!err.is_connection());
        assert!(!err.is_query());
    }

    fn driver_error(message: &str) -> mongodb::error::Error {
        std::io::Error::new(std::io::ErrorKind::Other, message.to_string()).into()
    }

    #[test]
    fn test_driver_errors_classify_as_query() {
        let err: AppError = driver_error("boom").into();
        assert!(err.is_query());

        let conn = AppError::Connection(driver_error("refused"));
        assert!(conn.is_connection());
        assert!(conn.to_string().starts_with("Connection error"));
    }
}
