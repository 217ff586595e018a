//! Reportes sobre el conjunto estudiante/curso/facultad en MongoDB
//!
//! Crear índice, sumar notas finales, asignar y resolver relaciones, promedios
//! y proyecciones. Toda la evaluación de consultas la hace el motor.

pub mod config;
pub mod database;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use utils::errors::{AppError, AppResult};
