//! Configuración de variables de entorno
//!
//! Este módulo maneja el nivel de logs y los valores de entrada de los reportes
//! (nombres de estudiante e identificadores de cursos y facultad).

use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use tracing::Level;

use crate::utils::errors::{configuration_error, AppResult};

pub const DEFAULT_STUDENT_FIRST_NAME: &str = "Sara";
pub const DEFAULT_STUDENT_LAST_NAME: &str = "Ahmed";
pub const DEFAULT_COURSE_IDS: [&str; 2] = ["6783610dda20d79c21b624d5", "6783610dda20d79c21b624d6"];
pub const DEFAULT_FACULTY_ID: &str = "678360dbda20d79c21b624d4";

/// Valores de entrada de la secuencia de reportes
#[derive(Debug, Clone, PartialEq)]
pub struct ReportInputs {
    pub student_first_name: String,
    pub student_last_name: String,
    pub course_ids: Vec<ObjectId>,
    pub faculty_id: ObjectId,
}

impl ReportInputs {
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let student_first_name = lookup("REPORT_STUDENT_FIRST_NAME")
            .unwrap_or_else(|| DEFAULT_STUDENT_FIRST_NAME.to_string());
        let student_last_name = lookup("REPORT_STUDENT_LAST_NAME")
            .unwrap_or_else(|| DEFAULT_STUDENT_LAST_NAME.to_string());

        let course_ids = match lookup("REPORT_COURSE_IDS") {
            Some(raw) => parse_object_ids("REPORT_COURSE_IDS", raw.split(','))?,
            None => parse_object_ids("REPORT_COURSE_IDS", DEFAULT_COURSE_IDS)?,
        };

        let faculty_id = parse_object_id(
            "REPORT_FACULTY_ID",
            &lookup("REPORT_FACULTY_ID").unwrap_or_else(|| DEFAULT_FACULTY_ID.to_string()),
        )?;

        Ok(Self {
            student_first_name,
            student_last_name,
            course_ids,
            faculty_id,
        })
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub log_level: Level,
    pub inputs: ReportInputs,
}

impl EnvironmentConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => Level::from_str(raw.trim())
                .map_err(|_| configuration_error("LOG_LEVEL", &format!("unknown level '{}'", raw)))?,
            None => Level::INFO,
        };

        Ok(Self {
            log_level,
            inputs: ReportInputs::from_lookup(lookup)?,
        })
    }
}

fn parse_object_id(setting: &str, raw: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw.trim())
        .map_err(|e| configuration_error(setting, &format!("invalid ObjectId '{}': {}", raw.trim(), e)))
}

fn parse_object_ids<'a, I>(setting: &str, raw: I) -> AppResult<Vec<ObjectId>>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .filter(|id| !id.trim().is_empty())
        .map(|id| parse_object_id(setting, id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_sample_dataset() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.inputs.student_first_name, "Sara");
        assert_eq!(config.inputs.student_last_name, "Ahmed");
        assert_eq!(config.inputs.course_ids.len(), 2);
        assert_eq!(config.inputs.course_ids[0].to_hex(), DEFAULT_COURSE_IDS[0]);
        assert_eq!(config.inputs.faculty_id.to_hex(), DEFAULT_FACULTY_ID);
    }

    #[test]
    fn test_overrides_inputs() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "debug"),
            ("REPORT_STUDENT_FIRST_NAME", "Omar"),
            ("REPORT_COURSE_IDS", "6783610dda20d79c21b624d7, "),
        ]))
        .unwrap();
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.inputs.student_first_name, "Omar");
        assert_eq!(config.inputs.course_ids.len(), 1);
        assert_eq!(config.inputs.course_ids[0].to_hex(), "6783610dda20d79c21b624d7");
    }

    #[test]
    fn test_malformed_object_id_is_rejected() {
        let err = ReportInputs::from_lookup(lookup_from(&[("REPORT_FACULTY_ID", "not-an-id")]))
            .unwrap_err();
        assert!(err.to_string().contains("REPORT_FACULTY_ID"));
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let err = EnvironmentConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "loud")])).unwrap_err();
        assert!(err.to_string().contains("LOG_LEVEL"));
    }
}
