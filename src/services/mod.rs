//! Services module
//!
//! Este módulo contiene las operaciones de reporte y la secuencia que las
//! ejecuta en orden.

pub mod report_sequence;
pub mod report_service;

pub use report_sequence::run_report_sequence;
pub use report_service::ReportService;
