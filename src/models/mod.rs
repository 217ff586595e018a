//! Modelos del sistema
//!
//! Este módulo contiene los documentos de las colecciones `student`, `course`
//! y `faculty`, y las formas de resultado de los reportes.

pub mod course;
pub mod faculty;
pub mod report;
pub mod student;

pub use course::Course;
pub use faculty::Faculty;
pub use report::{SequenceReport, StudentAverage, StudentFacultyView, UpdateSummary};
pub use student::{Grade, Student};
