//! Repositorios
//!
//! Acceso a las colecciones `student`, `course` y `faculty`. Cada método envía
//! una única consulta o agregación al motor.

pub mod course_repository;
pub mod faculty_repository;
pub mod pipelines;
pub mod student_repository;

pub use course_repository::CourseRepository;
pub use faculty_repository::FacultyRepository;
pub use student_repository::StudentRepository;
