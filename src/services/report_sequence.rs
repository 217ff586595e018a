//! Secuencia fija de reportes
//!
//! Ejecuta las ocho operaciones en orden; la primera que falle aborta la
//! secuencia. El cierre de la conexión queda a cargo de quien llama.

use chrono::Utc;
use tracing::info;

use crate::config::ReportInputs;
use crate::models::SequenceReport;
use crate::services::report_service::ReportService;
use crate::utils::errors::AppResult;

pub async fn run_report_sequence(
    service: &mut ReportService,
    inputs: &ReportInputs,
) -> AppResult<SequenceReport> {
    let started_at = Utc::now();
    service.connect().await?;

    let index_name = service.create_faculty_index().await?;
    let total_final_marks = service.total_final_marks().await?;
    let courses_assigned = service.assign_courses(&inputs.course_ids).await?;
    let student_courses = service
        .student_courses(&inputs.student_first_name, &inputs.student_last_name)
        .await?;
    let faculty_assigned = service
        .assign_faculty(&inputs.student_first_name, inputs.faculty_id)
        .await?;
    let student_with_faculty = service
        .student_with_faculty(&inputs.student_first_name)
        .await?;
    let averages = service.student_averages().await?;
    let projection = service
        .student_faculty_projection(&inputs.student_first_name)
        .await?;

    let report = SequenceReport {
        index_name,
        total_final_marks,
        courses_assigned,
        student_courses,
        faculty_assigned,
        student_with_faculty,
        averages,
        projection,
        started_at,
        finished_at: Utc::now(),
    };
    info!("✅ Secuencia de reportes completada en {} ms", report.elapsed_ms());

    Ok(report)
}
