//! Construcción de filtros y pipelines de agregación
//!
//! Funciones puras: construyen los documentos que se envían al motor, sin
//! ejecutar nada. La evaluación queda a cargo de MongoDB.

use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

use crate::models::{course, faculty};

/// Campo donde `$lookup` deja los cursos resueltos
pub const COURSE_DETAILS_FIELD: &str = "courseDetails";

/// Campo donde `$lookup` deja la facultad resuelta
pub const FACULTY_FIELD: &str = "faculty";

pub fn faculty_name_index_keys() -> Document {
    let mut keys = Document::new();
    keys.insert(faculty::NAME_FIELD, 1);
    keys
}

/// Suma de `finalMark` sobre toda la colección de cursos
pub fn total_final_marks() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": Bson::Null,
            "sum": { "$sum": "$finalMark" },
        }
    }]
}

pub fn all_documents() -> Document {
    Document::new()
}

pub fn set_courses(course_ids: &[ObjectId]) -> Document {
    doc! { "$set": { "courses": course_ids.to_vec() } }
}

pub fn by_first_name(first_name: &str) -> Document {
    doc! { "firstName": first_name }
}

pub fn set_faculty(faculty_id: ObjectId) -> Document {
    doc! { "$set": { "facultyId": faculty_id } }
}

fn lookup_faculty() -> Document {
    doc! {
        "$lookup": {
            "from": faculty::COLLECTION,
            "localField": "facultyId",
            "foreignField": "_id",
            "as": FACULTY_FIELD,
        }
    }
}

/// Estudiante por nombre completo con sus cursos resueltos
pub fn student_courses(first_name: &str, last_name: &str) -> Vec<Document> {
    vec![
        doc! { "$match": { "firstName": first_name, "lastName": last_name } },
        doc! {
            "$lookup": {
                "from": course::COLLECTION,
                "localField": "courses",
                "foreignField": "_id",
                "as": COURSE_DETAILS_FIELD,
            }
        },
    ]
}

pub fn student_with_faculty(first_name: &str) -> Vec<Document> {
    vec![doc! { "$match": by_first_name(first_name) }, lookup_faculty()]
}

/// Promedio de notas agrupado por nombre
pub fn student_averages() -> Vec<Document> {
    vec![
        doc! { "$unwind": "$grades" },
        doc! {
            "$group": {
                "_id": "$firstName",
                "avg": { "$avg": "$grades.grade" },
            }
        },
    ]
}

/// Vista `{studentName, facultyName}`; `$unwind` descarta estudiantes sin facultad
pub fn student_faculty_projection(first_name: &str) -> Vec<Document> {
    vec![
        doc! { "$match": by_first_name(first_name) },
        lookup_faculty(),
        doc! { "$unwind": format!("${}", FACULTY_FIELD) },
        doc! {
            "$project": {
                "studentName": "$firstName",
                "facultyName": format!("${}.{}", FACULTY_FIELD, faculty::NAME_FIELD),
            }
        },
    ]
}

/// Cursos resueltos por `$lookup`, sin reinterpretar sus campos
pub fn course_details(mut student: Document) -> Vec<Document> {
    match student.remove(COURSE_DETAILS_FIELD) {
        Some(Bson::Array(details)) => details
            .into_iter()
            .filter_map(|detail| match detail {
                Bson::Document(course) => Some(course),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Total del primer documento de un `$group` de suma; 0 si no hay resultados
pub fn sum_from_group(results: &[Document]) -> f64 {
    results
        .first()
        .and_then(|group| group.get("sum"))
        .and_then(bson_as_f64)
        .unwrap_or(0.0)
}

fn bson_as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        _ => None,
    }
}
