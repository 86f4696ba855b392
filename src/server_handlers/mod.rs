pub mod malla;
pub mod seleccion;
pub mod docs;

pub use malla::*;
pub use seleccion::*;
pub use docs::*;

use actix_web::HttpResponse;
use serde_json::json;

use crate::error::MallaError;

/// Traduce un error de la API a su respuesta JSON `{"error": ...}`.
pub fn respuesta_error(e: &MallaError) -> HttpResponse {
    let cuerpo = json!({ "error": e.to_string() });
    match e {
        MallaError::CursoDesconocido(_)
        | MallaError::CupoDesconocido(_)
        | MallaError::ElectivaDesconocida(_) => HttpResponse::NotFound().json(cuerpo),
        MallaError::ElectivaNoDisponible { .. } => HttpResponse::Conflict().json(cuerpo),
        MallaError::Json(_) | MallaError::Config(_) => HttpResponse::BadRequest().json(cuerpo),
        MallaError::Io { .. } => HttpResponse::InternalServerError().json(cuerpo),
    }
}

pub(crate) fn estado_bloqueado() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": "estado de selección inaccesible" }))
}
