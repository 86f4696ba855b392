use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::{accion_seleccionar, componer_vista, obtener_dependencias, obtener_detalle_curso, obtener_opciones_electivas};
use crate::datos::{sugerir_codigos, Malla};
use crate::server::EstadoApp;

use super::estado_bloqueado;

const MAX_SUGERENCIAS: usize = 3;

/// GET /malla
/// Vista completa (grafo, detalle, dependencias y cupos) para la selección
/// actual. Se recalcula en cada llamada.
pub async fn vista_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    let seleccion = match estado.seleccion.lock() {
        Ok(s) => s,
        Err(_) => return estado_bloqueado(),
    };
    let vista = componer_vista(&estado.malla, &seleccion, accion_seleccionar);
    HttpResponse::Ok().json(vista)
}

/// GET /cursos/{codigo}
/// Detalle y dependencias directas de un curso o cupo. Si el código no
/// existe responde 404 con códigos parecidos.
pub async fn curso_handler(estado: web::Data<EstadoApp>, path: web::Path<String>) -> impl Responder {
    let codigo = path.into_inner();
    let seleccion = match estado.seleccion.lock() {
        Ok(s) => s,
        Err(_) => return estado_bloqueado(),
    };

    match obtener_detalle_curso(&estado.malla, &codigo, &seleccion.electivas) {
        Some(detalle) => {
            let dependencias = obtener_dependencias(&estado.malla, &codigo, &seleccion.electivas);
            HttpResponse::Ok().json(json!({
                "detalle": detalle,
                "dependencias": dependencias
            }))
        }
        None => {
            log::debug!("curso desconocido solicitado: {}", codigo);
            HttpResponse::NotFound().json(json!({
                "error": format!("curso desconocido: {}", codigo),
                "sugerencias": sugerir_codigos(&estado.malla, &codigo, MAX_SUGERENCIAS)
            }))
        }
    }
}

/// GET /cupos/{cupo}/opciones
/// Electivas del catálogo con su disponibilidad para el cupo.
pub async fn opciones_cupo_handler(estado: web::Data<EstadoApp>, path: web::Path<String>) -> impl Responder {
    let cupo = path.into_inner();
    if !Malla::es_cupo(&cupo) || estado.malla.materia(&cupo).is_none() {
        return HttpResponse::NotFound().json(json!({ "error": format!("cupo de optativa desconocido: {}", cupo) }));
    }

    let seleccion = match estado.seleccion.lock() {
        Ok(s) => s,
        Err(_) => return estado_bloqueado(),
    };
    let opciones = obtener_opciones_electivas(&estado.malla, &cupo, &seleccion.electivas);
    HttpResponse::Ok().json(json!({
        "cupo": cupo,
        "seleccionada": seleccion.electiva_en(&cupo),
        "opciones": opciones
    }))
}
