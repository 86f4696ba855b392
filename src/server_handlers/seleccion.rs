use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::algorithm::{accion_seleccionar, componer_vista};
use crate::models::Seleccion;
use crate::server::EstadoApp;

use super::{estado_bloqueado, respuesta_error};

#[derive(Debug, Deserialize)]
pub struct SeleccionCursoRequest {
    #[serde(default)]
    pub codigo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeleccionElectivaRequest {
    pub cupo: String,
    #[serde(default)]
    pub codigo: Option<String>,
}

/// POST /seleccion/curso
/// `{"codigo": "AA1"}` selecciona, `{"codigo": null}` cierra el detalle.
pub async fn seleccionar_curso_handler(
    estado: web::Data<EstadoApp>,
    body: web::Json<SeleccionCursoRequest>,
) -> impl Responder {
    let payload = body.into_inner();
    let mut seleccion = match estado.seleccion.lock() {
        Ok(s) => s,
        Err(_) => return estado_bloqueado(),
    };

    if let Err(e) = seleccion.elegir_curso(&estado.malla, payload.codigo) {
        return respuesta_error(&e);
    }
    HttpResponse::Ok().json(componer_vista(&estado.malla, &seleccion, accion_seleccionar))
}

/// POST /seleccion/electiva
/// `{"cupo": "OPT1", "codigo": "SEM"}` asigna, `{"cupo": "OPT1", "codigo": null}`
/// libera el cupo.
pub async fn asignar_electiva_handler(
    estado: web::Data<EstadoApp>,
    body: web::Json<SeleccionElectivaRequest>,
) -> impl Responder {
    let payload = body.into_inner();
    let mut seleccion = match estado.seleccion.lock() {
        Ok(s) => s,
        Err(_) => return estado_bloqueado(),
    };

    match seleccion.elegir_electiva(&estado.malla, &payload.cupo, payload.codigo) {
        Ok(anterior) => {
            log::debug!(
                "cupo {}: {:?} -> {:?}",
                payload.cupo,
                anterior,
                seleccion.electiva_en(&payload.cupo)
            );
            HttpResponse::Ok().json(componer_vista(&estado.malla, &seleccion, accion_seleccionar))
        }
        Err(e) => respuesta_error(&e),
    }
}

/// POST /seleccion/reiniciar
/// Vuelve al estado inicial: sin curso seleccionado y cupos vacíos.
pub async fn reiniciar_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    let mut seleccion = match estado.seleccion.lock() {
        Ok(s) => s,
        Err(_) => return estado_bloqueado(),
    };
    *seleccion = Seleccion::nueva(&estado.malla);
    HttpResponse::Ok().json(componer_vista(&estado.malla, &seleccion, accion_seleccionar))
}
