use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::server::EstadoApp;

pub async fn help_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    let cupos: Vec<&str> = estado.malla.cupos().collect();

    let help = json!({
        "description": "API del mapa curricular. GET /malla devuelve nodos, aristas, detalle y cupos para la selección actual; las acciones POST la modifican y devuelven la vista recalculada.",
        "carrera": estado.malla.carrera(),
        "routes": [
            "GET /malla",
            "GET /cursos/{codigo}",
            "GET /cupos/{cupo}/opciones",
            "POST /seleccion/curso",
            "POST /seleccion/electiva",
            "POST /seleccion/reiniciar",
            "GET /help"
        ],
        "seleccion_curso_example": { "codigo": "AA1" },
        "seleccion_electiva_example": { "cupo": "OPT1", "codigo": "SEM" },
        "note": "Enviar \"codigo\": null libera el cupo o cierra el detalle del curso.",
        "cupos": cupos
    });

    HttpResponse::Ok().json(help)
}
