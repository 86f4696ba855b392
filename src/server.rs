use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use crate::config::Config;
use crate::datos::Malla;
use crate::models::Seleccion;
use crate::server_handlers::*;

/// Estado compartido por los workers: la malla (sólo lectura) y la selección
/// de la sesión, que se descarta al apagar el servidor.
pub struct EstadoApp {
    pub malla: Arc<Malla>,
    pub seleccion: Mutex<Seleccion>,
}

impl EstadoApp {
    pub fn nuevo(malla: Malla) -> Self {
        let seleccion = Seleccion::nueva(&malla);
        EstadoApp {
            malla: Arc::new(malla),
            seleccion: Mutex::new(seleccion),
        }
    }
}

/// Registra todas las rutas de la API. Se usa tanto en `run_server` como en
/// los tests con `actix_web::test`.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    cfg.route("/malla", web::get().to(vista_handler))
        .route("/cursos/{codigo}", web::get().to(curso_handler))
        .route("/cupos/{cupo}/opciones", web::get().to(opciones_cupo_handler))
        .route("/seleccion/curso", web::post().to(seleccionar_curso_handler))
        .route("/seleccion/electiva", web::post().to(asignar_electiva_handler))
        .route("/seleccion/reiniciar", web::post().to(reiniciar_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: Config, malla: Malla) -> std::io::Result<()> {
    let estado = web::Data::new(EstadoApp::nuevo(malla));
    let base_path = config.base_path.clone();
    let cors_origin = config.cors_origin.clone();

    log::info!(
        "servidor en http://{}{}/ ({} materias, {} electivas)",
        config.bind,
        base_path,
        estado.malla.cantidad_materias(),
        estado.malla.cantidad_electivas()
    );

    HttpServer::new(move || {
        let cors = match cors_origin.as_deref() {
            Some(origen) => Cors::default()
                .allowed_origin(origen)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(estado.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .service(web::scope(&base_path).configure(configurar_rutas))
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}
