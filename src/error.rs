//! Errores del crate.
//!
//! El motor de derivación del grafo no falla: los códigos desconocidos se
//! traducen en `None` o en listas vacías. Los errores aparecen sólo en los
//! bordes: lectura del archivo de datos, configuración y acciones de
//! selección expuestas por la API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MallaError {
    #[error("no se pudo leer el archivo de malla '{ruta}': {fuente}")]
    Io {
        ruta: String,
        #[source]
        fuente: std::io::Error,
    },

    #[error("JSON de malla inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuración inválida: {0}")]
    Config(String),

    #[error("curso desconocido: {0}")]
    CursoDesconocido(String),

    #[error("cupo de optativa desconocido: {0}")]
    CupoDesconocido(String),

    #[error("electiva desconocida: {0}")]
    ElectivaDesconocida(String),

    #[error("la electiva {electiva} no está disponible para {cupo}")]
    ElectivaNoDisponible { cupo: String, electiva: String },
}

pub type Resultado<T> = Result<T, MallaError>;
