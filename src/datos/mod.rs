//! Módulo `datos`: la malla curricular y su carga.
//!
//! La malla viene compilada dentro del binario (`datafiles/`) y puede
//! reemplazarse al arrancar por un JSON externo con la misma forma.

/// Tabla de materias/electivas e índice de previas: `Malla`
mod malla;

/// Sugerencias por similitud para códigos desconocidos: `sugerir_codigos`
mod sugerencias;

pub use malla::{Malla, Relacion, PREFIJO_CUPO};
pub use sugerencias::{normalize_name, sugerir_codigos};

use std::path::Path;

use crate::error::Resultado;

/// Malla por defecto (Ingeniería de Datos e IA).
pub const MALLA_EMBEBIDA: &str = include_str!("../datafiles/malla_ingenieria_datos.json");

/// Carga la malla desde `ruta` si se indica, o la embebida en caso contrario.
pub fn cargar_malla(ruta: Option<&Path>) -> Resultado<Malla> {
    match ruta {
        Some(p) => {
            log::info!("cargando malla desde {}", p.display());
            Malla::desde_archivo(p)
        }
        None => {
            log::info!("usando malla embebida");
            Malla::desde_json(MALLA_EMBEBIDA)
        }
    }
}
