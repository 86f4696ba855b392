//! Configuración por variables de entorno (con soporte de `.env`).
//!
//! - `MALLA_BIND`: dirección del servidor (por defecto `127.0.0.1:8080`)
//! - `MALLA_DATAFILE`: JSON de malla externo (opcional)
//! - `MALLA_BASE_PATH`: prefijo de todas las rutas (por defecto `/`)
//! - `MALLA_CORS_ORIGIN`: origen permitido para el front-end (opcional)

use std::path::PathBuf;

use crate::error::{MallaError, Resultado};

pub const BIND_POR_DEFECTO: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub datafile: Option<PathBuf>,
    /// Prefijo normalizado: `""` para la raíz, o `/algo` sin barra final.
    pub base_path: String,
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Resultado<Self> {
        // Un .env ausente no es un error.
        dotenv::dotenv().ok();
        Config::desde_variables(|clave| std::env::var(clave).ok())
    }

    /// Igual que `from_env` pero leyendo de `leer`; permite probar sin tocar
    /// el entorno del proceso.
    pub fn desde_variables<F>(leer: F) -> Resultado<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let no_vacia = |clave: &str| leer(clave).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind = no_vacia("MALLA_BIND").unwrap_or_else(|| BIND_POR_DEFECTO.to_string());
        validar_bind(&bind)?;

        let base_path = normalizar_base_path(&no_vacia("MALLA_BASE_PATH").unwrap_or_else(|| "/".to_string()))?;

        Ok(Config {
            bind,
            datafile: no_vacia("MALLA_DATAFILE").map(PathBuf::from),
            base_path,
            cors_origin: no_vacia("MALLA_CORS_ORIGIN"),
        })
    }
}

fn validar_bind(bind: &str) -> Resultado<()> {
    let puerto = bind
        .rsplit_once(':')
        .map(|(_, p)| p)
        .ok_or_else(|| MallaError::Config(format!("MALLA_BIND sin puerto: '{}'", bind)))?;
    puerto
        .parse::<u16>()
        .map(|_| ())
        .map_err(|_| MallaError::Config(format!("puerto inválido en MALLA_BIND: '{}'", bind)))
}

fn normalizar_base_path(base: &str) -> Resultado<String> {
    if !base.starts_with('/') {
        return Err(MallaError::Config(format!(
            "MALLA_BASE_PATH debe empezar con '/': '{}'",
            base
        )));
    }
    Ok(base.trim_end_matches('/').to_string())
}
