// --- Mapa Curricular - Archivo principal ---

use mapa_malla::config::Config;
use mapa_malla::datos::cargar_malla;
use mapa_malla::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let malla = cargar_malla(config.datafile.as_deref())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    log::info!("=== Mapa Curricular: {} ===", malla.carrera());
    run_server(config, malla).await
}
