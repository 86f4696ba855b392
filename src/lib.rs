// Biblioteca raíz del crate `mapa_malla`.
// Expone el motor de derivación del mapa curricular (`algorithm`), la malla
// (`datos`) y el servidor HTTP que sirve sus resultados.
pub mod algorithm;
pub mod config;
pub mod datos;
pub mod error;
pub mod models;
pub mod server;
pub mod server_handlers;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
