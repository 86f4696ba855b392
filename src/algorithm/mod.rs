//! Motor de derivación del mapa curricular.
//!
//! Funciones puras sobre la `Malla` y el estado de selección:
//! - `grafo`: nodos posicionados y aristas coloreadas
//! - `dependencias`: detalle de un curso, previas directas y lo que habilita
//! - `electivas`: opciones disponibles por cupo de optativa
//! - `resaltado`: conjuntos de resaltado (suelto y de página)
//! - `vista`: composición completa para un estado de selección

pub mod dependencias;
pub mod electivas;
pub mod grafo;
pub mod resaltado;
pub mod vista;

pub use dependencias::{cupo_de, electiva_asignada, obtener_dependencias, obtener_detalle_curso};
pub use electivas::{electiva_disponible, obtener_opciones_electivas, previas_cumplidas};
pub use grafo::construir_grafo_malla;
pub use resaltado::{obtener_cursos_resaltados, resaltado_de_pagina};
pub use vista::{accion_seleccionar, componer_vista};
