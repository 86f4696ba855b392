//! Filtro de disponibilidad de electivas por cupo.
//!
//! Una electiva está disponible para un cupo cuando todas sus previas son
//! materias de un semestre estrictamente anterior al del cupo y no está
//! ocupando otro cupo.

use std::collections::HashSet;

use crate::datos::Malla;
use crate::models::{Electiva, Electivas, OpcionElectiva};

/// Opciones de electiva para `cupo`, una por electiva del catálogo, ordenadas
/// por código. Un cupo que no existe en la malla no tiene opciones.
pub fn obtener_opciones_electivas(malla: &Malla, cupo: &str, electivas: &Electivas) -> Vec<OpcionElectiva> {
    let Some(semestre_cupo) = malla.materia(cupo).map(|m| m.semestre) else {
        log::debug!("obtener_opciones_electivas: cupo desconocido {}", cupo);
        return Vec::new();
    };

    // Electivas ocupadas en OTROS cupos; el propio cupo no descalifica.
    let usadas_en_otros: HashSet<&str> = electivas
        .iter()
        .filter(|(otro, _)| otro.as_str() != cupo)
        .filter_map(|(_, asignada)| asignada.as_deref())
        .collect();

    let mut opciones: Vec<OpcionElectiva> = malla
        .electivas()
        .map(|(codigo, electiva)| OpcionElectiva {
            codigo: codigo.to_string(),
            nombre: electiva.nombre.clone(),
            disponible: previas_cumplidas(malla, electiva, semestre_cupo)
                && !usadas_en_otros.contains(codigo),
        })
        .collect();

    opciones.sort_by(|a, b| a.codigo.cmp(&b.codigo));
    opciones
}

/// Toda previa debe estar en un semestre < `semestre_cupo`. Una previa que no
/// es materia cuenta como semestre 0.
pub fn previas_cumplidas(malla: &Malla, electiva: &Electiva, semestre_cupo: u32) -> bool {
    electiva.previas.iter().all(|previa| {
        let semestre_previa = malla.materia(previa).map(|m| m.semestre).unwrap_or(0);
        semestre_previa < semestre_cupo
    })
}

/// Comprueba si `electiva` puede asignarse a `cupo` con la selección actual.
pub fn electiva_disponible(malla: &Malla, cupo: &str, electiva: &str, electivas: &Electivas) -> bool {
    obtener_opciones_electivas(malla, cupo, electivas)
        .iter()
        .any(|o| o.codigo == electiva && o.disponible)
}
