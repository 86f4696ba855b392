use crate::datos::Malla;
use crate::models::{AccionNodo, CupoElectiva, Dependencias, Seleccion, VistaMalla};

use super::dependencias::{obtener_detalle_curso, obtener_dependencias};
use super::electivas::obtener_opciones_electivas;
use super::grafo::construir_grafo_malla;
use super::resaltado::resaltado_de_pagina;

/// Recalcula desde cero todo lo que muestra el mapa para una selección:
/// dependencias del curso elegido, resaltado, grafo, detalle y opciones de
/// cada cupo. No hay caché ni actualización incremental.
pub fn componer_vista<A, F>(malla: &Malla, seleccion: &Seleccion, al_hacer_click: F) -> VistaMalla<A>
where
    F: Fn(&str) -> A,
{
    let curso = seleccion.curso_seleccionado.as_deref();
    let electivas = &seleccion.electivas;

    let dependencias = match curso {
        Some(codigo) => obtener_dependencias(malla, codigo, electivas),
        None => Dependencias::default(),
    };

    let resaltado = resaltado_de_pagina(curso, &dependencias, electivas);

    let grafo = construir_grafo_malla(
        malla,
        electivas,
        al_hacer_click,
        &resaltado.resaltados,
        &resaltado.prerequisitos,
        &resaltado.habilitados,
    );

    let detalle = curso.and_then(|codigo| obtener_detalle_curso(malla, codigo, electivas));

    let cupos = electivas
        .iter()
        .map(|(cupo, asignada)| CupoElectiva {
            cupo: cupo.clone(),
            opciones: obtener_opciones_electivas(malla, cupo, electivas),
            seleccionada: asignada.clone(),
        })
        .collect();

    VistaMalla {
        carrera: malla.carrera().to_string(),
        curso_seleccionado: seleccion.curso_seleccionado.clone(),
        detalle,
        dependencias,
        resaltado,
        nodos: grafo.nodos,
        aristas: grafo.aristas,
        cupos,
    }
}

/// Acción por defecto de cada nodo: seleccionarlo.
pub fn accion_seleccionar(codigo: &str) -> AccionNodo {
    AccionNodo::SeleccionarCurso { codigo: codigo.to_string() }
}
