use crate::datos::Malla;
use crate::models::{Dependencias, Electivas, Resaltado};

/// Resaltado "suelto" a partir sólo del código seleccionado.
///
/// Ojo: si alguna electiva tiene al código como previa, marca TODOS los cupos
/// como habilitados, tengan o no esa electiva asignada. Es más amplio que
/// `resaltado_de_pagina`, que es el que se muestra al usuario.
pub fn obtener_cursos_resaltados(malla: &Malla, seleccionado: Option<&str>) -> Resaltado {
    let mut r = Resaltado::default();
    let Some(codigo) = seleccionado.filter(|c| !c.is_empty()) else {
        return r;
    };

    r.resaltados.insert(codigo.to_string());

    if let Some(materia) = malla.materia(codigo) {
        for previa in materia.previas.iter() {
            r.prerequisitos.insert(previa.clone());
            r.resaltados.insert(previa.clone());
        }
    }

    for habilitada in malla.materias_que_requieren(codigo) {
        r.habilitados.insert(habilitada.to_string());
        r.resaltados.insert(habilitada.to_string());
    }

    if !malla.electivas_que_requieren(codigo).is_empty() {
        for cupo in malla.cupos() {
            r.habilitados.insert(cupo.to_string());
            r.resaltados.insert(cupo.to_string());
        }
    }

    r
}

/// Resaltado visible: parte de las dependencias ya resueltas del curso
/// seleccionado y descarta los cupos vacíos de la lista de habilitados.
pub fn resaltado_de_pagina(
    seleccionado: Option<&str>,
    dependencias: &Dependencias,
    electivas: &Electivas,
) -> Resaltado {
    let mut r = Resaltado::default();
    let Some(codigo) = seleccionado.filter(|c| !c.is_empty()) else {
        return r;
    };

    let habilitados = dependencias.habilita.iter().filter(|c| match electivas.get(c.as_str()) {
        Some(asignada) => asignada.is_some(),
        None => true,
    });

    for c in habilitados {
        r.habilitados.insert(c.clone());
        r.resaltados.insert(c.clone());
    }
    for previa in dependencias.prerequisitos.iter() {
        r.prerequisitos.insert(previa.clone());
        r.resaltados.insert(previa.clone());
    }
    r.resaltados.insert(codigo.to_string());

    r
}
