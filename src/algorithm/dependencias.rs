use indexmap::IndexSet;

use crate::datos::Malla;
use crate::models::{DetalleCurso, Dependencias, Electivas};

/// Electiva asignada a `codigo` si es un cupo con asignación conocida en el
/// catálogo.
pub fn electiva_asignada<'a>(malla: &Malla, codigo: &str, electivas: &'a Electivas) -> Option<&'a str> {
    if !Malla::es_cupo(codigo) {
        return None;
    }
    electivas
        .get(codigo)
        .and_then(|e| e.as_deref())
        .filter(|c| malla.electiva(c).is_some())
}

/// Identidad visible de un curso: código, nombre, semestre, créditos y
/// color. Un cupo con electiva asignada toma código y nombre de la electiva
/// y conserva semestre y créditos del cupo.
pub fn obtener_detalle_curso(malla: &Malla, codigo: &str, electivas: &Electivas) -> Option<DetalleCurso> {
    let materia = malla.materia(codigo)?;

    let (codigo_real, nombre) = match electiva_asignada(malla, codigo, electivas)
        .and_then(|c| malla.electiva(c).map(|e| (c, e)))
    {
        Some((c, electiva)) => (c.to_string(), electiva.nombre.clone()),
        None => (codigo.to_string(), materia.nombre.clone()),
    };

    Some(DetalleCurso {
        codigo: codigo_real,
        nombre,
        semestre: materia.semestre,
        creditos: materia.creditos,
        color: malla.color_semestre(materia.semestre).map(str::to_string),
    })
}

/// Previas directas y cursos habilitados (un salto) de `codigo`.
///
/// Para un cupo con electiva asignada, las previas de la electiva se suman a
/// las del cupo y las búsquedas de habilitados consideran ambos códigos. Las
/// electivas que dependen del curso sólo aportan el cupo que las contiene;
/// una electiva sin cupo no aparece.
pub fn obtener_dependencias(malla: &Malla, codigo: &str, electivas: &Electivas) -> Dependencias {
    let mut prerequisitos: IndexSet<String> = IndexSet::new();
    if let Some(materia) = malla.materia(codigo) {
        prerequisitos.extend(materia.previas.iter().cloned());
    } else {
        log::debug!("obtener_dependencias: código desconocido {}", codigo);
    }

    let asignada = electiva_asignada(malla, codigo, electivas);
    if let Some(electiva) = asignada.and_then(|c| malla.electiva(c)) {
        prerequisitos.extend(electiva.previas.iter().cloned());
    }
    let codigo_real = asignada.unwrap_or(codigo);

    let mut habilita: IndexSet<String> = IndexSet::new();

    let mut materias: Vec<&str> = malla.materias_que_requieren(codigo);
    if codigo_real != codigo {
        materias.extend(malla.materias_que_requieren(codigo_real));
        ordenar_como_malla(&mut materias, malla.materias().map(|(c, _)| c));
    }
    habilita.extend(materias.into_iter().map(str::to_string));

    let mut dependientes: Vec<&str> = malla.electivas_que_requieren(codigo);
    if codigo_real != codigo {
        dependientes.extend(malla.electivas_que_requieren(codigo_real));
        ordenar_como_malla(&mut dependientes, malla.electivas().map(|(c, _)| c));
    }
    for electiva in dependientes {
        if let Some(cupo) = cupo_de(electiva, electivas) {
            habilita.insert(cupo.to_string());
        }
    }

    Dependencias {
        prerequisitos: prerequisitos.into_iter().collect(),
        habilita: habilita.into_iter().collect(),
    }
}

/// Primer cupo (en orden de cupos) que tiene asignada `electiva`.
pub fn cupo_de<'a>(electiva: &str, electivas: &'a Electivas) -> Option<&'a str> {
    electivas
        .iter()
        .find(|(_, asignada)| asignada.as_deref() == Some(electiva))
        .map(|(cupo, _)| cupo.as_str())
}

fn ordenar_como_malla<'a>(codigos: &mut Vec<&'a str>, orden: impl Iterator<Item = &'a str>) {
    let presentes: IndexSet<&str> = codigos.drain(..).collect();
    codigos.extend(orden.filter(|c| presentes.contains(c)));
}
