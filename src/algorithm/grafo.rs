use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::datos::Malla;
use crate::models::{AristaCurso, Electivas, GrafoMalla, NodoCurso, Posicion};

pub const ESPACIADO_HORIZONTAL: f64 = 220.0;
pub const ESPACIADO_VERTICAL: f64 = 140.0;
pub const INICIO_X: f64 = 100.0;
pub const INICIO_Y: f64 = 100.0;

pub const COLOR_PREVIA: &str = "#3b82f6";
pub const COLOR_HABILITADA: &str = "#10b981";
pub const COLOR_ARISTA: &str = "#94a3b8";

const GROSOR_ARISTA: u32 = 2;
const GROSOR_ARISTA_RESALTADA: u32 = 3;

/// Construye el mapa completo: nodos posicionados en grilla por semestre y
/// aristas previa -> curso coloreadas según los conjuntos de resaltado.
///
/// `al_hacer_click` recibe el id del nodo (código de la malla) y su resultado
/// se adjunta al nodo.
pub fn construir_grafo_malla<A, F>(
    malla: &Malla,
    electivas: &Electivas,
    al_hacer_click: F,
    resaltados: &BTreeSet<String>,
    prerequisitos: &BTreeSet<String>,
    habilitados: &BTreeSet<String>,
) -> GrafoMalla<A>
where
    F: Fn(&str) -> A,
{
    // Columnas por semestre, en orden ascendente; dentro de cada una se
    // respeta el orden del archivo.
    let mut por_semestre: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
    for (codigo, materia) in malla.materias() {
        por_semestre.entry(materia.semestre).or_default().push(codigo);
    }

    let mut nodos: Vec<NodoCurso<A>> = Vec::with_capacity(malla.cantidad_materias());
    for (semestre, codigos) in por_semestre.iter() {
        let x = INICIO_X + (*semestre as f64 - 1.0) * ESPACIADO_HORIZONTAL;

        for (indice, &codigo) in codigos.iter().enumerate() {
            let Some(materia) = malla.materia(codigo) else { continue };
            let y = INICIO_Y + indice as f64 * ESPACIADO_VERTICAL;

            let mut codigo_mostrado = codigo.to_string();
            let mut nombre_mostrado = materia.nombre.clone();
            let mut es_electiva = false;

            if Malla::es_cupo(codigo) {
                let asignada = electivas.get(codigo).and_then(|e| e.as_deref());
                if let Some((cod, electiva)) = asignada.and_then(|c| malla.electiva(c).map(|e| (c, e))) {
                    codigo_mostrado = cod.to_string();
                    nombre_mostrado = electiva.nombre.clone();
                    es_electiva = true;
                }
            }

            let color_resaltado = if prerequisitos.contains(codigo) {
                Some(COLOR_PREVIA.to_string())
            } else if habilitados.contains(codigo) {
                Some(COLOR_HABILITADA.to_string())
            } else {
                None
            };

            nodos.push(NodoCurso {
                id: codigo.to_string(),
                posicion: Posicion { x, y },
                codigo: codigo_mostrado,
                nombre: nombre_mostrado,
                semestre: materia.semestre,
                creditos: materia.creditos,
                color: malla.color_semestre(materia.semestre).map(str::to_string),
                es_electiva,
                resaltado: resaltados.contains(codigo),
                color_resaltado,
                al_hacer_click: al_hacer_click(codigo),
            });
        }
    }

    let ids: HashSet<&str> = nodos.iter().map(|n| n.id.as_str()).collect();
    let colorear = ColoreadoAristas { resaltados, prerequisitos, habilitados };
    let mut aristas: Vec<AristaCurso> = Vec::new();

    for (destino, materia) in malla.materias() {
        for origen in materia.previas.iter() {
            if ids.contains(origen.as_str()) && ids.contains(destino) {
                aristas.push(colorear.arista(origen, destino));
            }
        }
    }

    // Las previas de una electiva asignada llegan al nodo del cupo.
    for (cupo, asignada) in electivas.iter() {
        let Some(electiva) = asignada.as_deref().and_then(|c| malla.electiva(c)) else { continue };
        for origen in electiva.previas.iter() {
            if ids.contains(origen.as_str()) && ids.contains(cupo.as_str()) {
                aristas.push(colorear.arista(origen, cupo));
            }
        }
    }

    log::debug!("grafo construido: {} nodos, {} aristas", nodos.len(), aristas.len());

    GrafoMalla { nodos, aristas }
}

struct ColoreadoAristas<'a> {
    resaltados: &'a BTreeSet<String>,
    prerequisitos: &'a BTreeSet<String>,
    habilitados: &'a BTreeSet<String>,
}

impl ColoreadoAristas<'_> {
    fn arista(&self, origen: &str, destino: &str) -> AristaCurso {
        let resaltada = self.resaltados.contains(origen) && self.resaltados.contains(destino);

        // Azul gana sobre verde.
        let color = if !resaltada {
            COLOR_ARISTA
        } else if self.prerequisitos.contains(origen) || self.prerequisitos.contains(destino) {
            COLOR_PREVIA
        } else if self.habilitados.contains(destino) {
            COLOR_HABILITADA
        } else {
            COLOR_ARISTA
        };

        AristaCurso {
            id: format!("{}-{}", origen, destino),
            origen: origen.to_string(),
            destino: destino.to_string(),
            color: color.to_string(),
            grosor: if resaltada { GROSOR_ARISTA_RESALTADA } else { GROSOR_ARISTA },
            resaltada,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conjunto(codigos: &[&str]) -> BTreeSet<String> {
        codigos.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn arista_azul_gana_sobre_verde() {
        let resaltados = conjunto(&["A", "B"]);
        let prerequisitos = conjunto(&["A"]);
        let habilitados = conjunto(&["B"]);
        let c = ColoreadoAristas {
            resaltados: &resaltados,
            prerequisitos: &prerequisitos,
            habilitados: &habilitados,
        };
        let a = c.arista("A", "B");
        assert_eq!(a.color, COLOR_PREVIA);
        assert_eq!(a.grosor, 3);
        assert!(a.resaltada);
        assert_eq!(a.id, "A-B");
    }

    #[test]
    fn arista_con_un_solo_extremo_resaltado_queda_gris() {
        let resaltados = conjunto(&["A"]);
        let vacio = BTreeSet::new();
        let prerequisitos = conjunto(&["A"]);
        let c = ColoreadoAristas {
            resaltados: &resaltados,
            prerequisitos: &prerequisitos,
            habilitados: &vacio,
        };
        let a = c.arista("A", "B");
        assert_eq!(a.color, COLOR_ARISTA);
        assert_eq!(a.grosor, 2);
        assert!(!a.resaltada);
    }

    #[test]
    fn arista_resaltada_sin_rol_queda_gris_y_gruesa() {
        let resaltados = conjunto(&["A", "B"]);
        let vacio = BTreeSet::new();
        let c = ColoreadoAristas {
            resaltados: &resaltados,
            prerequisitos: &vacio,
            habilitados: &vacio,
        };
        let a = c.arista("A", "B");
        assert_eq!(a.color, COLOR_ARISTA);
        assert_eq!(a.grosor, 3);
    }
}
