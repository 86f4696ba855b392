use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Deserialize;

use crate::error::{MallaError, Resultado};
use crate::models::{Electiva, Materia};

/// Los códigos de cupo de optativa empiezan con este prefijo (`OPT1`, ...).
pub const PREFIJO_CUPO: &str = "OPT";

/// Forma del archivo de datos. El orden de las claves del JSON es el orden
/// natural de iteración de la malla.
#[derive(Debug, Deserialize)]
struct MallaArchivo {
    #[serde(default)]
    carrera: String,
    #[serde(rename = "semestreColors")]
    colores_semestre: IndexMap<String, String>,
    #[serde(rename = "Materias")]
    materias: IndexMap<String, Materia>,
    #[serde(rename = "Electivas", default)]
    electivas: IndexMap<String, Electiva>,
}

/// Tipo del curso destino de una arista previa -> curso.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relacion {
    Materia,
    Electiva,
}

/// Malla curricular de sólo lectura. Se construye una vez y se pasa por
/// referencia a cada función del motor.
///
/// Además de las tablas guarda un grafo dirigido `previa -> curso` con un
/// nodo por cada código mencionado (incluidas previas colgantes), usado para
/// las búsquedas inversas de "qué habilita este código".
#[derive(Debug, Clone)]
pub struct Malla {
    carrera: String,
    colores_semestre: IndexMap<String, String>,
    materias: IndexMap<String, Materia>,
    electivas: IndexMap<String, Electiva>,
    grafo: DiGraph<String, Relacion>,
    indices: HashMap<String, NodeIndex>,
}

impl Malla {
    pub fn nueva(
        carrera: impl Into<String>,
        colores_semestre: IndexMap<String, String>,
        materias: IndexMap<String, Materia>,
        electivas: IndexMap<String, Electiva>,
    ) -> Self {
        let mut grafo: DiGraph<String, Relacion> = DiGraph::new();
        let mut indices: HashMap<String, NodeIndex> = HashMap::new();

        for (codigo, materia) in materias.iter() {
            agregar_previas(&mut grafo, &mut indices, codigo, &materia.previas, Relacion::Materia);
        }
        for (codigo, electiva) in electivas.iter() {
            agregar_previas(&mut grafo, &mut indices, codigo, &electiva.previas, Relacion::Electiva);
        }

        log::debug!(
            "malla construida: {} materias, {} electivas, {} aristas de previas",
            materias.len(),
            electivas.len(),
            grafo.edge_count()
        );

        Malla {
            carrera: carrera.into(),
            colores_semestre,
            materias,
            electivas,
            grafo,
            indices,
        }
    }

    pub fn desde_json(json: &str) -> Resultado<Self> {
        let archivo: MallaArchivo = serde_json::from_str(json)?;
        Ok(Malla::nueva(
            archivo.carrera,
            archivo.colores_semestre,
            archivo.materias,
            archivo.electivas,
        ))
    }

    pub fn desde_archivo(ruta: &Path) -> Resultado<Self> {
        let contenido = std::fs::read_to_string(ruta).map_err(|fuente| MallaError::Io {
            ruta: ruta.display().to_string(),
            fuente,
        })?;
        Malla::desde_json(&contenido)
    }

    pub fn carrera(&self) -> &str {
        &self.carrera
    }

    pub fn materia(&self, codigo: &str) -> Option<&Materia> {
        self.materias.get(codigo)
    }

    pub fn electiva(&self, codigo: &str) -> Option<&Electiva> {
        self.electivas.get(codigo)
    }

    /// Materias en el orden del archivo.
    pub fn materias(&self) -> impl Iterator<Item = (&str, &Materia)> {
        self.materias.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Electivas en el orden del catálogo.
    pub fn electivas(&self) -> impl Iterator<Item = (&str, &Electiva)> {
        self.electivas.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn cantidad_materias(&self) -> usize {
        self.materias.len()
    }

    pub fn cantidad_electivas(&self) -> usize {
        self.electivas.len()
    }

    pub fn es_cupo(codigo: &str) -> bool {
        codigo.starts_with(PREFIJO_CUPO)
    }

    /// Códigos de los cupos de optativa, en el orden de la malla.
    pub fn cupos(&self) -> impl Iterator<Item = &str> {
        self.materias.keys().map(String::as_str).filter(|c| Malla::es_cupo(c))
    }

    pub fn color_semestre(&self, semestre: u32) -> Option<&str> {
        self.colores_semestre.get(&semestre.to_string()).map(String::as_str)
    }

    /// Materias cuya lista de previas contiene `codigo`, en el orden de la
    /// malla. Un solo salto.
    pub fn materias_que_requieren(&self, codigo: &str) -> Vec<&str> {
        self.dependientes(codigo, Relacion::Materia, &self.materias)
    }

    /// Electivas cuya lista de previas contiene `codigo`, en el orden del
    /// catálogo.
    pub fn electivas_que_requieren(&self, codigo: &str) -> Vec<&str> {
        self.dependientes(codigo, Relacion::Electiva, &self.electivas)
    }

    fn dependientes<'a, T>(
        &'a self,
        codigo: &str,
        relacion: Relacion,
        tabla: &'a IndexMap<String, T>,
    ) -> Vec<&'a str> {
        let Some(&idx) = self.indices.get(codigo) else {
            return Vec::new();
        };

        let mut posiciones: Vec<usize> = self
            .grafo
            .edges_directed(idx, Direction::Outgoing)
            .filter(|e| *e.weight() == relacion)
            .filter_map(|e| tabla.get_index_of(self.grafo[e.target()].as_str()))
            .collect();
        posiciones.sort_unstable();
        posiciones.dedup();

        posiciones
            .into_iter()
            .filter_map(|i| tabla.get_index(i).map(|(k, _)| k.as_str()))
            .collect()
    }
}

fn asegurar_nodo(
    grafo: &mut DiGraph<String, Relacion>,
    indices: &mut HashMap<String, NodeIndex>,
    codigo: &str,
) -> NodeIndex {
    if let Some(&idx) = indices.get(codigo) {
        return idx;
    }
    let idx = grafo.add_node(codigo.to_string());
    indices.insert(codigo.to_string(), idx);
    idx
}

fn agregar_previas(
    grafo: &mut DiGraph<String, Relacion>,
    indices: &mut HashMap<String, NodeIndex>,
    codigo: &str,
    previas: &[String],
    relacion: Relacion,
) {
    let destino = asegurar_nodo(grafo, indices, codigo);
    for previa in previas {
        let origen = asegurar_nodo(grafo, indices, previa);
        let existe = grafo
            .edges_connecting(origen, destino)
            .any(|e| *e.weight() == relacion);
        if !existe {
            grafo.add_edge(origen, destino, relacion);
        }
    }
}
