// Estructuras de datos principales

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::datos::Malla;
use crate::error::{MallaError, Resultado};

/// Asignación cupo de optativa -> electiva elegida (o ninguna), en el orden
/// de los cupos dentro de la malla.
pub type Electivas = IndexMap<String, Option<String>>;

/// Materia obligatoria de la malla. Los nombres de campo serializados
/// coinciden con el formato del archivo de datos (`name`, `creditos`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Materia {
    #[serde(rename = "name")]
    pub nombre: String,
    pub creditos: u32,
    pub semestre: u32,
    #[serde(default)]
    pub previas: Vec<String>,
}

/// Electiva del catálogo. Sin semestre ni créditos propios: los hereda del
/// cupo en que se muestra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Electiva {
    #[serde(rename = "name")]
    pub nombre: String,
    #[serde(default)]
    pub previas: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Posicion {
    pub x: f64,
    pub y: f64,
}

/// Acción que el cliente dispara al hacer click sobre un nodo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tipo", rename_all = "snake_case")]
pub enum AccionNodo {
    SeleccionarCurso { codigo: String },
}

/// Nodo posicionado del mapa. `id` es siempre el código de la malla (también
/// para los cupos), mientras que `codigo`/`nombre` son los que se muestran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodoCurso<A> {
    pub id: String,
    pub posicion: Posicion,
    pub codigo: String,
    pub nombre: String,
    pub semestre: u32,
    pub creditos: u32,
    pub color: Option<String>,
    pub es_electiva: bool,
    pub resaltado: bool,
    pub color_resaltado: Option<String>,
    pub al_hacer_click: A,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AristaCurso {
    pub id: String,
    pub origen: String,
    pub destino: String,
    pub color: String,
    pub grosor: u32,
    pub resaltada: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrafoMalla<A> {
    pub nodos: Vec<NodoCurso<A>>,
    pub aristas: Vec<AristaCurso>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetalleCurso {
    pub codigo: String,
    pub nombre: String,
    pub semestre: u32,
    pub creditos: u32,
    pub color: Option<String>,
}

/// Previas directas y materias/cupos que habilita un curso (un solo salto).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dependencias {
    pub prerequisitos: Vec<String>,
    pub habilita: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpcionElectiva {
    pub codigo: String,
    pub nombre: String,
    pub disponible: bool,
}

/// Conjuntos de códigos que guían el coloreado de nodos y aristas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resaltado {
    pub resaltados: BTreeSet<String>,
    pub prerequisitos: BTreeSet<String>,
    pub habilitados: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CupoElectiva {
    pub cupo: String,
    pub opciones: Vec<OpcionElectiva>,
    pub seleccionada: Option<String>,
}

/// Todo lo que necesita el cliente para dibujar el mapa en un estado dado.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VistaMalla<A> {
    pub carrera: String,
    pub curso_seleccionado: Option<String>,
    pub detalle: Option<DetalleCurso>,
    pub dependencias: Dependencias,
    pub resaltado: Resaltado,
    pub nodos: Vec<NodoCurso<A>>,
    pub aristas: Vec<AristaCurso>,
    pub cupos: Vec<CupoElectiva>,
}

/// Estado de selección de una sesión: curso elegido y electiva por cupo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seleccion {
    pub curso_seleccionado: Option<String>,
    pub electivas: Electivas,
}

impl Seleccion {
    /// Estado inicial: todos los cupos de la malla vacíos y ningún curso
    /// seleccionado.
    pub fn nueva(malla: &Malla) -> Self {
        Seleccion {
            curso_seleccionado: None,
            electivas: malla.cupos().map(|cupo| (cupo.to_string(), None)).collect(),
        }
    }

    pub fn seleccionar_curso(&mut self, codigo: Option<String>) {
        self.curso_seleccionado = codigo;
    }

    /// Asignación directa, sin comprobar disponibilidad. Devuelve la
    /// electiva que ocupaba el cupo.
    pub fn asignar_electiva(&mut self, cupo: &str, electiva: Option<String>) -> Option<String> {
        self.electivas.insert(cupo.to_string(), electiva).flatten()
    }

    pub fn electiva_en(&self, cupo: &str) -> Option<&str> {
        self.electivas.get(cupo).and_then(|e| e.as_deref())
    }

    /// Selección de curso desde la API: el código debe existir en la malla.
    pub fn elegir_curso(&mut self, malla: &Malla, codigo: Option<String>) -> Resultado<()> {
        if let Some(c) = codigo.as_deref() {
            if malla.materia(c).is_none() {
                return Err(MallaError::CursoDesconocido(c.to_string()));
            }
        }
        self.seleccionar_curso(codigo);
        Ok(())
    }

    /// Asignación desde la API: sólo acepta electivas disponibles para el
    /// cupo, igual que las opciones habilitadas de la barra de optativas.
    pub fn elegir_electiva(
        &mut self,
        malla: &Malla,
        cupo: &str,
        electiva: Option<String>,
    ) -> Resultado<Option<String>> {
        if !self.electivas.contains_key(cupo) {
            return Err(MallaError::CupoDesconocido(cupo.to_string()));
        }
        if let Some(e) = electiva.as_deref() {
            if malla.electiva(e).is_none() {
                return Err(MallaError::ElectivaDesconocida(e.to_string()));
            }
            if !crate::algorithm::electiva_disponible(malla, cupo, e, &self.electivas) {
                return Err(MallaError::ElectivaNoDisponible {
                    cupo: cupo.to_string(),
                    electiva: e.to_string(),
                });
            }
        }
        Ok(self.asignar_electiva(cupo, electiva))
    }
}
