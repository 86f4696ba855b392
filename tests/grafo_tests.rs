use std::collections::{BTreeSet, HashSet};

use mapa_malla::algorithm::grafo::{COLOR_ARISTA, COLOR_HABILITADA, COLOR_PREVIA};
use mapa_malla::algorithm::{accion_seleccionar, construir_grafo_malla};
use mapa_malla::datos::{cargar_malla, Malla};
use mapa_malla::models::{AccionNodo, Electivas, GrafoMalla, Seleccion};

fn malla() -> Malla {
    cargar_malla(None).expect("malla embebida")
}

fn conjunto(codigos: &[&str]) -> BTreeSet<String> {
    codigos.iter().map(|c| c.to_string()).collect()
}

fn grafo_sin_resaltado(malla: &Malla, electivas: &Electivas) -> GrafoMalla<AccionNodo> {
    let vacio = BTreeSet::new();
    construir_grafo_malla(malla, electivas, accion_seleccionar, &vacio, &vacio, &vacio)
}

#[test]
fn construccion_determinista() {
    let malla = malla();
    let mut seleccion = Seleccion::nueva(&malla);
    seleccion.asignar_electiva("OPT2", Some("PACD".to_string()));
    let resaltados = conjunto(&["AA1", "PRE", "AA2"]);
    let prerequisitos = conjunto(&["PRE"]);
    let habilitados = conjunto(&["AA2"]);

    let a = construir_grafo_malla(&malla, &seleccion.electivas, accion_seleccionar, &resaltados, &prerequisitos, &habilitados);
    let b = construir_grafo_malla(&malla, &seleccion.electivas, accion_seleccionar, &resaltados, &prerequisitos, &habilitados);
    assert_eq!(a, b);
}

#[test]
fn sin_aristas_colgantes() {
    let malla = malla();
    let mut seleccion = Seleccion::nueva(&malla);
    // ROB tiene como previa PIS, que no es materia: esa arista se omite.
    seleccion.asignar_electiva("OPT3", Some("ROB".to_string()));
    seleccion.asignar_electiva("OPT1", Some("SEM".to_string()));

    let grafo = grafo_sin_resaltado(&malla, &seleccion.electivas);
    let ids: HashSet<&str> = grafo.nodos.iter().map(|n| n.id.as_str()).collect();
    for arista in grafo.aristas.iter() {
        assert!(ids.contains(arista.origen.as_str()), "origen colgante {}", arista.id);
        assert!(ids.contains(arista.destino.as_str()), "destino colgante {}", arista.id);
    }
    // 35 previas de materias + AA2-OPT3 + ARC-OPT1
    assert_eq!(grafo.aristas.len(), 37);
    assert!(grafo.aristas.iter().any(|a| a.id == "AA2-OPT3"));
    assert!(grafo.aristas.iter().any(|a| a.id == "ARC-OPT1"));
    assert!(!grafo.aristas.iter().any(|a| a.origen == "PIS"));
}

#[test]
fn posiciones_en_grilla_por_semestre() {
    let malla = malla();
    let grafo = grafo_sin_resaltado(&malla, &Seleccion::nueva(&malla).electivas);
    assert_eq!(grafo.nodos.len(), 46);

    let pos = |id: &str| {
        let n = grafo.nodos.iter().find(|n| n.id == id).unwrap();
        (n.posicion.x, n.posicion.y)
    };
    assert_eq!(pos("INT"), (100.0, 100.0));
    assert_eq!(pos("FIS"), (100.0, 240.0));
    assert_eq!(pos("EDA"), (320.0, 100.0));
    assert_eq!(pos("OPT1"), (980.0, 380.0));
    assert_eq!(pos("OPT2"), (1200.0, 100.0));
    assert_eq!(pos("ING8"), (1640.0, 520.0));

    // Nodos ordenados por semestre.
    let semestres: Vec<u32> = grafo.nodos.iter().map(|n| n.semestre).collect();
    let mut ordenados = semestres.clone();
    ordenados.sort();
    assert_eq!(semestres, ordenados);
}

#[test]
fn cupo_muestra_la_electiva_asignada() {
    let malla = malla();
    let mut seleccion = Seleccion::nueva(&malla);
    seleccion.asignar_electiva("OPT1", Some("SEM".to_string()));
    let grafo = grafo_sin_resaltado(&malla, &seleccion.electivas);

    let opt1 = grafo.nodos.iter().find(|n| n.id == "OPT1").unwrap();
    assert_eq!(opt1.codigo, "SEM");
    assert_eq!(opt1.nombre, "Sistemas Embebidos");
    assert!(opt1.es_electiva);
    assert_eq!(opt1.semestre, 5);
    assert_eq!(opt1.creditos, 8);
    assert_eq!(opt1.color.as_deref(), Some("#FFCBB3"));
    assert_eq!(opt1.al_hacer_click, AccionNodo::SeleccionarCurso { codigo: "OPT1".to_string() });

    let opt2 = grafo.nodos.iter().find(|n| n.id == "OPT2").unwrap();
    assert_eq!(opt2.codigo, "OPT2");
    assert_eq!(opt2.nombre, "Optativa II");
    assert!(!opt2.es_electiva);
}

#[test]
fn electiva_desconocida_deja_el_cupo_vacio() {
    let malla = malla();
    let mut seleccion = Seleccion::nueva(&malla);
    seleccion.asignar_electiva("OPT1", Some("NOPE".to_string()));
    let grafo = grafo_sin_resaltado(&malla, &seleccion.electivas);
    let opt1 = grafo.nodos.iter().find(|n| n.id == "OPT1").unwrap();
    assert_eq!(opt1.codigo, "OPT1");
    assert!(!opt1.es_electiva);
    assert_eq!(grafo.aristas.len(), 35);
}

#[test]
fn colores_de_resaltado_en_nodos_y_aristas() {
    let malla = malla();
    let electivas = Seleccion::nueva(&malla).electivas;
    let resaltados = conjunto(&["AA1", "PRE", "AA2"]);
    let prerequisitos = conjunto(&["PRE"]);
    let habilitados = conjunto(&["AA2"]);
    let grafo = construir_grafo_malla(&malla, &electivas, |c: &str| c.len(), &resaltados, &prerequisitos, &habilitados);

    let nodo = |id: &str| grafo.nodos.iter().find(|n| n.id == id).unwrap();
    assert_eq!(nodo("PRE").color_resaltado.as_deref(), Some(COLOR_PREVIA));
    assert_eq!(nodo("AA2").color_resaltado.as_deref(), Some(COLOR_HABILITADA));
    assert_eq!(nodo("AA1").color_resaltado, None);
    assert!(nodo("AA1").resaltado);
    assert!(!nodo("TITD").resaltado);
    assert_eq!(nodo("TITD").al_hacer_click, 4);

    let arista = |id: &str| grafo.aristas.iter().find(|a| a.id == id).unwrap();
    let pre_aa1 = arista("PRE-AA1");
    assert_eq!((pre_aa1.color.as_str(), pre_aa1.grosor), (COLOR_PREVIA, 3));
    let aa1_aa2 = arista("AA1-AA2");
    assert_eq!((aa1_aa2.color.as_str(), aa1_aa2.grosor), (COLOR_HABILITADA, 3));
    let pre_titd = arista("PRE-TITD");
    assert_eq!((pre_titd.color.as_str(), pre_titd.grosor), (COLOR_ARISTA, 2));
    assert!(!pre_titd.resaltada);
}
