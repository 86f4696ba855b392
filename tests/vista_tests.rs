use mapa_malla::algorithm::{accion_seleccionar, componer_vista};
use mapa_malla::datos::{cargar_malla, Malla};
use mapa_malla::error::MallaError;
use mapa_malla::models::Seleccion;

fn malla() -> Malla {
    cargar_malla(None).expect("malla embebida")
}

#[test]
fn vista_inicial() {
    let malla = malla();
    let seleccion = Seleccion::nueva(&malla);
    let vista = componer_vista(&malla, &seleccion, accion_seleccionar);

    assert_eq!(vista.carrera, "Ingeniería de Datos e IA");
    assert!(vista.curso_seleccionado.is_none());
    assert!(vista.detalle.is_none());
    assert!(vista.dependencias.prerequisitos.is_empty());
    assert!(vista.resaltado.resaltados.is_empty());
    assert_eq!(vista.nodos.len(), 46);
    assert_eq!(vista.aristas.len(), 35);
    assert!(vista.nodos.iter().all(|n| !n.resaltado));

    let cupos: Vec<&str> = vista.cupos.iter().map(|c| c.cupo.as_str()).collect();
    assert_eq!(cupos, vec!["OPT1", "OPT2", "OPT3", "OPT4", "OPT5", "OPT6"]);
    assert!(vista.cupos.iter().all(|c| c.opciones.len() == 12 && c.seleccionada.is_none()));
}

#[test]
fn vista_con_curso_y_electiva() {
    let malla = malla();
    let mut seleccion = Seleccion::nueva(&malla);
    seleccion.asignar_electiva("OPT1", Some("SEM".to_string()));
    seleccion.seleccionar_curso(Some("ARC".to_string()));

    let vista = componer_vista(&malla, &seleccion, accion_seleccionar);
    let detalle = vista.detalle.as_ref().unwrap();
    assert_eq!(detalle.nombre, "Arquitectura de Computadoras");
    assert_eq!(vista.dependencias.habilita, vec!["SOP", "OPT1"]);

    let opt1 = vista.nodos.iter().find(|n| n.id == "OPT1").unwrap();
    assert!(opt1.resaltado);
    assert_eq!(opt1.codigo, "SEM");

    let arista = vista.aristas.iter().find(|a| a.id == "ARC-OPT1").unwrap();
    assert!(arista.resaltada);

    let opt2 = vista.cupos.iter().find(|c| c.cupo == "OPT2").unwrap();
    assert!(!opt2.opciones.iter().find(|o| o.codigo == "SEM").unwrap().disponible);
}

#[test]
fn vista_con_curso_desconocido() {
    let malla = malla();
    let mut seleccion = Seleccion::nueva(&malla);
    seleccion.seleccionar_curso(Some("XYZ".to_string()));
    let vista = componer_vista(&malla, &seleccion, accion_seleccionar);
    assert!(vista.detalle.is_none());
    assert_eq!(vista.resaltado.resaltados.len(), 1);
    assert!(vista.nodos.iter().all(|n| !n.resaltado));
}

#[test]
fn elegir_electiva_valida_disponibilidad() {
    let malla = malla();
    let mut seleccion = Seleccion::nueva(&malla);

    assert!(seleccion.elegir_electiva(&malla, "OPT1", Some("SEM".to_string())).is_ok());
    assert!(matches!(
        seleccion.elegir_electiva(&malla, "OPT2", Some("SEM".to_string())),
        Err(MallaError::ElectivaNoDisponible { .. })
    ));
    assert!(matches!(
        seleccion.elegir_electiva(&malla, "OPT1", Some("PACD".to_string())),
        Err(MallaError::ElectivaNoDisponible { .. })
    ));
    assert!(matches!(
        seleccion.elegir_electiva(&malla, "OPT9", None),
        Err(MallaError::CupoDesconocido(_))
    ));
    assert!(matches!(
        seleccion.elegir_electiva(&malla, "OPT1", Some("NOPE".to_string())),
        Err(MallaError::ElectivaDesconocida(_))
    ));

    // Reasignar la misma electiva a su propio cupo es válido.
    let anterior = seleccion.elegir_electiva(&malla, "OPT1", Some("SEM".to_string())).unwrap();
    assert_eq!(anterior.as_deref(), Some("SEM"));

    let anterior = seleccion.elegir_electiva(&malla, "OPT1", None).unwrap();
    assert_eq!(anterior.as_deref(), Some("SEM"));
    assert_eq!(seleccion.electiva_en("OPT1"), None);
}

#[test]
fn elegir_curso_desconocido() {
    let malla = malla();
    let mut seleccion = Seleccion::nueva(&malla);
    assert!(matches!(
        seleccion.elegir_curso(&malla, Some("XYZ".to_string())),
        Err(MallaError::CursoDesconocido(_))
    ));
    assert!(seleccion.curso_seleccionado.is_none());
    seleccion.elegir_curso(&malla, Some("OPT1".to_string())).unwrap();
    assert_eq!(seleccion.curso_seleccionado.as_deref(), Some("OPT1"));
}
