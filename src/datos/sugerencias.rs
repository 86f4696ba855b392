use strsim::jaro_winkler;

use super::Malla;

const UMBRAL_SIMILITUD: f64 = 0.70;

/// Normaliza nombres para comparar: minúsculas, sólo alfanuméricos y
/// espacios simples.
pub fn normalize_name(s: &str) -> String {
    s.to_lowercase()
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Códigos de materias parecidos a `consulta` (por código o por nombre), de
/// mayor a menor similitud. Sirve para responder a un código desconocido.
pub fn sugerir_codigos(malla: &Malla, consulta: &str, maximo: usize) -> Vec<String> {
    let consulta_codigo = consulta.trim().to_uppercase();
    let consulta_nombre = normalize_name(consulta);

    let mut candidatos: Vec<(f64, &str)> = malla
        .materias()
        .map(|(codigo, materia)| {
            let por_codigo = jaro_winkler(&consulta_codigo, codigo);
            let por_nombre = jaro_winkler(&consulta_nombre, &normalize_name(&materia.nombre));
            (por_codigo.max(por_nombre), codigo)
        })
        .filter(|(similitud, _)| *similitud >= UMBRAL_SIMILITUD)
        .collect();

    candidatos.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    candidatos
        .into_iter()
        .take(maximo)
        .map(|(_, codigo)| codigo.to_string())
        .collect()
}
