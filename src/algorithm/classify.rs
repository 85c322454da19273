//! Clasificación de comentarios por palabras clave.

use crate::models::{Celda, ClassificationResult};
use crate::taxonomy::Taxonomy;

/// Categorías cuyo algún término aparece en `comment`, en orden de taxonomía.
pub fn matching_categories<'t>(comment: &str, taxonomy: &'t Taxonomy) -> Vec<&'t str> {
    let comentario = comment.to_lowercase();
    taxonomy
        .categorias()
        .iter()
        .filter(|c| c.palabras.iter().any(|p| comentario.contains(p.as_str())))
        .map(|c| c.nombre.as_str())
        .collect()
}

/// Clasifica un comentario. Con varias coincidencias se elige la primera
/// categoría en orden de declaración y se marca como ambigua.
pub fn classify(comment: &str, taxonomy: &Taxonomy) -> ClassificationResult {
    let coincidencias = matching_categories(comment, taxonomy);
    match coincidencias.first() {
        None => ClassificationResult::unclassified(),
        Some(primera) => ClassificationResult {
            category: primera.to_string(),
            ambiguous: coincidencias.len() > 1,
        },
    }
}

/// Texto a clasificar: el comentario, o el resumen del issue si está en blanco.
pub fn texto_a_clasificar(comment: &Celda, issue_summary: &Celda) -> String {
    if comment.es_vacia() {
        issue_summary.to_string()
    } else {
        comment.to_string()
    }
}
