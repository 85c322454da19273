//! Filtro de disponibilidad: registros cuyo comentario menciona alguna de
//! las frases clave (coincidencia literal, sin distinguir mayúsculas).

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::models::{AvailabilityRecord, TrackingBatch};

pub const PALABRAS_DISPONIBILIDAD: [&str; 6] = [
    "ruta de aprendizaje",
    "curso",
    "espera de asignaciones",
    "sin asignaciones",
    "disponibilidad",
    "capacitación",
];

/// Alternancia `a|b|c` con cada frase escapada. `None` si no hay frases.
pub fn build_pattern<S: AsRef<str>>(keywords: &[S]) -> Option<Regex> {
    let partes: Vec<String> = keywords
        .iter()
        .map(|k| k.as_ref().trim())
        .filter(|k| !k.is_empty())
        .map(regex::escape)
        .collect();
    if partes.is_empty() {
        return None;
    }
    // las frases vienen escapadas, así que el patrón siempre compila
    RegexBuilder::new(&partes.join("|")).case_insensitive(true).build().ok()
}

pub fn filter_availability<S: AsRef<str>>(batches: &[TrackingBatch], keywords: &[S]) -> Vec<AvailabilityRecord> {
    let patron = match build_pattern(keywords) {
        Some(p) => p,
        None => {
            warn!("filtro de disponibilidad sin frases clave: no se conserva ningún registro");
            return Vec::new();
        }
    };

    let mut out = Vec::new();
    for lote in batches {
        let antes = out.len();
        for fila in &lote.rows {
            if patron.is_match(&fila.comment) {
                out.push(AvailabilityRecord {
                    author: fila.author.clone(),
                    comment: fila.comment.clone(),
                    time_spent: fila.time_spent.clone(),
                    period_label: lote.period.clone(),
                });
            }
        }
        debug!("período {}: {} de {} registros coinciden", lote.period, out.len() - antes, lote.rows.len());
    }
    out
}
