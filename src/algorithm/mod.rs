// Módulo de alto nivel: los tres reportes completos (estimaciones,
// disponibilidad y gestión) construidos sobre los submódulos del motor.
pub mod aggregate;
pub mod availability;
pub mod calendar;
pub mod classify;

pub use aggregate::{aggregate, Aggregation};
pub use availability::{filter_availability, PALABRAS_DISPONIBILIDAD};
pub use calendar::{business_days, partition_business_days, WeekIndex};
pub use classify::classify;

use std::collections::BTreeSet;

use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use crate::error::InputError;
use crate::excel::tracking::{COL_COMMENT, COL_ISSUE_SUMMARY, COL_TAG};
use crate::excel::{parse_worklog_range, time_entries_from_sheet};
use crate::models::{AvailabilityRecord, Celda, Hoja, Tabla, TrackingBatch};
use crate::taxonomy::Taxonomy;

/// Valor del selector de autor que significa "sin filtro".
pub const TODOS: &str = "Todos";

pub const COL_CLASIFICACION: &str = "Clasificacion";
pub const COL_SUPERVISADO: &str = "Supervisado";
pub const COL_FINAL_TAG: &str = "final_tag";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Autores presentes en el archivo, antes de aplicar el filtro.
    pub authors: Vec<String>,
    #[serde(flatten)]
    pub aggregation: Aggregation,
}

impl EstimateReport {
    pub fn tabla_diaria(&self) -> Tabla {
        let mut t = Tabla::new(&["Author", "Start Date", "Time Spent (hours)", "Evaluación"]);
        for b in &self.aggregation.daily {
            t.push(vec![
                Celda::texto(b.author.as_str()),
                Celda::Fecha(b.date),
                Celda::Numero(b.hours),
                Celda::texto(b.evaluation.etiqueta_diaria()),
            ]);
        }
        t
    }

    pub fn tabla_semanal(&self) -> Tabla {
        let mut t = Tabla::new(&[
            "Author",
            "Semana Etiqueta",
            "Time Spent (hours)",
            "Días laborales",
            "Horas esperadas",
            "Evaluación Semanal",
        ]);
        for b in &self.aggregation.weekly {
            t.push(vec![
                Celda::texto(b.author.as_str()),
                Celda::texto(b.week_label.as_str()),
                Celda::Numero(b.hours),
                Celda::from(b.business_day_count),
                Celda::Numero(b.expected_hours),
                Celda::texto(b.evaluation.etiqueta_semanal()),
            ]);
        }
        t
    }
}

fn filtro_autor(autor: Option<&str>) -> Option<&str> {
    autor.map(str::trim).filter(|a| !a.is_empty() && *a != TODOS)
}

/// Reporte de estimaciones: el rango sale del nombre del archivo, las horas de la hoja.
pub fn estimate_report(hoja: &Hoja, filename: &str, autor: Option<&str>) -> Result<EstimateReport, InputError> {
    let (start, end) = parse_worklog_range(filename)?;
    let entries = time_entries_from_sheet(hoja)?;
    let dias = business_days(start, end);
    let mut aggregation = aggregate(&entries, &dias);

    info!(
        "estimaciones {} a {}: {} registros, {} días hábiles, {} semanas",
        start,
        end,
        entries.len(),
        dias.len(),
        aggregation.segments.len()
    );

    let authors = aggregation.authors();
    if let Some(a) = filtro_autor(autor) {
        aggregation.retain_author(a);
    }
    Ok(EstimateReport { start, end, authors, aggregation })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityReport {
    /// Autores con al menos un registro de disponibilidad, antes de filtrar.
    pub authors: Vec<String>,
    pub records: Vec<AvailabilityRecord>,
}

impl AvailabilityReport {
    pub fn tabla(&self) -> Tabla {
        let mut t = Tabla::new(&["Author", "Comment", "Time Spent", "Periodo"]);
        for r in &self.records {
            t.push(vec![
                Celda::texto(r.author.as_str()),
                Celda::texto(r.comment.as_str()),
                r.time_spent.clone(),
                Celda::texto(r.period_label.as_str()),
            ]);
        }
        t
    }
}

/// Consulta de disponibilidad sobre lotes ya etiquetados. `autores` vacío = todos.
pub fn availability_report<S: AsRef<str>>(batches: &[TrackingBatch], keywords: &[S], autores: &[String]) -> AvailabilityReport {
    let mut records = filter_availability(batches, keywords);
    let authors: Vec<String> = records
        .iter()
        .map(|r| r.author.as_str())
        .filter(|a| !a.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    if !autores.is_empty() {
        records.retain(|r| autores.contains(&r.author));
    }
    info!("disponibilidad: {} registros de {} autores", records.len(), authors.len());
    AvailabilityReport { authors, records }
}

/// Reporte de gestión: agrega Clasificacion, Supervisado y final_tag a todas
/// las columnas originales y ordena (de forma estable) por Clasificacion.
pub fn management_report(hoja: &Hoja, taxonomy: &Taxonomy) -> Result<Tabla, InputError> {
    let idx = hoja.requerir(&[COL_COMMENT, COL_ISSUE_SUMMARY])?;
    let (i_comment, i_summary) = (idx[0], idx[1]);
    let i_tag = hoja.indice(COL_TAG);
    let ancho = hoja.encabezados.len();

    let mut columnas = hoja.encabezados.clone();
    columnas.extend([COL_CLASIFICACION, COL_SUPERVISADO, COL_FINAL_TAG].map(String::from));
    let mut tabla = Tabla::new(columnas.as_slice());

    let mut filas: Vec<(String, Vec<Celda>)> = Vec::with_capacity(hoja.filas.len());
    let mut ambiguas = 0usize;
    for f in 0..hoja.filas.len() {
        let texto = classify::texto_a_clasificar(hoja.celda(f, i_comment), hoja.celda(f, i_summary));
        let resultado = classify(&texto, taxonomy);
        if resultado.ambiguous {
            ambiguas += 1;
        }

        let mut fila: Vec<Celda> = (0..ancho).map(|c| hoja.celda(f, c).clone()).collect();
        fila[i_comment] = if texto.trim().is_empty() { Celda::Vacia } else { Celda::Texto(texto) };

        let final_tag = match i_tag.map(|i| hoja.celda(f, i)) {
            Some(tag) if !tag.es_vacia() => tag.clone(),
            _ => Celda::texto(resultado.category.as_str()),
        };
        fila.push(Celda::texto(resultado.category.as_str()));
        fila.push(Celda::texto(resultado.supervisado()));
        fila.push(final_tag);
        filas.push((resultado.category, fila));
    }

    filas.sort_by(|a, b| a.0.cmp(&b.0));
    for (_, fila) in filas {
        tabla.push(fila);
    }

    info!("gestión: {} filas clasificadas, {} ambiguas", tabla.len(), ambiguas);
    Ok(tabla)
}
