use log::debug;

use crate::error::InputError;
use crate::excel::io::celda_a_fecha;
use crate::models::{Celda, Hoja, TimeEntry};

pub const COL_ISSUE_KEY: &str = "Issue Key";
pub const COL_TIME_SPENT: &str = "Time Spent";
pub const COL_TIME_SPENT_SECONDS: &str = "Time Spent (seconds)";
pub const COL_AUTHOR: &str = "Author";
pub const COL_START_DATE: &str = "Start Date";
pub const COL_PROJECT_KEY: &str = "Project Key";

/// Columnas que debe traer un export de worklogs.
pub const COLUMNAS_WORKLOG: [&str; 6] = [
    COL_ISSUE_KEY,
    COL_TIME_SPENT,
    COL_TIME_SPENT_SECONDS,
    COL_AUTHOR,
    COL_START_DATE,
    COL_PROJECT_KEY,
];

/// Construye los `TimeEntry` de una hoja de worklogs.
///
/// - Filas sin autor o sin fecha de inicio se omiten.
/// - Segundos vacíos cuentan como 0; negativos o no numéricos son error.
/// - Una fecha que no se puede interpretar es error.
pub fn time_entries_from_sheet(hoja: &Hoja) -> Result<Vec<TimeEntry>, InputError> {
    let idx = hoja.requerir(&COLUMNAS_WORKLOG)?;
    let (i_issue, i_secs, i_author, i_start, i_project) = (idx[0], idx[2], idx[3], idx[4], idx[5]);

    let mut entries = Vec::with_capacity(hoja.filas.len());
    let mut omitidas = 0usize;
    for fila in 0..hoja.filas.len() {
        // fila 1 del libro es el encabezado
        let fila_excel = fila + 2;

        let author = hoja.celda(fila, i_author);
        let start = hoja.celda(fila, i_start);
        if author.es_vacia() || start.es_vacia() {
            omitidas += 1;
            continue;
        }

        let date = celda_a_fecha(start).ok_or_else(|| InputError::InvalidDate {
            row: fila_excel,
            value: start.to_string(),
        })?;
        let seconds_spent = segundos(hoja.celda(fila, i_secs), fila_excel)?;

        entries.push(TimeEntry {
            author: author.to_string(),
            date,
            seconds_spent,
            issue_key: hoja.celda(fila, i_issue).to_string(),
            project_key: hoja.celda(fila, i_project).to_string(),
        });
    }

    if omitidas > 0 {
        debug!("{} filas de worklog sin autor o sin fecha fueron omitidas", omitidas);
    }
    Ok(entries)
}

fn segundos(c: &Celda, fila: usize) -> Result<u64, InputError> {
    let invalido = || InputError::InvalidValue {
        row: fila,
        column: COL_TIME_SPENT_SECONDS.to_string(),
        value: c.to_string(),
    };
    let n = match c {
        Celda::Vacia => return Ok(0),
        Celda::Numero(n) => *n,
        Celda::Texto(s) if s.trim().is_empty() => return Ok(0),
        Celda::Texto(s) => s.trim().parse::<f64>().map_err(|_| invalido())?,
        _ => return Err(invalido()),
    };
    if !n.is_finite() || n < 0.0 {
        return Err(invalido());
    }
    Ok(n.round() as u64)
}
