use log::info;

use crate::error::InputError;
use crate::excel::io::read_sheet_from_buffer;
use crate::excel::nombres::parse_tracking_period;
use crate::models::{Celda, Hoja, TrackingBatch, TrackingRow};

pub const COL_AUTHOR: &str = "Author";
pub const COL_COMMENT: &str = "Comment";
pub const COL_ISSUE_SUMMARY: &str = "Issue Summary";
pub const COL_TAG: &str = "tag";
/// Algunos exports traen "Time Spent" y otros "Time spent".
pub const COL_TIME_SPENT: &str = "Time Spent";
pub const COL_TIME_SPENT_ALT: &str = "Time spent";

/// Máximo de archivos por consulta de disponibilidad.
pub const MAX_ARCHIVOS_TRACKING: usize = 6;

/// Valida la hoja y la etiqueta con `period`.
pub fn tracking_batch_from_sheet(hoja: &Hoja, period: &str) -> Result<TrackingBatch, InputError> {
    let idx = hoja.requerir(&[COL_AUTHOR, COL_COMMENT])?;
    let (i_author, i_comment) = (idx[0], idx[1]);
    let i_time = hoja.indice(COL_TIME_SPENT);
    let i_time_alt = hoja.indice(COL_TIME_SPENT_ALT);

    let rows = (0..hoja.filas.len())
        .map(|f| {
            let principal = i_time.map(|i| hoja.celda(f, i).clone()).unwrap_or(Celda::Vacia);
            let alterna = i_time_alt.map(|i| hoja.celda(f, i).clone()).unwrap_or(Celda::Vacia);
            TrackingRow {
                author: hoja.celda(f, i_author).to_string(),
                comment: hoja.celda(f, i_comment).to_string(),
                time_spent: principal.o_bien(alterna),
            }
        })
        .collect();

    Ok(TrackingBatch { period: period.to_string(), rows })
}

/// Lee y etiqueta varios archivos Tracking subidos (nombre, bytes), en orden.
pub fn read_tracking_batches(files: &[(String, Vec<u8>)], max: usize) -> Result<Vec<TrackingBatch>, InputError> {
    if files.is_empty() {
        return Err(InputError::NoFiles);
    }
    if files.len() > max {
        return Err(InputError::TooManyFiles { max, received: files.len() });
    }

    let mut lotes = Vec::with_capacity(files.len());
    for (nombre, bytes) in files {
        let hoja = read_sheet_from_buffer(bytes)?;
        let periodo = parse_tracking_period(nombre);
        let lote = tracking_batch_from_sheet(&hoja, &periodo)?;
        info!("{}: {} registros, período {}", nombre, lote.rows.len(), periodo);
        lotes.push(lote);
    }
    Ok(lotes)
}
