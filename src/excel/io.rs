use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader, Xlsx};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::InputError;
use crate::models::{Celda, Hoja};

/// Convierte un `Data` de calamine a `Celda`.
pub fn data_to_celda(d: &Data) -> Celda {
    match d {
        Data::String(s) => {
            let t = s.trim();
            if t.is_empty() { Celda::Vacia } else { Celda::Texto(t.to_string()) }
        }
        Data::Float(f) => Celda::Numero(*f),
        Data::Int(i) => Celda::Numero(*i as f64),
        Data::Bool(b) => Celda::Booleano(*b),
        Data::Empty => Celda::Vacia,
        Data::Error(_) => Celda::Vacia,
        // as_datetime respeta el sistema de fechas del libro (1900 o 1904)
        Data::DateTime(dt) if serial_en_rango(dt.as_f64()) => match dt.as_datetime() {
            Some(fh) => fecha_o_fecha_hora(fh),
            None => Celda::Texto(dt.to_string()),
        },
        Data::DateTime(dt) => Celda::Texto(dt.to_string()),
        Data::DateTimeIso(s) => match parse_fecha_hora_texto(s) {
            Some(fh) => fecha_o_fecha_hora(fh),
            None => Celda::Texto(s.clone()),
        },
        Data::DurationIso(s) => Celda::Texto(s.clone()),
    }
}

fn fecha_o_fecha_hora(fh: NaiveDateTime) -> Celda {
    if fh.time() == NaiveTime::MIN {
        Celda::Fecha(fh.date())
    } else {
        Celda::FechaHora(fh)
    }
}

/// Serial más alto que Excel acepta (9999-12-31).
const SERIAL_MAXIMO: f64 = 2_958_465.0;

fn serial_en_rango(serial: f64) -> bool {
    serial.is_finite() && (0.0..SERIAL_MAXIMO + 1.0).contains(&serial)
}

/// Número plano interpretado como fecha serial de Excel (sistema 1900).
///
/// Sólo para celdas numéricas sin formato de fecha; las celdas con formato
/// de fecha llegan ya convertidas por calamine. Fuera de `[0, 9999-12-31]`
/// devuelve `None`.
pub fn serial_a_fecha_hora(serial: f64) -> Option<NaiveDateTime> {
    if !serial_en_rango(serial) {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let segundos = (serial * 86_400.0).round() as i64;
    base.checked_add_signed(Duration::try_seconds(segundos)?)
}

const FORMATOS_FECHA_HORA: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const FORMATOS_FECHA: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

fn parse_fecha_hora_texto(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for f in FORMATOS_FECHA_HORA {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, f) {
            return Some(dt);
        }
    }
    for f in FORMATOS_FECHA {
        if let Ok(d) = NaiveDate::parse_from_str(s, f) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    // "2025-04-01T09:00:00.000-0300" y similares: tomar sólo la parte de fecha
    s.get(..10)
        .and_then(|p| NaiveDate::parse_from_str(p, "%Y-%m-%d").ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Interpreta una celda como fecha (descarta la hora). `None` si no es fecha.
pub fn celda_a_fecha(c: &Celda) -> Option<NaiveDate> {
    match c {
        Celda::Fecha(d) => Some(*d),
        Celda::FechaHora(dt) => Some(dt.date()),
        Celda::Numero(n) => serial_a_fecha_hora(*n).map(|dt| dt.date()),
        Celda::Texto(s) => parse_fecha_hora_texto(s).map(|dt| dt.date()),
        Celda::Vacia | Celda::Booleano(_) => None,
    }
}

/// Primera fila = encabezados; se omiten filas completamente vacías.
pub fn range_to_hoja(range: &Range<Data>) -> Hoja {
    let mut filas = range.rows();
    let encabezados: Vec<String> = match filas.next() {
        Some(h) => h.iter().map(|c| data_to_celda(c).to_string()).collect(),
        None => return Hoja::default(),
    };

    let mut out = Vec::new();
    for r in filas {
        let fila: Vec<Celda> = r.iter().map(data_to_celda).collect();
        if fila.iter().all(Celda::es_vacia) {
            continue;
        }
        out.push(fila);
    }
    Hoja::new(encabezados, out)
}

/// Lee la primera hoja de un libro en disco.
pub fn read_sheet_from_path<P: AsRef<Path>>(path: P) -> Result<Hoja, InputError> {
    let mut workbook = open_workbook_auto(path.as_ref()).map_err(|e| InputError::Workbook(e.to_string()))?;
    let names = workbook.sheet_names().to_owned();
    let primera = names.first().ok_or(InputError::EmptyWorkbook)?;
    let range = workbook.worksheet_range(primera).map_err(|e| InputError::Workbook(e.to_string()))?;
    Ok(range_to_hoja(&range))
}

/// Lee la primera hoja de un `.xlsx` en memoria (bytes subidos).
pub fn read_sheet_from_buffer(bytes: &[u8]) -> Result<Hoja, InputError> {
    let cur = Cursor::new(bytes);
    let mut workbook: Xlsx<Cursor<&[u8]>> = Xlsx::new(cur).map_err(|e| InputError::Workbook(e.to_string()))?;
    let names = workbook.sheet_names().to_owned();
    let primera = names.first().ok_or(InputError::EmptyWorkbook)?;
    let range = workbook.worksheet_range(primera).map_err(|e| InputError::Workbook(e.to_string()))?;
    Ok(range_to_hoja(&range))
}
