//! Convenciones de nombres de archivo de los exports.
//!
//! - `worklogs_2025-03-29_2025-04-29.xlsx` (o `worklog_...`) define el rango
//!   de fechas del reporte de estimaciones.
//! - `Tracking_Marzo2025.xlsx` define el período de un lote de disponibilidad.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::InputError;

pub const PERIODO_DESCONOCIDO: &str = "Desconocido";

static RE_WORKLOG: OnceLock<Option<Regex>> = OnceLock::new();
static RE_TRACKING: OnceLock<Option<Regex>> = OnceLock::new();

fn re_worklog() -> Option<&'static Regex> {
    RE_WORKLOG
        .get_or_init(|| Regex::new(r"worklogs?_(\d{4}-\d{2}-\d{2})_(\d{4}-\d{2}-\d{2})").ok())
        .as_ref()
}

fn re_tracking() -> Option<&'static Regex> {
    RE_TRACKING.get_or_init(|| Regex::new(r"Tracking_([A-Za-z]+)(\d{4})").ok()).as_ref()
}

/// Rango (inicio, fin) embebido en el nombre de un export de worklogs.
pub fn parse_worklog_range(filename: &str) -> Result<(NaiveDate, NaiveDate), InputError> {
    let caps = re_worklog()
        .and_then(|re| re.captures(filename))
        .ok_or_else(|| InputError::FilenameWithoutDates(filename.to_string()))?;
    let fecha = |i: usize| {
        let s = &caps[i];
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| InputError::InvalidDate { row: 0, value: s.to_string() })
    };
    Ok((fecha(1)?, fecha(2)?))
}

/// Período legible ("Marzo 2025") de un archivo Tracking, o "Desconocido".
pub fn parse_tracking_period(filename: &str) -> String {
    let base = filename.split('.').next().unwrap_or(filename);
    match re_tracking().and_then(|re| re.captures(base)) {
        Some(caps) => format!("{} {}", capitalizar(&caps[1]), &caps[2]),
        None => PERIODO_DESCONOCIDO.to_string(),
    }
}

fn capitalizar(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(primera) => primera.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
