//! Módulo `excel`: frontera de ingesta y exportación de libros `.xlsx`.
//!
//! Submódulos:
//! - `io`: lectura de libros (ruta o bytes) a `Hoja`, conversión de celdas y fechas
//! - `nombres`: convenciones de nombres de archivo (rango de worklogs, período Tracking)
//! - `worklogs`: esquema de columnas del export de worklogs -> `TimeEntry`
//! - `tracking`: esquema de archivos Tracking -> `TrackingBatch`
//! - `export`: `Tabla` -> `.xlsx` con columnas auto-ajustadas

/// Helpers de IO y utilidades para parsing de Excel
pub mod io;

/// Rango de fechas y período a partir del nombre del archivo
pub mod nombres;

/// Lectura del export de worklogs
pub mod worklogs;

/// Lectura y fusión de archivos Tracking
pub mod tracking;

/// Escritura de reportes a `.xlsx`
pub mod export;

pub use export::{write_xlsx, write_xlsx_hojas};
pub use io::{read_sheet_from_buffer, read_sheet_from_path};
pub use nombres::{parse_tracking_period, parse_worklog_range, PERIODO_DESCONOCIDO};
pub use tracking::{read_tracking_batches, tracking_batch_from_sheet, MAX_ARCHIVOS_TRACKING};
pub use worklogs::{time_entries_from_sheet, COLUMNAS_WORKLOG};
