//! Errores del motor de reportes.
//!
//! Todos son recuperables en el punto de llamada: el servidor los traduce a
//! respuestas 4xx/5xx y la CLI los imprime. Ninguno termina el proceso.

use std::path::PathBuf;
use thiserror::Error;

/// Fallos al cargar la taxonomía de clasificaciones.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no se pudo leer la taxonomía '{path}': {source}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON inválido en la taxonomía: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("la taxonomía debe ser un objeto {{categoria: [frases]}}: {0}")]
    Malformed(String),

    #[error("la categoría '{0}' no tiene palabras clave")]
    EmptyCategory(String),

    #[error("la categoría '{0}' contiene una palabra clave vacía")]
    BlankKeyword(String),
}

/// Fallos en los datos de entrada (columnas, fechas, nombres de archivo).
#[derive(Debug, Error)]
pub enum InputError {
    #[error("faltan columnas requeridas: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("el nombre del archivo '{0}' no contiene las fechas esperadas (worklogs_YYYY-MM-DD_YYYY-MM-DD)")]
    FilenameWithoutDates(String),

    #[error("fecha inválida '{value}' en la fila {row}")]
    InvalidDate { row: usize, value: String },

    #[error("valor inválido '{value}' en la columna '{column}', fila {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("solo se permiten hasta {max} archivos (recibidos {received})")]
    TooManyFiles { max: usize, received: usize },

    #[error("no se recibió ningún archivo")]
    NoFiles,

    #[error("el archivo '{archivo}' supera el máximo de {max_bytes} bytes")]
    FileTooLarge { archivo: String, max_bytes: usize },

    #[error("error leyendo la subida: {0}")]
    Upload(String),

    #[error("no se pudo leer el libro Excel: {0}")]
    Workbook(String),

    #[error("el libro no contiene hojas")]
    EmptyWorkbook,
}

/// Error de más alto nivel que devuelven los reportes completos.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("no se pudo generar el archivo Excel: {0}")]
    Export(String),
}

pub type Result<T, E = ReportError> = std::result::Result<T, E>;
