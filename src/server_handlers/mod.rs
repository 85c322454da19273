pub mod upload;
pub mod estimaciones;
pub mod disponibilidad;
pub mod gestion;
pub mod docs;

pub use estimaciones::*;
pub use disponibilidad::*;
pub use gestion::*;
pub use docs::*;

use actix_web::HttpResponse;
use serde::Deserialize;
use serde_json::json;

use crate::error::ReportError;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Formato de respuesta pedido en `?formato=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formato {
    #[default]
    Json,
    Xlsx,
}

/// Traduce un error del motor a una respuesta JSON.
pub fn error_response(e: &ReportError) -> HttpResponse {
    let body = json!({"error": e.to_string()});
    match e {
        ReportError::Input(_) => HttpResponse::BadRequest().json(body),
        ReportError::Config(_) | ReportError::Export(_) => HttpResponse::InternalServerError().json(body),
    }
}

pub fn xlsx_response(bytes: Vec<u8>, filename: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(XLSX_MIME)
        .insert_header(("Content-Disposition", format!("attachment; filename=\"{}\"", filename)))
        .body(bytes)
}

/// Error de `web::block` (el hilo de trabajo se cayó o fue cancelado).
pub fn blocking_error(e: actix_web::error::BlockingError) -> HttpResponse {
    log::error!("tarea bloqueante falló: {}", e);
    HttpResponse::InternalServerError().json(json!({"error": "error interno al procesar el archivo"}))
}

/// Resultado listo para enviar: JSON o un libro `.xlsx`.
pub enum Salida {
    Json(serde_json::Value),
    Xlsx { bytes: Vec<u8>, filename: String },
}

impl Salida {
    pub fn into_response(self) -> HttpResponse {
        match self {
            Salida::Json(v) => HttpResponse::Ok().json(v),
            Salida::Xlsx { bytes, filename } => xlsx_response(bytes, &filename),
        }
    }
}

/// Ejecuta `trabajo` fuera del event loop y lo convierte en respuesta HTTP.
pub async fn run_blocking<F>(trabajo: F) -> HttpResponse
where
    F: FnOnce() -> Result<Salida, ReportError> + Send + 'static,
{
    match actix_web::web::block(trabajo).await {
        Ok(Ok(salida)) => salida.into_response(),
        Ok(Err(e)) => {
            log::warn!("reporte rechazado: {}", e);
            error_response(&e)
        }
        Err(e) => blocking_error(e),
    }
}
