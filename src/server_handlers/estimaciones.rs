use actix_multipart::Multipart;
use actix_web::{web, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::algorithm::estimate_report;
use crate::error::InputError;
use crate::excel::{read_sheet_from_buffer, write_xlsx_hojas};
use crate::server::AppState;
use crate::server_handlers::upload::read_uploads;
use crate::server_handlers::{error_response, run_blocking, Formato, Salida};

#[derive(Debug, Deserialize)]
pub struct EstimacionesQuery {
    /// Autor a mostrar; vacío o "Todos" = todos.
    pub autor: Option<String>,
    #[serde(default)]
    pub formato: Formato,
}

/// POST /estimaciones
/// Recibe un export `worklogs_YYYY-MM-DD_YYYY-MM-DD.xlsx` y devuelve las
/// estimaciones diarias y semanales por autor.
pub async fn estimaciones_handler(
    state: web::Data<AppState>,
    query: web::Query<EstimacionesQuery>,
    payload: Multipart,
) -> impl Responder {
    let archivos = match read_uploads(payload, 1, state.max_bytes).await {
        Ok(a) => a,
        Err(e) => return error_response(&e.into()),
    };
    let (nombre, bytes) = match archivos.into_iter().next() {
        Some(a) => a,
        None => return error_response(&InputError::NoFiles.into()),
    };
    let q = query.into_inner();

    run_blocking(move || {
        let hoja = read_sheet_from_buffer(&bytes)?;
        let reporte = estimate_report(&hoja, &nombre, q.autor.as_deref())?;
        match q.formato {
            Formato::Json => Ok(Salida::Json(json!({
                "archivo": nombre,
                "reporte": reporte,
                "diarias": reporte.tabla_diaria(),
                "semanales": reporte.tabla_semanal(),
            }))),
            Formato::Xlsx => {
                let diarias = reporte.tabla_diaria();
                let semanales = reporte.tabla_semanal();
                let bytes = write_xlsx_hojas(&[("Diarias", &diarias), ("Semanales", &semanales)])?;
                Ok(Salida::Xlsx { bytes, filename: "estimaciones.xlsx".to_string() })
            }
        }
    })
    .await
}
