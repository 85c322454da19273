use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::algorithm::management_report;
use crate::error::InputError;
use crate::excel::{read_sheet_from_buffer, write_xlsx};
use crate::server::AppState;
use crate::server_handlers::upload::read_uploads;
use crate::server_handlers::{error_response, run_blocking, Formato, Salida};

#[derive(Debug, Deserialize)]
pub struct GestionQuery {
    #[serde(default)]
    pub formato: Formato,
}

/// POST /gestion
/// Clasifica los comentarios de un archivo Tracking con la taxonomía cargada
/// al iniciar el servidor.
pub async fn gestion_handler(state: web::Data<AppState>, query: web::Query<GestionQuery>, payload: Multipart) -> impl Responder {
    let taxonomia = match &state.taxonomia {
        Ok(t) => Arc::clone(t),
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": e})),
    };

    let archivos = match read_uploads(payload, 1, state.max_bytes).await {
        Ok(a) => a,
        Err(e) => return error_response(&e.into()),
    };
    let (nombre, bytes) = match archivos.into_iter().next() {
        Some(a) => a,
        None => return error_response(&InputError::NoFiles.into()),
    };
    let formato = query.into_inner().formato;

    run_blocking(move || {
        let hoja = read_sheet_from_buffer(&bytes)?;
        let tabla = management_report(&hoja, &taxonomia)?;
        match formato {
            Formato::Json => Ok(Salida::Json(json!({"archivo": nombre, "clasificados": tabla}))),
            Formato::Xlsx => {
                let bytes = write_xlsx(&tabla, "Sheet1")?;
                Ok(Salida::Xlsx { bytes, filename: "reporte_clasificacion.xlsx".to_string() })
            }
        }
    })
    .await
}
