use actix_multipart::Multipart;
use actix_web::{web, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::algorithm::{availability_report, PALABRAS_DISPONIBILIDAD};
use crate::excel::{read_tracking_batches, write_xlsx};
use crate::server::AppState;
use crate::server_handlers::upload::read_uploads;
use crate::server_handlers::{error_response, run_blocking, Formato, Salida};

#[derive(Debug, Deserialize)]
pub struct DisponibilidadQuery {
    /// Lista separada por comas; vacía = todos los autores.
    pub autores: Option<String>,
    #[serde(default)]
    pub formato: Formato,
}

fn split_list(s: Option<&str>) -> Vec<String> {
    match s {
        Some(s) => s.split(',').map(|p| p.trim().to_string()).filter(|p| !p.is_empty()).collect(),
        None => Vec::new(),
    }
}

/// POST /disponibilidad
/// Recibe hasta N archivos `Tracking_<Mes><Año>.xlsx` y devuelve los registros
/// cuyos comentarios indican disponibilidad.
pub async fn disponibilidad_handler(
    state: web::Data<AppState>,
    query: web::Query<DisponibilidadQuery>,
    payload: Multipart,
) -> impl Responder {
    let archivos = match read_uploads(payload, state.max_archivos, state.max_bytes).await {
        Ok(a) => a,
        Err(e) => return error_response(&e.into()),
    };
    let q = query.into_inner();
    let autores = split_list(q.autores.as_deref());
    let max = state.max_archivos;

    run_blocking(move || {
        let lotes = read_tracking_batches(&archivos, max)?;
        let reporte = availability_report(&lotes, &PALABRAS_DISPONIBILIDAD, &autores);
        match q.formato {
            Formato::Json => Ok(Salida::Json(json!({
                "archivos": archivos.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>(),
                "autores": reporte.authors,
                "registros": reporte.tabla(),
            }))),
            Formato::Xlsx => {
                let bytes = write_xlsx(&reporte.tabla(), "Detalle")?;
                Ok(Salida::Xlsx { bytes, filename: "disponibilidad_detallada.xlsx".to_string() })
            }
        }
    })
    .await
}
