use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::PALABRAS_DISPONIBILIDAD;
use crate::excel::COLUMNAS_WORKLOG;

pub async fn help_handler() -> impl Responder {
    let help = json!({
        "description": "API de reportes de worklogs. Todos los endpoints reciben archivos .xlsx como multipart/form-data y responden JSON, o un .xlsx con ?formato=xlsx.",
        "endpoints": {
            "POST /estimaciones": {
                "archivo": "worklogs_YYYY-MM-DD_YYYY-MM-DD.xlsx",
                "columnas": COLUMNAS_WORKLOG,
                "query": {"autor": "opcional, 'Todos' = sin filtro", "formato": "json | xlsx"}
            },
            "POST /disponibilidad": {
                "archivos": "hasta 6 archivos Tracking_<Mes><Año>.xlsx",
                "columnas": ["Author", "Comment", "Time Spent | Time spent"],
                "palabras_clave": PALABRAS_DISPONIBILIDAD,
                "query": {"autores": "opcional, separados por coma", "formato": "json | xlsx"}
            },
            "POST /gestion": {
                "archivo": "Tracking_<Mes><Año>.xlsx",
                "columnas": ["Comment", "Issue Summary", "tag (opcional)"],
                "query": {"formato": "json | xlsx"}
            }
        },
        "note": "Las semanas (W1, W2, ...) se calculan sobre días hábiles lunes-viernes; se esperan 8 horas por día."
    });

    HttpResponse::Ok().json(help)
}
