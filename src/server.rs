use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use log::{error, info};

use crate::config::{Config, DEFAULT_MAX_BYTES};
use crate::server_handlers::{
    disponibilidad_handler, estimaciones_handler, gestion_handler, help_handler,
};
use crate::taxonomy::{load_taxonomy, Taxonomy};

/// Estado compartido (sólo lectura) entre workers.
///
/// La taxonomía se carga una vez al arrancar; si falla, el servidor arranca
/// igual y sólo `/gestion` responde con el error de configuración.
pub struct AppState {
    pub taxonomia: Result<Arc<Taxonomy>, String>,
    pub max_archivos: usize,
    /// Tope de bytes por archivo subido.
    pub max_bytes: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let taxonomia = match load_taxonomy(&config.taxonomy_path) {
            Ok(t) => {
                info!("taxonomía: {} categorías desde {:?}", t.len(), config.taxonomy_path);
                Ok(Arc::new(t))
            }
            Err(e) => {
                error!("no se pudo cargar la taxonomía: {}", e);
                Err(e.to_string())
            }
        };
        AppState {
            taxonomia,
            max_archivos: config.max_tracking_files,
            max_bytes: config.max_upload_bytes,
        }
    }

    pub fn with_taxonomy(taxonomia: Taxonomy, max_archivos: usize) -> Self {
        AppState {
            taxonomia: Ok(Arc::new(taxonomia)),
            max_archivos,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

/// Rutas de la API; se usa tanto en `run_server` como en los tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/estimaciones", web::post().to(estimaciones_handler))
        .route("/disponibilidad", web::post().to(disponibilidad_handler))
        .route("/gestion", web::post().to(gestion_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let state = web::Data::new(AppState::from_config(&config));
    info!("Iniciando servidor en http://{}", config.bind);
    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(config.bind.as_str())?
        .run()
        .await
}
