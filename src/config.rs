//! Configuración desde variables de entorno (se lee `.env` si existe).
//!
//! - `WORKLOGS_BIND`: dirección del servidor HTTP (por defecto `127.0.0.1:8080`)
//! - `WORKLOGS_TAXONOMIA`: ruta al JSON de clasificaciones (por defecto `clasificaciones.json`)
//! - `WORKLOGS_MAX_ARCHIVOS`: máximo de archivos Tracking por consulta (por defecto 6)
//! - `WORKLOGS_MAX_BYTES`: tamaño máximo de cada archivo subido (por defecto 50 MiB)

use std::env;
use std::path::PathBuf;

use log::warn;

use crate::excel::MAX_ARCHIVOS_TRACKING;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_TAXONOMIA: &str = "clasificaciones.json";
pub const DEFAULT_MAX_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub taxonomy_path: PathBuf,
    pub max_tracking_files: usize,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: DEFAULT_BIND.to_string(),
            taxonomy_path: PathBuf::from(DEFAULT_TAXONOMIA),
            max_tracking_files: MAX_ARCHIVOS_TRACKING,
            max_upload_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Config {
    pub fn from_env() -> Self {
        load_dotenv();
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda de
    /// variables; permite probar sin tocar el entorno del proceso.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        if let Some(b) = lookup("WORKLOGS_BIND").filter(|s| !s.trim().is_empty()) {
            cfg.bind = b.trim().to_string();
        }
        if let Some(p) = lookup("WORKLOGS_TAXONOMIA").filter(|s| !s.trim().is_empty()) {
            cfg.taxonomy_path = PathBuf::from(p.trim());
        }
        if let Some(m) = lookup("WORKLOGS_MAX_ARCHIVOS") {
            match m.trim().parse::<usize>() {
                Ok(n) if n > 0 => cfg.max_tracking_files = n,
                _ => warn!("WORKLOGS_MAX_ARCHIVOS inválido ('{}'), se usa {}", m, cfg.max_tracking_files),
            }
        }
        if let Some(m) = lookup("WORKLOGS_MAX_BYTES") {
            match m.trim().parse::<usize>() {
                Ok(n) if n > 0 => cfg.max_upload_bytes = n,
                _ => warn!("WORKLOGS_MAX_BYTES inválido ('{}'), se usa {}", m, cfg.max_upload_bytes),
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn valores_por_defecto_y_sobrescritos() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("WORKLOGS_BIND", "0.0.0.0:9000"),
            ("WORKLOGS_MAX_ARCHIVOS", "cero"),
            ("WORKLOGS_MAX_BYTES", "1048576"),
        ]);
        let cfg = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.bind, "0.0.0.0:9000");
        assert_eq!(cfg.taxonomy_path, PathBuf::from(DEFAULT_TAXONOMIA));
        assert_eq!(cfg.max_tracking_files, 6);
        assert_eq!(cfg.max_upload_bytes, 1_048_576);
        assert_eq!(Config::default().max_upload_bytes, DEFAULT_MAX_BYTES);
    }
}
