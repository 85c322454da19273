// Biblioteca raíz del crate `worklogs`.
// Motor de reportes sobre exports de worklogs: estimaciones diarias/semanales,
// consulta de disponibilidad y clasificación de comentarios por taxonomía.
pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod models;
pub mod server;
pub mod server_handlers;
pub mod taxonomy;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;

pub use error::{ConfigError, InputError, ReportError};
pub use taxonomy::{load_taxonomy, Taxonomy};
