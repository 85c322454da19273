//! Argumentos de línea de comandos

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "worklogs")]
#[command(version)]
#[command(about = "Reportes de estimaciones, disponibilidad y gestión a partir de exports de worklogs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Levanta la API HTTP
    Serve {
        /// Dirección de escucha (sobrescribe WORKLOGS_BIND)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// JSON de clasificaciones (sobrescribe WORKLOGS_TAXONOMIA)
        #[arg(long, value_name = "PATH")]
        taxonomia: Option<PathBuf>,
    },

    /// Reporte de estimaciones por usuario (worklogs_YYYY-MM-DD_YYYY-MM-DD.xlsx)
    Estimaciones {
        archivo: PathBuf,

        /// Mostrar sólo este autor
        #[arg(long)]
        autor: Option<String>,

        /// Escribir el resultado a este .xlsx en vez de JSON por stdout
        #[arg(short, long, value_name = "XLSX")]
        salida: Option<PathBuf>,
    },

    /// Consulta de disponibilidad sobre archivos Tracking_<Mes><Año>.xlsx
    Disponibilidad {
        #[arg(required = true)]
        archivos: Vec<PathBuf>,

        /// Filtrar por autor (se puede repetir)
        #[arg(long = "autor")]
        autores: Vec<String>,

        #[arg(short, long, value_name = "XLSX")]
        salida: Option<PathBuf>,
    },

    /// Reporte de gestión: clasificación de comentarios
    Gestion {
        archivo: PathBuf,

        /// JSON de clasificaciones (sobrescribe WORKLOGS_TAXONOMIA)
        #[arg(long, value_name = "PATH")]
        taxonomia: Option<PathBuf>,

        #[arg(short, long, value_name = "XLSX")]
        salida: Option<PathBuf>,
    },
}
