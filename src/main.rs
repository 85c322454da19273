// --- Reportes de worklogs - Archivo principal ---

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use worklogs::algorithm::{availability_report, estimate_report, management_report, PALABRAS_DISPONIBILIDAD};
use worklogs::cli::{Cli, Command};
use worklogs::config::Config;
use worklogs::excel::{read_sheet_from_path, read_tracking_batches, write_xlsx, write_xlsx_hojas};
use worklogs::{load_taxonomy, run_server};

fn nombre_archivo(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

fn imprimir_json<T: Serialize>(valor: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(valor)?);
    Ok(())
}

fn guardar(salida: &Path, bytes: Vec<u8>) -> Result<()> {
    fs::write(salida, bytes).with_context(|| format!("no se pudo escribir {}", salida.display()))?;
    info!("reporte escrito en {}", salida.display());
    Ok(())
}

fn estimaciones(archivo: &Path, autor: Option<&str>, salida: Option<&Path>) -> Result<()> {
    let hoja = read_sheet_from_path(archivo).with_context(|| format!("leyendo {}", archivo.display()))?;
    let reporte = estimate_report(&hoja, &nombre_archivo(archivo), autor)?;
    match salida {
        Some(s) => guardar(
            s,
            write_xlsx_hojas(&[("Diarias", &reporte.tabla_diaria()), ("Semanales", &reporte.tabla_semanal())])?,
        ),
        None => imprimir_json(&reporte),
    }
}

fn disponibilidad(archivos: &[PathBuf], autores: &[String], max: usize, salida: Option<&Path>) -> Result<()> {
    let mut subidos = Vec::with_capacity(archivos.len());
    for a in archivos {
        let bytes = fs::read(a).with_context(|| format!("leyendo {}", a.display()))?;
        subidos.push((nombre_archivo(a), bytes));
    }
    let lotes = read_tracking_batches(&subidos, max)?;
    let reporte = availability_report(&lotes, &PALABRAS_DISPONIBILIDAD, autores);
    match salida {
        Some(s) => guardar(s, write_xlsx(&reporte.tabla(), "Detalle")?),
        None => imprimir_json(&reporte),
    }
}

fn gestion(archivo: &Path, taxonomia: &Path, salida: Option<&Path>) -> Result<()> {
    let taxonomia = load_taxonomy(taxonomia)?;
    let hoja = read_sheet_from_path(archivo).with_context(|| format!("leyendo {}", archivo.display()))?;
    let tabla = management_report(&hoja, &taxonomia)?;
    match salida {
        Some(s) => guardar(s, write_xlsx(&tabla, "Sheet1")?),
        None => imprimir_json(&tabla),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = Config::from_env();

    match cli.command {
        Command::Serve { bind, taxonomia } => {
            if let Some(b) = bind {
                config.bind = b;
            }
            if let Some(t) = taxonomia {
                config.taxonomy_path = t;
            }
            println!("=== Reportes de worklogs (API) ===");
            run_server(config).await?;
        }
        Command::Estimaciones { archivo, autor, salida } => {
            estimaciones(&archivo, autor.as_deref(), salida.as_deref())?;
        }
        Command::Disponibilidad { archivos, autores, salida } => {
            disponibilidad(&archivos, &autores, config.max_tracking_files, salida.as_deref())?;
        }
        Command::Gestion { archivo, taxonomia, salida } => {
            let ruta = taxonomia.unwrap_or(config.taxonomy_path);
            gestion(&archivo, &ruta, salida.as_deref())?;
        }
    }
    Ok(())
}
