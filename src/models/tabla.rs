//! Estructuras tabulares de entrada (`Hoja`) y salida (`Tabla`).
//!
//! `Hoja` es lo que se lee de un libro Excel: encabezados + filas de celdas
//! tipadas, con acceso por nombre de columna exacto. `Tabla` es lo que
//! devuelven los reportes: columnas ordenadas + filas, lista para mostrarse
//! como JSON o serializarse a `.xlsx`.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::InputError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Celda {
    Vacia,
    Texto(String),
    Numero(f64),
    Booleano(bool),
    Fecha(NaiveDate),
    FechaHora(NaiveDateTime),
}

static CELDA_VACIA: Celda = Celda::Vacia;

impl Celda {
    pub fn texto(s: impl Into<String>) -> Self {
        Celda::Texto(s.into())
    }

    /// Vacía o texto compuesto sólo de espacios.
    pub fn es_vacia(&self) -> bool {
        match self {
            Celda::Vacia => true,
            Celda::Texto(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Primera celda no vacía entre `self` y `otra`.
    pub fn o_bien(self, otra: Celda) -> Celda {
        if self.es_vacia() { otra } else { self }
    }
}

impl fmt::Display for Celda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Celda::Vacia => Ok(()),
            Celda::Texto(s) => write!(f, "{}", s),
            Celda::Numero(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Celda::Booleano(b) => write!(f, "{}", b),
            Celda::Fecha(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Celda::FechaHora(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for Celda {
    fn from(s: &str) -> Self {
        Celda::Texto(s.to_string())
    }
}

impl From<String> for Celda {
    fn from(s: String) -> Self {
        Celda::Texto(s)
    }
}

impl From<f64> for Celda {
    fn from(n: f64) -> Self {
        Celda::Numero(n)
    }
}

impl From<usize> for Celda {
    fn from(n: usize) -> Self {
        Celda::Numero(n as f64)
    }
}

impl From<NaiveDate> for Celda {
    fn from(d: NaiveDate) -> Self {
        Celda::Fecha(d)
    }
}

/// Hoja de cálculo leída: la primera fila del libro son los encabezados.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hoja {
    pub encabezados: Vec<String>,
    pub filas: Vec<Vec<Celda>>,
}

impl Hoja {
    pub fn new(encabezados: Vec<String>, filas: Vec<Vec<Celda>>) -> Self {
        Hoja { encabezados, filas }
    }

    /// Índice de la columna cuyo encabezado coincide exactamente con `nombre`.
    pub fn indice(&self, nombre: &str) -> Option<usize> {
        self.encabezados.iter().position(|h| h.trim() == nombre)
    }

    /// Índices de todas las columnas pedidas, o `MissingColumns` con las que faltan.
    pub fn requerir(&self, nombres: &[&str]) -> Result<Vec<usize>, InputError> {
        let mut indices = Vec::with_capacity(nombres.len());
        let mut faltantes = Vec::new();
        for nombre in nombres {
            match self.indice(nombre) {
                Some(i) => indices.push(i),
                None => faltantes.push(nombre.to_string()),
            }
        }
        if faltantes.is_empty() {
            Ok(indices)
        } else {
            Err(InputError::MissingColumns(faltantes))
        }
    }

    /// Celda de la fila `fila` en la columna `col`; filas cortas se leen como vacías.
    pub fn celda(&self, fila: usize, col: usize) -> &Celda {
        self.filas
            .get(fila)
            .and_then(|f| f.get(col))
            .unwrap_or(&CELDA_VACIA)
    }
}

/// Tabla de salida de un reporte.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tabla {
    pub columnas: Vec<String>,
    pub filas: Vec<Vec<Celda>>,
}

impl Tabla {
    pub fn new<S: AsRef<str>>(columnas: &[S]) -> Self {
        Tabla {
            columnas: columnas.iter().map(|c| c.as_ref().to_string()).collect(),
            filas: Vec::new(),
        }
    }

    pub fn push(&mut self, fila: Vec<Celda>) {
        debug_assert_eq!(fila.len(), self.columnas.len());
        self.filas.push(fila);
    }

    pub fn len(&self) -> usize {
        self.filas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filas.is_empty()
    }

    pub fn columna(&self, nombre: &str) -> Option<usize> {
        self.columnas.iter().position(|c| c == nombre)
    }
}
