//! Serialización de una `Tabla` a `.xlsx` con columnas auto-ajustadas.

use std::io::Cursor;

use umya_spreadsheet::writer::xlsx;
use umya_spreadsheet::Spreadsheet;

use crate::error::ReportError;
use crate::models::{Celda, Tabla};

/// Ancho máximo considerado para el contenido de una columna.
const ANCHO_MAXIMO: usize = 50;

/// Ancho de columna: max(min(celda más larga, 50), largo del encabezado) + 2.
pub fn ancho_columna(tabla: &Tabla, col: usize) -> usize {
    let encabezado = tabla.columnas.get(col).map(|c| c.chars().count()).unwrap_or(0);
    let contenido = tabla
        .filas
        .iter()
        .filter_map(|f| f.get(col))
        .map(|c| c.to_string().chars().count())
        .max()
        .unwrap_or(0);
    contenido.min(ANCHO_MAXIMO).max(encabezado) + 2
}

pub fn write_xlsx(tabla: &Tabla, nombre_hoja: &str) -> Result<Vec<u8>, ReportError> {
    write_xlsx_hojas(&[(nombre_hoja, tabla)])
}

/// Un libro con una hoja por tabla, en el orden dado.
pub fn write_xlsx_hojas(hojas: &[(&str, &Tabla)]) -> Result<Vec<u8>, ReportError> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    for (nombre, tabla) in hojas {
        escribir_hoja(&mut book, nombre, tabla)?;
    }

    let mut out: Vec<u8> = Vec::new();
    xlsx::write_writer(&book, Cursor::new(&mut out)).map_err(|e| ReportError::Export(e.to_string()))?;
    Ok(out)
}

fn escribir_hoja(book: &mut Spreadsheet, nombre_hoja: &str, tabla: &Tabla) -> Result<(), ReportError> {
    let hoja = book.new_sheet(nombre_hoja).map_err(|e| ReportError::Export(e.to_string()))?;

    for (c, nombre) in tabla.columnas.iter().enumerate() {
        hoja.get_cell_mut((c as u32 + 1, 1)).set_value(nombre.clone());
    }

    for (f, fila) in tabla.filas.iter().enumerate() {
        let row = f as u32 + 2;
        for (c, celda) in fila.iter().enumerate() {
            let cell = hoja.get_cell_mut((c as u32 + 1, row));
            match celda {
                Celda::Vacia => {}
                Celda::Numero(n) => {
                    cell.set_value_number(*n);
                }
                Celda::Booleano(b) => {
                    cell.set_value_bool(*b);
                }
                otra => {
                    cell.set_value(otra.to_string());
                }
            }
        }
    }

    for c in 0..tabla.columnas.len() {
        let ancho = ancho_columna(tabla, c) as f64;
        hoja.get_column_dimension_by_number_mut(&(c as u32 + 1)).set_width(ancho);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancho_respeta_encabezado_y_tope() {
        let mut t = Tabla::new(&["Author", "Comment"]);
        t.push(vec![Celda::texto("al"), Celda::texto("x".repeat(80))]);
        assert_eq!(ancho_columna(&t, 0), 8);
        assert_eq!(ancho_columna(&t, 1), 52);
    }
}
