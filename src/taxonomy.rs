//! Taxonomía de clasificaciones: categoría -> frases clave.
//!
//! Se carga una sola vez por invocación desde un JSON de la forma
//! `{"Soporte": ["error", "incidente"], "Reuniones": ["reunión"]}` y se pasa
//! explícitamente al clasificador. El orden de declaración de las categorías
//! se conserva: es el criterio de desempate cuando un comentario coincide con
//! varias.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Categoria {
    pub nombre: String,
    /// Frases en minúsculas, sin duplicados, en orden de declaración.
    pub palabras: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    categorias: Vec<Categoria>,
}

impl Taxonomy {
    pub fn categorias(&self) -> &[Categoria] {
        &self.categorias
    }

    pub fn len(&self) -> usize {
        self.categorias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categorias.is_empty()
    }

    pub fn get(&self, nombre: &str) -> Option<&Categoria> {
        self.categorias.iter().find(|c| c.nombre == nombre)
    }
}

/// Lee y valida la taxonomía desde un archivo JSON.
pub fn load_taxonomy<P: AsRef<Path>>(path: P) -> Result<Taxonomy, ConfigError> {
    let path = path.as_ref();
    let contenido = fs::read_to_string(path).map_err(|source| ConfigError::Missing {
        path: path.to_path_buf(),
        source,
    })?;
    let taxonomia = parse_taxonomy(&contenido)?;
    debug!("taxonomía cargada desde {:?}: {} categorías", path, taxonomia.len());
    Ok(taxonomia)
}

/// Igual que `load_taxonomy` pero desde un texto ya en memoria.
pub fn parse_taxonomy(json: &str) -> Result<Taxonomy, ConfigError> {
    let valor: Value = serde_json::from_str(json)?;
    let objeto = match valor {
        Value::Object(m) => m,
        otro => return Err(ConfigError::Malformed(format!("se esperaba un objeto, se obtuvo {}", tipo_json(&otro)))),
    };

    let mut categorias = Vec::with_capacity(objeto.len());
    for (nombre, frases) in objeto {
        let lista = match frases {
            Value::Array(items) => items,
            otro => {
                return Err(ConfigError::Malformed(format!(
                    "la categoría '{}' debe ser una lista, se obtuvo {}",
                    nombre,
                    tipo_json(&otro)
                )))
            }
        };

        let mut palabras: Vec<String> = Vec::with_capacity(lista.len());
        for item in lista {
            let frase = match item {
                Value::String(s) => s.trim().to_lowercase(),
                otro => {
                    return Err(ConfigError::Malformed(format!(
                        "la categoría '{}' contiene un {} en lugar de texto",
                        nombre,
                        tipo_json(&otro)
                    )))
                }
            };
            if frase.is_empty() {
                return Err(ConfigError::BlankKeyword(nombre));
            }
            if !palabras.contains(&frase) {
                palabras.push(frase);
            }
        }

        if palabras.is_empty() {
            return Err(ConfigError::EmptyCategory(nombre));
        }
        categorias.push(Categoria { nombre, palabras });
    }

    Ok(Taxonomy { categorias })
}

fn tipo_json(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "booleano",
        Value::Number(_) => "número",
        Value::String(_) => "texto",
        Value::Array(_) => "lista",
        Value::Object(_) => "objeto",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normaliza_y_conserva_orden() {
        let t = parse_taxonomy(r#"{"Zeta": ["  ERROR ", "error", "Falla"], "Alfa": ["Curso"]}"#).unwrap();
        let nombres: Vec<&str> = t.categorias().iter().map(|c| c.nombre.as_str()).collect();
        assert_eq!(nombres, vec!["Zeta", "Alfa"]);
        assert_eq!(t.get("Zeta").unwrap().palabras, vec!["error", "falla"]);
    }

    #[test]
    fn rechaza_categoria_vacia() {
        let err = parse_taxonomy(r#"{"Soporte": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCategory(ref c) if c == "Soporte"));
    }

    #[test]
    fn rechaza_frase_en_blanco() {
        let err = parse_taxonomy(r#"{"Soporte": ["error", "   "]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::BlankKeyword(_)));
    }

    #[test]
    fn rechaza_estructuras_inesperadas() {
        assert!(matches!(parse_taxonomy("[1, 2]"), Err(ConfigError::Malformed(_))));
        assert!(matches!(parse_taxonomy(r#"{"A": "error"}"#), Err(ConfigError::Malformed(_))));
        assert!(matches!(parse_taxonomy(r#"{"A": [1]}"#), Err(ConfigError::Malformed(_))));
        assert!(matches!(parse_taxonomy("{no es json"), Err(ConfigError::InvalidJson(_))));
    }
}
