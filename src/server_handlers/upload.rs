use actix_multipart::Multipart;
use futures_util::stream::StreamExt;
use log::{debug, warn};

use crate::error::InputError;

/// Lee los archivos de un formulario multipart en memoria.
///
/// Devuelve pares (nombre de archivo, bytes) en el orden de subida. Campos sin
/// nombre de archivo se ignoran. La lectura se corta apenas aparece el archivo
/// número `max_archivos + 1` o un archivo supera `max_bytes`.
pub async fn read_uploads(
    mut payload: Multipart,
    max_archivos: usize,
    max_bytes: usize,
) -> Result<Vec<(String, Vec<u8>)>, InputError> {
    let mut archivos: Vec<(String, Vec<u8>)> = Vec::new();
    while let Some(field_res) = payload.next().await {
        let mut field = field_res.map_err(|e| InputError::Upload(e.to_string()))?;

        let filename = match field.content_disposition().get_filename() {
            Some(f) if !f.trim().is_empty() => f.to_string(),
            _ => {
                warn!("campo multipart sin nombre de archivo, se ignora");
                continue;
            }
        };

        if archivos.len() >= max_archivos {
            warn!("subida cortada: más de {} archivos", max_archivos);
            return Err(InputError::TooManyFiles { max: max_archivos, received: archivos.len() + 1 });
        }

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| InputError::Upload(e.to_string()))?;
            if bytes.len() + chunk.len() > max_bytes {
                warn!("subida cortada: {} supera {} bytes", filename, max_bytes);
                return Err(InputError::FileTooLarge { archivo: filename, max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }
        debug!("recibido {} ({} bytes)", filename, bytes.len());
        archivos.push((filename, bytes));
    }
    Ok(archivos)
}
