// Estructuras de datos principales del motor de reportes

use chrono::NaiveDate;
use serde::Serialize;

mod tabla;

pub use tabla::{Celda, Hoja, Tabla};

/// Horas esperadas por día laboral.
pub const HORAS_POR_DIA: f64 = 8.0;

/// Etiqueta usada cuando ningún término de la taxonomía coincide.
pub const NO_CLASIFICADO: &str = "No clasificado";

/// Registro de tiempo tal como viene del export de worklogs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub author: String,
    pub date: NaiveDate,
    pub seconds_spent: u64,
    pub issue_key: String,
    pub project_key: String,
}

impl TimeEntry {
    pub fn hours(&self) -> f64 {
        self.seconds_spent as f64 / 3600.0
    }
}

/// Veredicto de cumplimiento contra un umbral de horas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Evaluacion {
    NotEstimated,
    Under,
    Met,
    Over,
}

impl Evaluacion {
    /// Tolerancia absoluta (en horas) para considerar dos cantidades iguales.
    pub const EPSILON: f64 = 1e-6;

    pub fn evaluar(horas: f64, esperadas: f64) -> Self {
        if horas.abs() <= Self::EPSILON {
            Evaluacion::NotEstimated
        } else if (horas - esperadas).abs() <= Self::EPSILON {
            Evaluacion::Met
        } else if horas < esperadas {
            Evaluacion::Under
        } else {
            Evaluacion::Over
        }
    }

    /// Texto para la tabla diaria.
    pub fn etiqueta_diaria(self) -> &'static str {
        match self {
            Evaluacion::NotEstimated => "❌ No estimó",
            Evaluacion::Under => "⚠️ Incumple estimativo",
            Evaluacion::Met => "✅ Cumple estimativo",
            Evaluacion::Over => "🚀 Excede estimativo",
        }
    }

    /// Texto para la tabla semanal.
    pub fn etiqueta_semanal(self) -> &'static str {
        match self {
            Evaluacion::NotEstimated => "❌ No estimó en la semana",
            Evaluacion::Under => "⚠️ Incumple estimativo semanal",
            Evaluacion::Met => "✅ Cumple estimativo semanal",
            Evaluacion::Over => "🚀 Excede estimativo semanal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBucket {
    pub author: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub evaluation: Evaluacion,
}

/// Segmento semanal de días laborales contiguos (W1, W2, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSegment {
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub business_day_count: usize,
}

impl WeekSegment {
    pub fn expected_hours(&self) -> f64 {
        self.business_day_count as f64 * HORAS_POR_DIA
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyBucket {
    pub author: String,
    pub week_label: String,
    pub business_day_count: usize,
    pub hours: f64,
    pub expected_hours: f64,
    pub evaluation: Evaluacion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub category: String,
    pub ambiguous: bool,
}

impl ClassificationResult {
    pub fn unclassified() -> Self {
        ClassificationResult { category: NO_CLASIFICADO.to_string(), ambiguous: false }
    }

    /// Marca de supervisión que se muestra junto a la clasificación.
    pub fn supervisado(&self) -> &'static str {
        if self.ambiguous { "🚨" } else { "✅" }
    }
}

/// Fila de un archivo Tracking ya normalizada (Time Spent coalescido).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingRow {
    pub author: String,
    pub comment: String,
    pub time_spent: Celda,
}

/// Lote de filas de un mismo archivo Tracking, etiquetado con su período.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingBatch {
    pub period: String,
    pub rows: Vec<TrackingRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityRecord {
    pub author: String,
    pub comment: String,
    pub time_spent: Celda,
    pub period_label: String,
}
