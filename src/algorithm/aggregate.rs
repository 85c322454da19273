//! Agregación diaria y semanal de horas por autor.
//!
//! Cada autor presente en la entrada recibe exactamente un `DailyBucket` por día
//! hábil del rango (con 0 horas si no registró nada) y un `WeeklyBucket` por
//! segmento semanal. Registros en fines de semana o fuera del rango no generan
//! filas.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::algorithm::calendar::{es_dia_habil, WeekIndex};
use crate::models::{DailyBucket, Evaluacion, TimeEntry, WeekSegment, WeeklyBucket, HORAS_POR_DIA};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregation {
    pub segments: Vec<WeekSegment>,
    pub daily: Vec<DailyBucket>,
    pub weekly: Vec<WeeklyBucket>,
}

impl Aggregation {
    /// Autores presentes, en orden alfabético.
    pub fn authors(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.daily.iter().map(|b| b.author.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Conserva sólo las filas del autor indicado.
    pub fn retain_author(&mut self, author: &str) {
        self.daily.retain(|b| b.author == author);
        self.weekly.retain(|b| b.author == author);
    }
}

/// Horas por (autor, fecha) sumando `seconds_spent / 3600`.
pub fn hours_per_day(entries: &[TimeEntry]) -> BTreeMap<(String, NaiveDate), f64> {
    let mut acumulado: BTreeMap<(String, NaiveDate), f64> = BTreeMap::new();
    for e in entries {
        *acumulado.entry((e.author.clone(), e.date)).or_insert(0.0) += e.hours();
    }
    acumulado
}

pub fn aggregate(entries: &[TimeEntry], business_days: &[NaiveDate]) -> Aggregation {
    let mut dias: Vec<NaiveDate> = business_days.iter().copied().filter(|d| es_dia_habil(*d)).collect();
    dias.sort();
    dias.dedup();

    let semanas = WeekIndex::from_days(&dias);
    let por_dia = hours_per_day(entries);
    let autores: BTreeSet<&str> = entries.iter().map(|e| e.author.as_str()).collect();

    let descartados = por_dia.keys().filter(|(_, f)| semanas.ordinal(*f).is_none()).count();
    if descartados > 0 {
        debug!("{} pares (autor, fecha) fuera de los días hábiles del rango fueron descartados", descartados);
    }

    let mut daily = Vec::with_capacity(autores.len() * dias.len());
    let mut weekly = Vec::with_capacity(autores.len() * semanas.segmentos().len());

    for autor in &autores {
        let mut horas_semana = vec![0.0_f64; semanas.segmentos().len()];

        for dia in &dias {
            let horas = por_dia.get(&(autor.to_string(), *dia)).copied().unwrap_or(0.0);
            if let Some(ordinal) = semanas.ordinal(*dia) {
                horas_semana[ordinal] += horas;
            }
            daily.push(DailyBucket {
                author: autor.to_string(),
                date: *dia,
                hours: horas,
                evaluation: Evaluacion::evaluar(horas, HORAS_POR_DIA),
            });
        }

        for (seg, horas) in semanas.segmentos().iter().zip(horas_semana) {
            let esperadas = seg.expected_hours();
            weekly.push(WeeklyBucket {
                author: autor.to_string(),
                week_label: seg.label.clone(),
                business_day_count: seg.business_day_count,
                hours: horas,
                expected_hours: esperadas,
                evaluation: Evaluacion::evaluar(horas, esperadas),
            });
        }
    }

    debug!(
        "agregación: {} autores, {} días hábiles, {} semanas",
        autores.len(),
        dias.len(),
        semanas.segmentos().len()
    );

    Aggregation { segments: semanas.into_segmentos(), daily, weekly }
}
