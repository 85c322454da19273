//! Calendario laboral: días hábiles (lunes a viernes, sin feriados) y su
//! partición en segmentos semanales W1, W2, ...
//!
//! Un segmento se abre en el primer día hábil pendiente y se extiende mientras
//! el siguiente día hábil esté a menos de 5 días corridos de su inicio. Así un
//! rango que empieza un miércoles produce un W1 de sólo 3 días.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::WeekSegment;

/// Máxima distancia (en días corridos, exclusiva) entre el inicio de un
/// segmento y cualquiera de sus días.
const LARGO_SEMANA: i64 = 5;

pub fn es_dia_habil(fecha: NaiveDate) -> bool {
    !matches!(fecha.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Días hábiles en `[start, end]`, en orden. Vacío si `start > end`.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dias = Vec::new();
    let mut d = start;
    while d <= end {
        if es_dia_habil(d) {
            dias.push(d);
        }
        d += Duration::days(1);
    }
    dias
}

pub fn partition_business_days(start: NaiveDate, end: NaiveDate) -> Vec<WeekSegment> {
    partition_days(&business_days(start, end))
}

/// Particiona una secuencia ordenada de días hábiles en segmentos semanales.
pub fn partition_days(dias: &[NaiveDate]) -> Vec<WeekSegment> {
    particionar(dias).0
}

/// Segmentos más el índice de los días que efectivamente entraron en cada uno.
fn particionar(dias: &[NaiveDate]) -> (Vec<WeekSegment>, HashMap<NaiveDate, usize>) {
    let mut segmentos: Vec<WeekSegment> = Vec::new();
    let mut por_dia = HashMap::new();
    let mut i = 0;
    while i < dias.len() {
        let inicio = dias[i];
        let mut fin = inicio;
        let mut cuenta = 0;
        while i < dias.len() && es_dia_habil(dias[i]) && (dias[i] - inicio).num_days() < LARGO_SEMANA {
            fin = dias[i];
            por_dia.insert(dias[i], segmentos.len());
            cuenta += 1;
            i += 1;
        }
        if cuenta == 0 {
            // día no hábil colado en la entrada: se descarta
            i += 1;
            continue;
        }
        segmentos.push(WeekSegment {
            label: format!("W{}", segmentos.len() + 1),
            start_date: inicio,
            end_date: fin,
            business_day_count: cuenta,
        });
    }
    (segmentos, por_dia)
}

/// Búsqueda inversa día hábil -> segmento.
#[derive(Debug, Clone, Default)]
pub struct WeekIndex {
    segmentos: Vec<WeekSegment>,
    por_dia: HashMap<NaiveDate, usize>,
}

impl WeekIndex {
    /// Índice sobre segmentos de días hábiles contiguos, como los que devuelve
    /// `partition_business_days`.
    pub fn new(segmentos: Vec<WeekSegment>) -> Self {
        let mut por_dia = HashMap::new();
        for (idx, seg) in segmentos.iter().enumerate() {
            for dia in business_days(seg.start_date, seg.end_date) {
                por_dia.insert(dia, idx);
            }
        }
        WeekIndex { segmentos, por_dia }
    }

    /// Particiona `dias` e indexa sólo esos días (huecos incluidos).
    pub fn from_days(dias: &[NaiveDate]) -> Self {
        let (segmentos, por_dia) = particionar(dias);
        WeekIndex { segmentos, por_dia }
    }

    pub fn segmentos(&self) -> &[WeekSegment] {
        &self.segmentos
    }

    pub fn into_segmentos(self) -> Vec<WeekSegment> {
        self.segmentos
    }

    /// Posición (0-based) del segmento que contiene `dia`.
    pub fn ordinal(&self, dia: NaiveDate) -> Option<usize> {
        self.por_dia.get(&dia).copied()
    }

    pub fn segmento(&self, dia: NaiveDate) -> Option<&WeekSegment> {
        self.ordinal(dia).map(|i| &self.segmentos[i])
    }

    /// (etiqueta, días hábiles del segmento) para `dia`.
    pub fn lookup(&self, dia: NaiveDate) -> Option<(&str, usize)> {
        self.segmento(dia).map(|s| (s.label.as_str(), s.business_day_count))
    }
}
