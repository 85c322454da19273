use chrono::NaiveDate;
use worklogs::algorithm::{aggregate, business_days};
use worklogs::models::{Evaluacion, TimeEntry};

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, day).unwrap()
}

fn e(author: &str, date: NaiveDate, hours: f64) -> TimeEntry {
    TimeEntry {
        author: author.to_string(),
        date,
        seconds_spent: (hours * 3600.0) as u64,
        issue_key: "OPS-12".to_string(),
        project_key: "OPS".to_string(),
    }
}

#[test]
fn test_evaluacion_diaria() {
    // lunes 7 a jueves 10 de abril
    let dias = business_days(d(4, 7), d(4, 10));
    let entries = vec![
        e("ana", d(4, 8), 4.0),
        e("ana", d(4, 9), 5.0),
        e("ana", d(4, 9), 3.0),
        e("ana", d(4, 10), 10.0),
    ];
    let agg = aggregate(&entries, &dias);
    let evals: Vec<(NaiveDate, f64, Evaluacion)> = agg.daily.iter().map(|b| (b.date, b.hours, b.evaluation)).collect();
    assert_eq!(
        evals,
        vec![
            (d(4, 7), 0.0, Evaluacion::NotEstimated),
            (d(4, 8), 4.0, Evaluacion::Under),
            (d(4, 9), 8.0, Evaluacion::Met),
            (d(4, 10), 10.0, Evaluacion::Over),
        ]
    );
}

#[test]
fn test_relleno_por_autor_y_dia() {
    let dias = business_days(d(3, 29), d(4, 29));
    let entries = vec![e("beto", d(4, 1), 8.0), e("ana", d(4, 2), 2.0), e("ana", d(4, 2), 1.5)];
    let agg = aggregate(&entries, &dias);

    assert_eq!(agg.daily.len(), 2 * dias.len());
    for autor in ["ana", "beto"] {
        let fechas: Vec<NaiveDate> = agg.daily.iter().filter(|b| b.author == autor).map(|b| b.date).collect();
        assert_eq!(fechas, dias, "autor {}", autor);
    }
    let ana_2 = agg.daily.iter().find(|b| b.author == "ana" && b.date == d(4, 2)).unwrap();
    assert_eq!(ana_2.hours, 3.5);
    assert_eq!(agg.authors(), vec!["ana", "beto"]);
}

#[test]
fn test_evaluacion_semanal_contra_dias_del_segmento() {
    // miércoles 2 a martes 15: W1 = 3 días (24 h), W2 = 5 días (40 h), W3 = 2 días (16 h)
    let dias = business_days(d(4, 2), d(4, 15));
    let mut entries = vec![];
    for day in [2, 3, 4] {
        entries.push(e("ana", d(4, day), 8.0));
    }
    entries.push(e("ana", d(4, 7), 20.0));
    entries.push(e("ana", d(4, 14), 9.0));
    entries.push(e("ana", d(4, 15), 9.0));

    let agg = aggregate(&entries, &dias);
    let semanas: Vec<(&str, f64, f64, Evaluacion)> = agg
        .weekly
        .iter()
        .map(|w| (w.week_label.as_str(), w.hours, w.expected_hours, w.evaluation))
        .collect();
    assert_eq!(
        semanas,
        vec![
            ("W1", 24.0, 24.0, Evaluacion::Met),
            ("W2", 20.0, 40.0, Evaluacion::Under),
            ("W3", 18.0, 16.0, Evaluacion::Over),
        ]
    );
}

#[test]
fn test_semana_sin_registros() {
    let dias = business_days(d(4, 7), d(4, 18));
    let agg = aggregate(&[e("ana", d(4, 7), 1.0)], &dias);
    assert_eq!(agg.weekly.len(), 2);
    assert_eq!(agg.weekly[1].hours, 0.0);
    assert_eq!(agg.weekly[1].evaluation, Evaluacion::NotEstimated);
}

#[test]
fn test_registros_fuera_de_rango_no_suman() {
    let dias = business_days(d(4, 7), d(4, 11));
    let entries = vec![
        e("ana", d(4, 7), 8.0),
        e("ana", d(4, 12), 8.0),
        e("ana", d(4, 14), 8.0),
    ];
    let agg = aggregate(&entries, &dias);
    assert_eq!(agg.daily.len(), 5);
    assert_eq!(agg.weekly[0].hours, 8.0);
}

#[test]
fn test_rango_sin_dias_habiles() {
    let dias = business_days(d(4, 5), d(4, 6));
    let agg = aggregate(&[e("ana", d(4, 5), 3.0)], &dias);
    assert!(agg.segments.is_empty());
    assert!(agg.daily.is_empty());
    assert!(agg.weekly.is_empty());
}

#[test]
fn test_determinismo() {
    let dias = business_days(d(4, 1), d(4, 30));
    let entries = vec![
        e("caro", d(4, 3), 2.25),
        e("ana", d(4, 1), 7.0),
        e("beto", d(4, 22), 9.5),
        e("ana", d(4, 1), 1.0),
    ];
    let a = serde_json::to_string(&aggregate(&entries, &dias)).unwrap();
    let b = serde_json::to_string(&aggregate(&entries, &dias)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_tolerancia_en_comparaciones() {
    // 28800 segundos repartidos en tercios dan 8 h con error de redondeo
    let dias = business_days(d(4, 7), d(4, 7));
    let entries: Vec<TimeEntry> = (0..3)
        .map(|_| TimeEntry { seconds_spent: 9600, ..e("ana", d(4, 7), 0.0) })
        .collect();
    let agg = aggregate(&entries, &dias);
    assert_eq!(agg.daily[0].evaluation, Evaluacion::Met);
}
