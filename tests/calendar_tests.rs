use chrono::NaiveDate;
use worklogs::algorithm::calendar::{business_days, partition_business_days, WeekIndex};

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, day).unwrap()
}

#[test]
fn test_rango_que_empieza_miercoles() {
    // miércoles 2 de abril a viernes 18 de abril
    let segs = partition_business_days(d(4, 2), d(4, 18));
    let resumen: Vec<(&str, NaiveDate, NaiveDate, usize)> = segs
        .iter()
        .map(|s| (s.label.as_str(), s.start_date, s.end_date, s.business_day_count))
        .collect();
    assert_eq!(
        resumen,
        vec![
            ("W1", d(4, 2), d(4, 4), 3),
            ("W2", d(4, 7), d(4, 11), 5),
            ("W3", d(4, 14), d(4, 18), 5),
        ]
    );
}

#[test]
fn test_rango_que_termina_martes() {
    let segs = partition_business_days(d(4, 7), d(4, 15));
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[1].start_date, d(4, 14));
    assert_eq!(segs[1].end_date, d(4, 15));
    assert_eq!(segs[1].business_day_count, 2);
    assert_eq!(segs[1].expected_hours(), 16.0);
}

#[test]
fn test_rango_desde_sabado() {
    // el nombre de archivo típico: worklogs_2025-03-29_2025-04-29
    let segs = partition_business_days(d(3, 29), d(4, 29));
    assert_eq!(segs.first().unwrap().start_date, d(3, 31));
    assert_eq!(segs.first().unwrap().business_day_count, 5);
    let total: usize = segs.iter().map(|s| s.business_day_count).sum();
    assert_eq!(total, business_days(d(3, 29), d(4, 29)).len());
    assert_eq!(total, 22);
    assert_eq!(segs.last().unwrap().label, "W5");
    assert_eq!(segs.last().unwrap().business_day_count, 2);
}

#[test]
fn test_fin_de_semana_sin_segmentos() {
    assert!(business_days(d(4, 5), d(4, 6)).is_empty());
    assert!(partition_business_days(d(4, 5), d(4, 6)).is_empty());
}

#[test]
fn test_un_solo_dia() {
    let segs = partition_business_days(d(4, 9), d(4, 9));
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].business_day_count, 1);
}

#[test]
fn test_busqueda_inversa() {
    let idx = WeekIndex::new(partition_business_days(d(4, 2), d(4, 18)));
    assert_eq!(idx.lookup(d(4, 3)), Some(("W1", 3)));
    assert_eq!(idx.lookup(d(4, 10)), Some(("W2", 5)));
    assert_eq!(idx.lookup(d(4, 18)), Some(("W3", 5)));
    // sábado y días fuera del rango no tienen semana
    assert_eq!(idx.lookup(d(4, 5)), None);
    assert_eq!(idx.lookup(d(4, 21)), None);
}
