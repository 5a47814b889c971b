#![forbid(unsafe_code)]
use horaires::{
    default_schedule, format_legacy_rows, format_preview, format_week, parse, Day, DisplayRow,
    TimeSlot,
};
use insta::assert_snapshot;

#[test]
fn open_day_preview() {
    let week = default_schedule();
    assert_eq!(format_preview(week.day(Day::Monday)), "09:00-12:00 / 14:00-18:00");
}

#[test]
fn closed_day_ignores_times() {
    let mut week = default_schedule();
    let sunday = week.day_mut(Day::Sunday);
    sunday.morning.start = "00:00".parse::<TimeSlot>().unwrap();
    sunday.afternoon.end = "23:30".parse::<TimeSlot>().unwrap();
    assert_eq!(format_preview(week.day(Day::Sunday)), "Fermé");
}

#[test]
fn week_summary() {
    let lines = format_week(&default_schedule()).join("\n");
    assert_snapshot!(lines, @r###"
    Lun: 09:00-12:00 / 14:00-18:00
    Mar: 09:00-12:00 / 14:00-18:00
    Mer: 09:00-12:00 / 14:00-18:00
    Jeu: 09:00-12:00 / 14:00-18:00
    Ven: 09:00-12:00 / 14:00-18:00
    Sam: 09:00-12:00 / 14:00-18:00
    Dim: Fermé
    "###);
}

#[test]
fn legacy_rows_hide_empty_day() {
    let rows = format_legacy_rows(&parse("Sur rendez-vous\nSam: 10h-12h"));
    assert_eq!(
        rows,
        vec![
            DisplayRow {
                jour: None,
                horaires: "Sur rendez-vous".into(),
            },
            DisplayRow {
                jour: Some("Samedi".into()),
                horaires: "10h-12h".into(),
            },
        ]
    );
}

#[test]
fn legacy_rows_render() {
    let rendered: Vec<String> = format_legacy_rows(&parse("Lun-Mer: 9h-18h; Congés en août"))
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_snapshot!(rendered.join("\n"), @r###"
    Lundi: 9h-18h
    Mardi: 9h-18h
    Mercredi: 9h-18h
    Congés en août
    "###);
}

#[test]
fn legacy_rows_one_per_entry() {
    let entries = parse("Lun: a\nMar: b\nrien");
    assert_eq!(format_legacy_rows(&entries).len(), entries.len());
}
