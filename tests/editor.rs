#![forbid(unsafe_code)]
use horaires::{decode, default_schedule, encode, Day, Edge, Period, ScheduleEditor, TimeSlot};

fn t(raw: &str) -> TimeSlot {
    raw.parse().unwrap()
}

#[test]
fn invalid_prior_data_falls_back_to_defaults() {
    let mut seen = Vec::new();
    let editor =
        ScheduleEditor::initialize(Some("not valid json at all"), |s: &str| seen.push(s.to_owned()));
    assert_eq!(editor.schedule(), &default_schedule());
    drop(editor);

    assert_eq!(seen.len(), 1);
    assert_eq!(decode(&seen[0]).unwrap(), default_schedule());
}

#[test]
fn missing_prior_data_emits_default() {
    let mut seen = Vec::new();
    let editor = ScheduleEditor::initialize(None, |s: &str| seen.push(s.to_owned()));
    drop(editor);
    assert_eq!(seen, vec![encode(&default_schedule()).unwrap()]);
}

#[test]
fn legacy_text_in_field_resets_to_defaults() {
    let editor = ScheduleEditor::initialize(Some("Lun-Ven: 9h-18h"), |_: &str| {});
    assert_eq!(editor.schedule(), &default_schedule());
}

#[test]
fn valid_prior_data_is_adopted_without_emission() {
    let mut stored = default_schedule();
    stored.day_mut(Day::Tuesday).closed = true;
    let raw = encode(&stored).unwrap();

    let mut calls = 0;
    let editor = ScheduleEditor::initialize(Some(&raw), |_: &str| calls += 1);
    assert_eq!(editor.schedule(), &stored);
    drop(editor);
    assert_eq!(calls, 0);
}

#[test]
fn expanded_day_toggles() {
    let mut editor = ScheduleEditor::initialize(None, |_: &str| {});
    assert_eq!(editor.expanded_day(), None);

    editor.toggle_day_expanded(Day::Thursday);
    assert_eq!(editor.expanded_day(), Some(Day::Thursday));
    editor.toggle_day_expanded(Day::Thursday);
    assert_eq!(editor.expanded_day(), None);

    editor.toggle_day_expanded(Day::Monday);
    editor.toggle_day_expanded(Day::Friday);
    assert_eq!(editor.expanded_day(), Some(Day::Friday));
}

#[test]
fn expanding_does_not_emit() {
    let mut calls = 0;
    let mut editor = ScheduleEditor::initialize(None, |_: &str| calls += 1);
    editor.toggle_day_expanded(Day::Monday);
    editor.toggle_day_expanded(Day::Monday);
    drop(editor);
    assert_eq!(calls, 1);
}

#[test]
fn closing_keeps_time_ranges() {
    let mut seen = Vec::new();
    let mut editor = ScheduleEditor::initialize(None, |s: &str| seen.push(s.to_owned()));
    editor
        .set_time(Day::Monday, Period::Morning, Edge::Start, t("08:30"))
        .unwrap();
    editor.toggle_closed(Day::Monday).unwrap();
    assert!(editor.schedule().day(Day::Monday).closed);
    assert_eq!(editor.preview(Day::Monday), "Fermé");

    editor.toggle_closed(Day::Monday).unwrap();
    assert_eq!(editor.preview(Day::Monday), "08:30-12:00 / 14:00-18:00");
    drop(editor);

    // défaut + 3 modifications
    assert_eq!(seen.len(), 4);
    let last = decode(seen.last().unwrap()).unwrap();
    assert!(!last.day(Day::Monday).closed);
    assert_eq!(last.day(Day::Monday).morning.start, t("08:30"));
}

#[test]
fn toggle_closed_touches_one_day() {
    let mut editor = ScheduleEditor::initialize(None, |_: &str| {});
    editor.toggle_closed(Day::Sunday).unwrap();
    let week = editor.schedule();
    assert!(week.iter().all(|d| !d.closed));
}

#[test]
fn set_time_updates_a_single_field() {
    let mut editor = ScheduleEditor::initialize(None, |_: &str| {});
    editor
        .set_time(Day::Saturday, Period::Afternoon, Edge::End, t("23:30"))
        .unwrap();

    let mut expected = default_schedule();
    expected.day_mut(Day::Saturday).afternoon.end = t("23:30");
    assert_eq!(editor.schedule(), &expected);
}

#[test]
fn set_time_allows_end_before_start() {
    let mut editor = ScheduleEditor::initialize(None, |_: &str| {});
    editor
        .set_time(Day::Tuesday, Period::Morning, Edge::End, t("07:00"))
        .unwrap();
    assert_eq!(editor.preview(Day::Tuesday), "09:00-07:00 / 14:00-18:00");
}

#[test]
fn every_emission_is_decodable() {
    let mut seen = Vec::new();
    let mut editor = ScheduleEditor::initialize(None, |s: &str| seen.push(s.to_owned()));
    for (i, day) in Day::ALL.iter().enumerate() {
        let slot = TimeSlot::options().nth(i * 5).unwrap();
        editor.set_time(*day, Period::Morning, Edge::End, slot).unwrap();
        editor.toggle_closed(*day).unwrap();
    }
    let final_week = editor.schedule().clone();
    assert_eq!(editor.encoded().unwrap(), encode(&final_week).unwrap());
    drop(editor);

    assert_eq!(seen.len(), 1 + 2 * 7);
    assert!(seen.iter().all(|s| decode(s).is_ok()));
    assert_eq!(decode(seen.last().unwrap()).unwrap(), final_week);
}

#[test]
fn into_sink_returns_callback() {
    struct Recorder(Vec<String>);
    impl horaires::ScheduleSink for Recorder {
        fn on_change(&mut self, encoded: &str) {
            self.0.push(encoded.to_owned());
        }
    }

    let mut editor = ScheduleEditor::initialize(None, Recorder(Vec::new()));
    editor.toggle_closed(Day::Monday).unwrap();
    let recorder = editor.into_sink();
    assert_eq!(recorder.0.len(), 2);
}
