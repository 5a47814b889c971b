use crate::legacy::LegacyEntry;
use crate::model::{DaySchedule, WeeklySchedule};
use std::fmt;

pub const CLOSED_LABEL: &str = "Fermé";

/// `"Fermé"` ou `"09:00-12:00 / 14:00-18:00"`.
pub fn format_preview(day: &DaySchedule) -> String {
    if day.closed {
        return CLOSED_LABEL.to_string();
    }
    format!("{} / {}", day.morning, day.afternoon)
}

/// Une ligne `"Lun: …"` par jour, dans l'ordre de la semaine.
pub fn format_week(schedule: &WeeklySchedule) -> Vec<String> {
    schedule
        .iter()
        .map(|d| format!("{}: {}", d.day.short(), format_preview(d)))
        .collect()
}

/// Ligne prête à afficher ; le jour est omis quand il est vide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub jour: Option<String>,
    pub horaires: String,
}

impl fmt::Display for DisplayRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.jour {
            Some(jour) => write!(f, "{jour}: {}", self.horaires),
            None => f.write_str(&self.horaires),
        }
    }
}

pub fn format_legacy_rows(entries: &[LegacyEntry]) -> Vec<DisplayRow> {
    entries
        .iter()
        .map(|e| DisplayRow {
            jour: (!e.jour.is_empty()).then(|| e.jour.clone()),
            horaires: e.horaires.clone(),
        })
        .collect()
}
