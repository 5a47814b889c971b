use crate::error::{DecodeError, ScheduleError};
use crate::model::WeeklySchedule;

/// Encode la semaine en JSON compact (tableau de 7 jours).
pub fn encode(schedule: &WeeklySchedule) -> Result<String, ScheduleError> {
    serde_json::to_string(schedule).map_err(ScheduleError::Encode)
}

/// Décode strictement une valeur produite par [`encode`] : aucune réparation,
/// aucun complément par défaut.
pub fn decode(raw: &str) -> Result<WeeklySchedule, DecodeError> {
    let schedule: WeeklySchedule = serde_json::from_str(raw)?;
    Ok(schedule)
}

/// Semaine par défaut, nouvelle instance à chaque appel.
pub fn default_schedule() -> WeeklySchedule {
    WeeklySchedule::default_schedule()
}
