use crate::encoding;
use crate::error::ScheduleError;
use crate::format;
use crate::model::{Day, Edge, Period, TimeSlot, WeeklySchedule};

/// Reçoit l'encodage canonique après chaque modification.
pub trait ScheduleSink {
    fn on_change(&mut self, encoded: &str);
}

impl<F> ScheduleSink for F
where
    F: FnMut(&str),
{
    fn on_change(&mut self, encoded: &str) {
        self(encoded)
    }
}

/// Éditeur : encapsule une semaine en cours de modification et le jour
/// éventuellement déplié (un seul à la fois).
#[derive(Debug)]
pub struct ScheduleEditor<S: ScheduleSink> {
    schedule: WeeklySchedule,
    expanded: Option<Day>,
    sink: S,
}

impl<S: ScheduleSink> ScheduleEditor<S> {
    /// Part de l'encodage stocké s'il est valide ; sinon de la semaine par
    /// défaut, dont l'encodage est émis aussitôt. Ne remonte jamais d'erreur.
    pub fn initialize(raw: Option<&str>, sink: S) -> Self {
        let decoded = match raw {
            Some(raw) => match encoding::decode(raw) {
                Ok(schedule) => Some(schedule),
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!(error = %_err, "stored schedule unreadable, using defaults");
                    None
                }
            },
            None => None,
        };

        let fallback = decoded.is_none();
        let mut editor = Self {
            schedule: decoded.unwrap_or_else(encoding::default_schedule),
            expanded: None,
            sink,
        };
        if fallback {
            if let Err(_err) = editor.emit() {
                #[cfg(feature = "logging")]
                tracing::error!(error = %_err, "default schedule could not be encoded");
            }
        }
        editor
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    pub fn expanded_day(&self) -> Option<Day> {
        self.expanded
    }

    /// Navigation pure : n'émet rien.
    pub fn toggle_day_expanded(&mut self, day: Day) {
        self.expanded = if self.expanded == Some(day) {
            None
        } else {
            Some(day)
        };
    }

    /// Bascule ouvert/fermé sans toucher aux plages stockées.
    pub fn toggle_closed(&mut self, day: Day) -> Result<(), ScheduleError> {
        let entry = self.schedule.day_mut(day);
        entry.closed = !entry.closed;
        self.emit()
    }

    /// Modifie une seule borne. Pas de contrôle `start < end`.
    pub fn set_time(
        &mut self,
        day: Day,
        period: Period,
        edge: Edge,
        time: TimeSlot,
    ) -> Result<(), ScheduleError> {
        *self.schedule.day_mut(day).period_mut(period).edge_mut(edge) = time;
        self.emit()
    }

    pub fn preview(&self, day: Day) -> String {
        format::format_preview(self.schedule.day(day))
    }

    pub fn encoded(&self) -> Result<String, ScheduleError> {
        encoding::encode(&self.schedule)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self) -> Result<(), ScheduleError> {
        let encoded = encoding::encode(&self.schedule)?;
        #[cfg(feature = "logging")]
        tracing::debug!(len = encoded.len(), "schedule changed");
        self.sink.on_change(&encoded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_is_not_emitted() {
        let stored = encoding::encode(&WeeklySchedule::default_schedule()).unwrap();
        let mut calls = 0;
        let editor = ScheduleEditor::initialize(Some(&stored), |_: &str| calls += 1);
        drop(editor);
        assert_eq!(calls, 0);
    }
}
