use crate::error::ScheduleError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Jour de la semaine, dans l'ordre canonique lundi → dimanche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "Lundi")]
    Monday,
    #[serde(rename = "Mardi")]
    Tuesday,
    #[serde(rename = "Mercredi")]
    Wednesday,
    #[serde(rename = "Jeudi")]
    Thursday,
    #[serde(rename = "Vendredi")]
    Friday,
    #[serde(rename = "Samedi")]
    Saturday,
    #[serde(rename = "Dimanche")]
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position dans la semaine (lundi = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Day> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Lundi",
            Day::Tuesday => "Mardi",
            Day::Wednesday => "Mercredi",
            Day::Thursday => "Jeudi",
            Day::Friday => "Vendredi",
            Day::Saturday => "Samedi",
            Day::Sunday => "Dimanche",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Day::Monday => "Lun",
            Day::Tuesday => "Mar",
            Day::Wednesday => "Mer",
            Day::Thursday => "Jeu",
            Day::Friday => "Ven",
            Day::Saturday => "Sam",
            Day::Sunday => "Dim",
        }
    }

    /// Résout un jeton saisi à la main : nom complet puis abréviation,
    /// sans tenir compte de la casse ni des espaces autour.
    pub fn resolve(token: &str) -> Option<Day> {
        let token = token.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().to_lowercase() == token)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|d| d.short().to_lowercase() == token)
            })
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::resolve(s).ok_or_else(|| ScheduleError::UnknownDay(s.to_string()))
    }
}

/// Heure d'ouverture prise dans la grille fixe de 30 minutes (00:00 → 23:30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u16);

impl TimeSlot {
    pub const STEP_MINUTES: u16 = 30;
    pub const COUNT: usize = 48;

    /// `hour` < 24, `minute` ∈ {0, 30}.
    pub fn new(hour: u16, minute: u16) -> Result<Self, ScheduleError> {
        if hour >= 24 || minute % Self::STEP_MINUTES != 0 || minute >= 60 {
            return Err(ScheduleError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Les 48 valeurs proposées par l'éditeur, dans l'ordre.
    pub fn options() -> impl Iterator<Item = TimeSlot> {
        (0..Self::COUNT as u16).map(|i| TimeSlot(i * Self::STEP_MINUTES))
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.len() != 5 {
            return Err(ScheduleError::InvalidTime(s.to_string()));
        }
        let t = NaiveTime::parse_from_str(raw, "%H:%M")
            .map_err(|_| ScheduleError::InvalidTime(s.to_string()))?;
        TimeSlot::new(t.hour() as u16, t.minute() as u16)
            .map_err(|_| ScheduleError::InvalidTime(s.to_string()))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(value: TimeSlot) -> Self {
        value.to_string()
    }
}

/// Plage horaire d'une demi-journée. Aucune contrainte `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeSlot,
    pub end: TimeSlot,
}

impl TimeRange {
    pub fn new(start: TimeSlot, end: TimeSlot) -> Self {
        Self { start, end }
    }

    pub fn edge(&self, edge: Edge) -> TimeSlot {
        match edge {
            Edge::Start => self.start,
            Edge::End => self.end,
        }
    }

    pub fn edge_mut(&mut self, edge: Edge) -> &mut TimeSlot {
        match edge {
            Edge::Start => &mut self.start,
            Edge::End => &mut self.end,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Morning,
    Afternoon,
}

impl FromStr for Period {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" | "matin" => Ok(Period::Morning),
            "afternoon" | "apres-midi" | "après-midi" | "aprem" => Ok(Period::Afternoon),
            _ => Err(ScheduleError::InvalidPeriod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Start,
    End,
}

impl FromStr for Edge {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" | "debut" | "début" => Ok(Edge::Start),
            "end" | "fin" => Ok(Edge::End),
            _ => Err(ScheduleError::InvalidEdge(s.to_string())),
        }
    }
}

/// Horaires d'un jour. Fermer un jour conserve ses plages pour une réouverture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day: Day,
    /// Affichage uniquement, conservé tel quel au décodage.
    pub day_short: String,
    pub closed: bool,
    pub morning: TimeRange,
    pub afternoon: TimeRange,
}

impl DaySchedule {
    pub fn new(day: Day, morning: TimeRange, afternoon: TimeRange, closed: bool) -> Self {
        Self {
            day,
            day_short: day.short().to_string(),
            closed,
            morning,
            afternoon,
        }
    }

    pub fn period(&self, period: Period) -> &TimeRange {
        match period {
            Period::Morning => &self.morning,
            Period::Afternoon => &self.afternoon,
        }
    }

    pub fn period_mut(&mut self, period: Period) -> &mut TimeRange {
        match period {
            Period::Morning => &mut self.morning,
            Period::Afternoon => &mut self.afternoon,
        }
    }
}

/// Semaine complète : 7 jours, chacun une fois, lundi → dimanche.
///
/// Sérialisée comme un tableau JSON de 7 objets ; toute autre forme est
/// refusée à la désérialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DaySchedule>", into = "Vec<DaySchedule>")]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    /// 09:00-12:00 / 14:00-18:00 tous les jours, dimanche fermé.
    pub fn default_schedule() -> Self {
        let morning = TimeRange::new(TimeSlot(9 * 60), TimeSlot(12 * 60));
        let afternoon = TimeRange::new(TimeSlot(14 * 60), TimeSlot(18 * 60));
        Self {
            days: Day::ALL.map(|d| DaySchedule::new(d, morning, afternoon, d == Day::Sunday)),
        }
    }

    pub fn day(&self, day: Day) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: Day) -> &mut DaySchedule {
        &mut self.days[day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.iter()
    }

    pub fn days(&self) -> &[DaySchedule; 7] {
        &self.days
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::default_schedule()
    }
}

impl TryFrom<Vec<DaySchedule>> for WeeklySchedule {
    type Error = String;

    fn try_from(value: Vec<DaySchedule>) -> Result<Self, Self::Error> {
        let len = value.len();
        let days: [DaySchedule; 7] = value
            .try_into()
            .map_err(|_| format!("expected 7 days, found {len}"))?;
        for (expected, got) in Day::ALL.iter().zip(days.iter()) {
            if *expected != got.day {
                return Err(format!(
                    "expected {} at position {}, found {}",
                    expected,
                    expected.index(),
                    got.day
                ));
            }
        }
        Ok(Self { days })
    }
}

impl From<WeeklySchedule> for Vec<DaySchedule> {
    fn from(value: WeeklySchedule) -> Self {
        value.days.into()
    }
}
