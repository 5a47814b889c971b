#![forbid(unsafe_code)]
//! Horaires — horaires d'ouverture des commerces partenaires.
//!
//! - Semaine structurée (matin / après-midi, grille de 30 minutes) et son
//!   encodage JSON canonique, produit par l'éditeur.
//! - Lecture au mieux des horaires historiques saisis en texte libre.
//! - Les deux représentations cohabitent dans le même champ `horaires`
//!   et ne sont pas interchangeables.

pub mod business;
pub mod editor;
pub mod encoding;
pub mod error;
pub mod format;
pub mod io;
pub mod legacy;
pub mod model;
pub mod storage;

pub use business::{Business, BusinessId, Directory};
pub use editor::{ScheduleEditor, ScheduleSink};
pub use encoding::{decode, default_schedule, encode};
pub use error::{DecodeError, ScheduleError};
pub use format::{format_legacy_rows, format_preview, format_week, DisplayRow};
pub use legacy::{parse, LegacyEntry};
pub use model::{Day, DaySchedule, Edge, Period, TimeRange, TimeSlot, WeeklySchedule};
pub use storage::{HoursField, JsonStorage, Storage};
