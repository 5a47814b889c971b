use serde_json::error::Category;
use thiserror::Error;

/// Échec de décodage de l'encodage canonique d'une semaine.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// La chaîne n'est pas du JSON valide.
    #[error("not valid JSON: {0}")]
    Syntax(serde_json::Error),
    /// JSON valide, mais pas un tableau des 7 jours canoniques.
    #[error("not a weekly schedule: {0}")]
    Shape(serde_json::Error),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => DecodeError::Shape(err),
            Category::Io | Category::Syntax | Category::Eof => DecodeError::Syntax(err),
        }
    }
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("unknown day: {0}")]
    UnknownDay(String),
    #[error("invalid time (expected HH:MM on a 30 minute grid): {0}")]
    InvalidTime(String),
    #[error("invalid period (expected morning|afternoon): {0}")]
    InvalidPeriod(String),
    #[error("invalid edge (expected start|end): {0}")]
    InvalidEdge(String),
}
