//! Lecture « au mieux » des horaires saisis en texte libre.
//!
//! Le format n'a pas de grammaire : une ligne `Jour: horaires` par jour,
//! séparées par des retours à la ligne ou des `;`. Rien n'est jamais rejeté,
//! une ligne illisible est restituée telle quelle.

use crate::model::Day;
use serde::{Deserialize, Serialize};

/// Ligne d'horaires extraite du texte libre.
///
/// `jour` vaut le nom canonique du jour, le jeton d'origine s'il n'a pas pu
/// être résolu, ou `""` si la ligne ne portait aucun marqueur de jour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyEntry {
    pub jour: String,
    pub horaires: String,
}

impl LegacyEntry {
    fn unparsed(line: &str) -> Self {
        Self {
            jour: String::new(),
            horaires: line.to_string(),
        }
    }

    fn for_day(day: Day, horaires: &str) -> Self {
        Self {
            jour: day.name().to_string(),
            horaires: horaires.to_string(),
        }
    }
}

/// Découpe `raw` en lignes d'horaires affichables.
pub fn parse(raw: &str) -> Vec<LegacyEntry> {
    let mut out = Vec::new();
    for line in raw
        .split(['\n', ';'])
        .map(str::trim)
        .filter(|l| !l.is_empty())
    {
        parse_line(line, &mut out);
    }
    out
}

fn parse_line(line: &str, out: &mut Vec<LegacyEntry>) {
    let Some((day_part, hours_part)) = line.split_once(':') else {
        out.push(LegacyEntry::unparsed(line));
        return;
    };
    let day_part = day_part.trim();
    let hours_part = hours_part.trim();
    if day_part.is_empty() {
        out.push(LegacyEntry::unparsed(line));
        return;
    }

    if day_part.contains('-') {
        if let Some(days) = expand_range(day_part) {
            out.extend(days.map(|d| LegacyEntry::for_day(d, hours_part)));
            return;
        }
        #[cfg(feature = "logging")]
        tracing::debug!(range = day_part, "unresolved day range, kept verbatim");
    }

    match Day::resolve(day_part) {
        Some(day) => out.push(LegacyEntry::for_day(day, hours_part)),
        None => {
            #[cfg(feature = "logging")]
            tracing::debug!(token = day_part, "unknown day token, kept verbatim");
            out.push(LegacyEntry {
                jour: day_part.to_string(),
                horaires: hours_part.to_string(),
            });
        }
    }
}

/// `Lun-Ven` → lundi..=vendredi. Seules les deux premières bornes comptent.
/// `None` si l'une est inconnue ou si la fin précède le début dans la semaine.
fn expand_range(token: &str) -> Option<impl Iterator<Item = Day>> {
    let mut bounds = token.split('-');
    let from = Day::resolve(bounds.next()?)?;
    let to = Day::resolve(bounds.next()?)?;
    if to < from {
        return None;
    }
    Some(Day::ALL[from.index()..=to.index()].iter().copied())
}
