use crate::business::Directory;
use std::fs;
use std::path::Path;

#[cfg(feature = "csv")]
use crate::business::Business;
#[cfg(feature = "csv")]
use crate::legacy;
#[cfg(feature = "csv")]
use anyhow::{bail, Context};
#[cfg(feature = "csv")]
use csv::{ReaderBuilder, WriterBuilder};

/// Import de commerces depuis CSV: header `name[,horaires]`
#[cfg(feature = "csv")]
pub fn import_businesses_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Business>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid business row (empty name)");
        }
        let mut business = Business::new(name);
        if let Some(horaires) = rec.get(1) {
            let horaires = horaires.trim();
            if !horaires.is_empty() {
                business.horaires = Some(horaires.to_string());
            }
        }
        out.push(business);
    }
    Ok(out)
}

/// Export CSV des lignes d'horaires lues en texte libre:
/// header `business,jour,horaires`
#[cfg(feature = "csv")]
pub fn export_legacy_rows_csv<P: AsRef<Path>>(path: P, directory: &Directory) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["business", "jour", "horaires"])?;
    for b in &directory.businesses {
        let Some(raw) = b.horaires.as_deref() else {
            continue;
        };
        for entry in legacy::parse(raw) {
            w.write_record([b.name.as_str(), entry.jour.as_str(), entry.horaires.as_str()])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Export JSON de l'annuaire (jolie mise en forme)
pub fn export_directory_json<P: AsRef<Path>>(path: P, directory: &Directory) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(directory)?;
    fs::write(path, s)?;
    Ok(())
}
