use crate::business::{BusinessId, Directory};
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Accès au champ `horaires` d'un commerce, vu comme une chaîne opaque.
pub trait HoursField {
    fn read_hours(&self, id: &BusinessId) -> anyhow::Result<Option<&str>>;
    /// Dernière écriture gagnante.
    fn write_hours(&mut self, id: &BusinessId, value: String) -> anyhow::Result<()>;
}

impl HoursField for Directory {
    fn read_hours(&self, id: &BusinessId) -> anyhow::Result<Option<&str>> {
        let business = self
            .find_by_id(id)
            .with_context(|| format!("unknown business: {}", id.as_str()))?;
        Ok(business.horaires.as_deref())
    }

    fn write_hours(&mut self, id: &BusinessId, value: String) -> anyhow::Result<()> {
        let business = self
            .find_mut_by_id(id)
            .with_context(|| format!("unknown business: {}", id.as_str()))?;
        business.horaires = Some(value);
        Ok(())
    }
}

pub trait Storage {
    /// Charge l'annuaire depuis un support.
    fn load(&self) -> anyhow::Result<Directory>;
    /// Sauvegarde de manière atomique.
    fn save(&self, directory: &Directory) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Comme [`Storage::load`], mais un fichier absent donne un annuaire vide.
    pub fn load_or_default(&self) -> anyhow::Result<Directory> {
        if !self.path.exists() {
            #[cfg(feature = "logging")]
            tracing::info!(path = %self.path.display(), "no directory file yet, starting empty");
            return Ok(Directory::default());
        }
        self.load()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Directory> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let directory: Directory = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(directory)?;
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(parent).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
