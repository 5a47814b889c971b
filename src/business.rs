use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Business
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessId(String);

impl BusinessId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Commerce partenaire, réduit à ce dont les horaires ont besoin.
///
/// `horaires` est opaque : encodage canonique de l'éditeur ou texte libre
/// historique, sans marqueur pour les distinguer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horaires: Option<String>,
}

impl Business {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: BusinessId::random(),
            name: name.into(),
            horaires: None,
        }
    }
}

/// Annuaire des commerces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    pub businesses: Vec<Business>,
}

impl Directory {
    pub fn find_by_id<'a>(&'a self, id: &BusinessId) -> Option<&'a Business> {
        self.businesses.iter().find(|b| &b.id == id)
    }
    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Business> {
        self.businesses.iter().find(|b| b.name == name)
    }
    pub fn find_mut_by_id(&mut self, id: &BusinessId) -> Option<&mut Business> {
        self.businesses.iter_mut().find(|b| &b.id == id)
    }
    /// Recherche par identifiant, puis par nom.
    pub fn lookup<'a>(&'a self, key: &str) -> Option<&'a Business> {
        self.find_by_id(&BusinessId::new(key))
            .or_else(|| self.find_by_name(key))
    }
}
