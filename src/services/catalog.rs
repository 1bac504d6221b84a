// src/services/catalog.rs

use crate::domain::{CompanyInfo, Property};
use thiserror::Error;
use tracing::debug;

const PROPERTIES_SEED: &str = include_str!("../../data/properties.json");
const COMPANY_SEED: &str = include_str!("../../data/company.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {what} seed: {source}")]
    Seed {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate property id {0:?}")]
    DuplicateId(String),
}

/// Read-only listing catalog. The collection never changes after load.
#[derive(Debug, Clone)]
pub struct PropertyService {
    properties: Vec<Property>,
}

impl PropertyService {
    /// Loads the listings bundled with the binary.
    pub fn from_seed() -> Result<Self, CatalogError> {
        Self::from_json(PROPERTIES_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let properties: Vec<Property> =
            serde_json::from_str(json).map_err(|source| CatalogError::Seed {
                what: "properties",
                source,
            })?;
        Self::new(properties)
    }

    /// Ids must be unique: `get_property_by_id` relies on it.
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogError> {
        for (i, p) in properties.iter().enumerate() {
            if properties[..i].iter().any(|q| q.id == p.id) {
                return Err(CatalogError::DuplicateId(p.id.clone()));
            }
        }
        debug!(count = properties.len(), "property catalog loaded");
        Ok(Self { properties })
    }

    pub fn get_properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get_property_by_id(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Text-only search: title, description or location, ignoring case.
    pub fn search_properties(&self, query: &str) -> Vec<Property> {
        let needle = query.to_lowercase();
        self.properties
            .iter()
            .filter(|p| p.mentions(&needle))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct CompanyService {
    info: CompanyInfo,
}

impl CompanyService {
    pub fn from_seed() -> Result<Self, CatalogError> {
        let info = serde_json::from_str(COMPANY_SEED).map_err(|source| CatalogError::Seed {
            what: "company",
            source,
        })?;
        Ok(Self { info })
    }

    pub fn get_company_info(&self) -> &CompanyInfo {
        &self.info
    }
}
