// src/state.rs

use crate::services::{CatalogError, CompanyService, ContactInbox, PropertyService};

/// Everything a request handler can read. Built once in `main` and shared
/// by all workers; only the inbox is mutable.
#[derive(Debug)]
pub struct AppState {
    pub properties: PropertyService,
    pub company: CompanyService,
    pub inbox: ContactInbox,
}

impl AppState {
    pub fn from_seed() -> Result<Self, CatalogError> {
        Ok(Self {
            properties: PropertyService::from_seed()?,
            company: CompanyService::from_seed()?,
            inbox: ContactInbox::new(),
        })
    }
}
