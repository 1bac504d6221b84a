mod catalog;
mod contact;
mod reference;

pub use catalog::{CatalogError, CompanyService, PropertyService};
pub use contact::{ContactForm, ContactInbox, ContactMessage, FieldErrors, SUBJECTS};
pub use reference::generate_reference_default;
