pub mod company;
pub mod criteria;
pub mod filter;
pub mod property;

pub use company::CompanyInfo;
pub use criteria::Criteria;
pub use filter::filter_properties;
pub use property::Property;
