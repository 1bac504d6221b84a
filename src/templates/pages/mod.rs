pub mod about;
pub mod contact;
pub mod home;
pub mod properties;
pub mod property_detail;

pub use about::about_page;
pub use contact::{contact_page, ContactVm};
pub use home::home_page;
pub use properties::{properties_page, PropertiesVm};
pub use property_detail::property_detail_page;
