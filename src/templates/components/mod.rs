pub mod button;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod property_card;
pub mod section;

pub use button::{Button, ButtonSize};
pub use footer::footer;
pub use hero::Hero;
pub use navbar::navbar;
pub use property_card::property_card;
pub use section::{Section, SectionBackground};
