use crate::domain::Property;
use crate::templates::components::{icons, Button};
use crate::templates::format;
use maud::{html, Markup};

pub fn property_card(property: &Property) -> Markup {
    let detail_href = format!("/properties/{}", property.id);

    html! {
        article class="property-card" data-id=(property.id) {
            div class="property-media" {
                img src=(property.image_url) alt=(property.title) loading="lazy";
                span class="price-badge" { (format::price(property.price)) }
            }

            div class="property-body" {
                h3 { (property.title) }
                p class="property-location" { (icons::location()) (property.location) }
                p class="property-description" { (property.description) }

                (property_facts(property))

                (Button::new("View Details").link(&detail_href).full_width())
            }
        }
    }
}

/// "5 bd · 6 ba · 4500 sqft" row, shared with the detail page.
pub fn property_facts(property: &Property) -> Markup {
    html! {
        ul class="property-facts" {
            li { (icons::bed()) span { (property.bedrooms) " bd" } }
            li { (icons::bath()) span { (format::quantity(property.bathrooms)) " ba" } }
            li { (icons::area()) span { (format::quantity(property.area)) " sqft" } }
        }
    }
}
