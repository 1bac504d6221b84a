use crate::domain::{CompanyInfo, Property};
use crate::templates::{
    components::{icons, property_card::property_facts, Button, ButtonSize},
    format, site_layout, NavStyle,
};
use maud::{html, Markup};

pub fn property_detail_page(company: &CompanyInfo, property: &Property) -> Markup {
    site_layout(
        &property.title,
        company,
        NavStyle::Solid,
        Some("/properties"),
        html! {
            article class="container page property-detail" {
                a href="/properties" class="back-link" { "← All properties" }

                img src=(property.image_url) alt=(property.title) class="detail-image";

                header {
                    h1 { (property.title) }
                    p class="property-location" { (icons::location()) (property.location) }
                    p class="detail-price" { (format::price(property.price)) }
                }

                (property_facts(property))

                p class="lead" { (property.description) }

                div class="detail-actions" {
                    (Button::new("Ask about this property").link("/contact"))
                    (Button::new("Back to listings")
                        .link("/properties")
                        .secondary()
                        .size(ButtonSize::Small))
                }
            }
        },
    )
}
