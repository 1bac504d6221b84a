// templates/pages/properties.rs

use crate::domain::{criteria::BEDROOM_CHOICES, CompanyInfo, Criteria, Property};
use crate::templates::{
    components::{icons, property_card, Button},
    format, site_layout, NavStyle,
};
use maud::{html, Markup};

pub struct PropertiesVm<'a> {
    pub criteria: &'a Criteria,
    pub results: &'a [Property],
    /// Size of the unfiltered catalog.
    pub total: usize,
}

pub fn properties_page(company: &CompanyInfo, vm: &PropertiesVm) -> Markup {
    site_layout(
        "Properties",
        company,
        NavStyle::Solid,
        Some("/properties"),
        html! {
            div class="container page" {
                header class="page-header" {
                    h1 { "Properties" }
                    p class="lead" { "Find your dream property from our extensive collection" }
                }

                (filter_panel(vm.criteria))

                @if vm.criteria.price_range.is_inverted() {
                    p class="notice" role="status" {
                        "The minimum price is higher than the maximum price, so no property can match."
                    }
                }

                p class="result-count" {
                    "Showing " (vm.results.len()) " of " (vm.total) " properties"
                }

                div class="grid grid-3 listings" {
                    @if vm.results.is_empty() {
                        div class="empty-state" {
                            (icons::sad_face())
                            h3 { "No properties found" }
                            p { "Try adjusting your search filters" }
                        }
                    } @else {
                        @for property in vm.results {
                            (property_card(property))
                        }
                    }
                }
            }
        },
    )
}

fn filter_panel(criteria: &Criteria) -> Markup {
    let range = criteria.price_range;
    let bedrooms_value = criteria
        .bedrooms
        .map(|n| n.to_string())
        .unwrap_or_else(|| "any".to_string());

    html! {
        form class="card filters" method="get" action="/properties" {
            div class="filter" {
                label for="search" { "Search" }
                input
                    type="text"
                    id="search"
                    name="q"
                    placeholder="Search by location, title, etc."
                    value=(criteria.search_term);
            }

            fieldset class="filter filter-wide" {
                legend { "Price Range" }
                div class="price-inputs" {
                    label for="min-price" class="sr-only" { "Minimum price" }
                    input type="number" id="min-price" name="min_price" placeholder="Min" min="0"
                        value=(format::quantity(range.min));
                    span class="muted" { "to" }
                    label for="max-price" class="sr-only" { "Maximum price" }
                    input type="number" id="max-price" name="max_price" placeholder="Max" min="0"
                        value=[range.max.is_finite().then(|| format::quantity(range.max))];
                }
            }

            fieldset class="filter" {
                legend { "Bedrooms" }
                input type="hidden" name="bedrooms" value=(bedrooms_value);
                div class="bedroom-choices" {
                    (bedroom_choice(criteria, None, "Any"))
                    @for n in BEDROOM_CHOICES {
                        (bedroom_choice(criteria, Some(n), &format!("{n}+")))
                    }
                }
            }

            div class="filter filter-submit" {
                (Button::new("Apply filters").submit())
            }
        }
    }
}

/// Bedroom choices are links so they work without script; each keeps the other criteria.
fn bedroom_choice(criteria: &Criteria, bedrooms: Option<u32>, label: &str) -> Markup {
    let href = format!("/properties?{}", criteria.with_bedrooms(bedrooms).to_query());
    let selected = criteria.bedrooms == bedrooms;

    html! {
        a href=(href)
            class=(if selected { "chip chip-selected" } else { "chip" })
            aria-pressed=(selected)
        { (label) }
    }
}
