use crate::domain::{company::TEAM, CompanyInfo};
use crate::templates::{
    components::{Section, SectionBackground},
    format, site_layout, NavStyle,
};
use maud::{html, Markup};

const OFFICE_IMAGE: &str =
    "https://images.unsplash.com/photo-1577415124269-fc1140a69e91?auto=format&fit=crop&w=1170&q=80";

pub fn about_page(company: &CompanyInfo) -> Markup {
    let stats = &company.stats;
    let impact = [
        (format!("{}+", format::thousands(stats.properties_sold)), "Properties Sold"),
        (format!("{}+", format::thousands(stats.happy_customers)), "Happy Customers"),
        (format!("{}+", stats.cities_covered), "Cities Covered"),
        (stats.average_days_to_sell.to_string(), "Avg. Days to Sell"),
    ];
    let team_subtitle = format!("Meet the people behind {}", company.name);

    site_layout(
        "About",
        company,
        NavStyle::Solid,
        Some("/about"),
        html! {
            header class="page-header" {
                div class="container" {
                    h1 { "About " (company.name) }
                    p class="lead" { (company.slogan) }
                }
            }

            (Section::new("Our Story")
                .subtitle("How we're transforming the real estate industry")
                .background(SectionBackground::Primary)
                .render(html! {
                    div class="grid grid-2" {
                        div {
                            p { (company.description) }
                            p {
                                "Founded in " (company.founded) ", " (company.name)
                                " has grown from a small startup to a team of " (company.employees)
                                " dedicated professionals based in " (company.headquarters) "."
                            }
                            p {
                                "Our innovative approach to real estate has helped thousands of people find their dream homes and make smarter property investments."
                            }
                        }
                        img src=(OFFICE_IMAGE) alt="Our office" class="rounded";
                    }
                }))

            (Section::new("Mission & Vision")
                .subtitle("What drives us forward")
                .reverse()
                .render(html! {
                    div class="grid grid-2" {
                        div class="card" { h3 { "Our Mission" } p { (company.mission) } }
                        div class="card" { h3 { "Our Vision" } p { (company.vision) } }
                    }
                }))

            (Section::new("Our Values")
                .subtitle("The principles that guide everything we do")
                .background(SectionBackground::Primary)
                .render(html! {
                    ul class="grid grid-5 values" {
                        @for value in &company.values {
                            li class="card value" { h3 { (value) } }
                        }
                    }
                }))

            (Section::new("Our Team")
                .subtitle(&team_subtitle)
                .reverse()
                .render(html! {
                    div class="grid grid-4 team" {
                        @for member in TEAM {
                            div class="card member" {
                                img src=(member.image) alt=(member.name) class="avatar avatar-lg";
                                h3 { (member.name) }
                                p class="muted" { (member.role) }
                            }
                        }
                    }
                }))

            (Section::new("Our Impact")
                .subtitle("The numbers speak for themselves")
                .background(SectionBackground::Primary)
                .image(OFFICE_IMAGE)
                .compact()
                .render(html! {
                    div class="grid grid-4 stats" {
                        @for (value, label) in &impact {
                            div class="stat" {
                                div class="stat-value" { (value) }
                                p { (label) }
                            }
                        }
                    }
                }))
        },
    )
}
