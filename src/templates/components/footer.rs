use crate::templates::components::navbar::NAV_LINKS;
use chrono::{Datelike, Utc};
use maud::{html, Markup};

pub fn footer(company: &str, slogan: &str) -> Markup {
    let year = Utc::now().year();

    html! {
        footer class="footer" {
            div class="container footer-grid" {
                div {
                    h3 class="brand" { (company) }
                    p { (slogan) }
                }
                div {
                    h4 { "Explore" }
                    ul {
                        li { a href="/" { "Home" } }
                        @for (href, label) in NAV_LINKS {
                            li { a href=(href) { (label) } }
                        }
                    }
                }
                div {
                    h4 { "Contact" }
                    p { "123 Real Estate Avenue" br; "Property City, PC 12345" }
                    p { a href="mailto:info@propiz.io" { "info@propiz.io" } }
                }
            }
            p class="copyright" { "© " (year) " " (company) ". All rights reserved." }
        }
    }
}
