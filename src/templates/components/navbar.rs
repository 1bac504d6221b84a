use crate::templates::NavStyle;
use maud::{html, Markup};

pub const NAV_LINKS: [(&str, &str); 3] = [
    ("/properties", "Properties"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

/// Top bar with brand, desktop links and a collapsible mobile menu.
/// `active` is the path of the current page, if it has a nav entry.
pub fn navbar(brand: &str, style: NavStyle, active: Option<&str>) -> Markup {
    let class = match style {
        NavStyle::Solid => "navbar navbar-solid",
        NavStyle::Transparent => "navbar navbar-transparent",
    };

    html! {
        nav class=(class) {
            div class="container navbar-inner" {
                a href="/" class="brand" { (brand) }

                ul class="nav-links" {
                    @for (href, label) in NAV_LINKS {
                        li {
                            a href=(href) class="nav-link" aria-current=[(active == Some(href)).then_some("page")] { (label) }
                        }
                    }
                }

                details class="mobile-menu" {
                    summary aria-label="Open menu" { "☰" }
                    ul {
                        @for (href, label) in NAV_LINKS {
                            li { a href=(href) class="nav-link" { (label) } }
                        }
                    }
                }
            }
        }
    }
}
