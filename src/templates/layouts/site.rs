use crate::domain::CompanyInfo;
use crate::templates::components::{footer, navbar};
use maud::{html, Markup, DOCTYPE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavStyle {
    Solid,
    /// Over a hero: the bar has no background of its own.
    Transparent,
}

/// Page shell shared by every public page.
pub fn site_layout(
    title: &str,
    company: &CompanyInfo,
    nav: NavStyle,
    active: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(company.slogan);
                title { (title) " | " (company.name) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                (navbar(&company.name, nav, active))
                main { (content) }
                (footer(&company.name, &company.slogan))
            }
        }
    }
}
