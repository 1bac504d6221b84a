use crate::templates::components::{icons, Button};
use maud::{html, Markup, Render};

/// Full-screen banner with a looping background video and up to two CTAs.
#[derive(Debug, Clone)]
pub struct Hero<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub background_video: &'a str,
    pub cta_text: &'a str,
    pub cta_link: &'a str,
    pub secondary_cta: Option<(&'a str, &'a str)>,
}

impl<'a> Hero<'a> {
    pub fn new(title: &'a str, background_video: &'a str) -> Self {
        Self {
            title,
            subtitle: None,
            background_video,
            cta_text: "Learn More",
            cta_link: "#",
            secondary_cta: None,
        }
    }
}

impl Render for Hero<'_> {
    fn render(&self) -> Markup {
        html! {
            section class="hero" {
                video class="hero-video" autoplay muted loop playsinline {
                    source src=(self.background_video) type="video/mp4";
                    "Your browser does not support the video tag."
                }
                div class="hero-overlay" {}

                div class="hero-content" {
                    h1 { (self.title) }
                    @if let Some(subtitle) = self.subtitle {
                        p class="hero-subtitle" { (subtitle) }
                    }
                    div class="hero-actions" {
                        (Button::new(self.cta_text).link(self.cta_link))
                        @if let Some((text, link)) = self.secondary_cta {
                            (Button::new(text).link(link).secondary())
                        }
                    }
                }

                div class="hero-scroll" { (icons::arrow_down()) }
            }
        }
    }
}
