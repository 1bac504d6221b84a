use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SectionBackground {
    #[default]
    Dark,
    Primary,
}

/// Titled page band. Content goes on one side, the other side is left for imagery.
#[derive(Debug, Clone, Default)]
pub struct Section<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub background_image: Option<&'a str>,
    pub background: SectionBackground,
    pub reverse: bool,
    pub full_height: bool,
}

impl<'a> Section<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            full_height: true,
            ..Self::default()
        }
    }

    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn background(mut self, background: SectionBackground) -> Self {
        self.background = background;
        self
    }

    pub fn image(mut self, url: &'a str) -> Self {
        self.background_image = Some(url);
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn compact(mut self) -> Self {
        self.full_height = false;
        self
    }

    pub fn render(&self, children: Markup) -> Markup {
        let mut class = String::from("section");
        class.push_str(match self.background {
            SectionBackground::Dark => " section-dark",
            SectionBackground::Primary => " section-primary",
        });
        if self.full_height {
            class.push_str(" section-full");
        }
        if self.reverse {
            class.push_str(" section-reverse");
        }

        let style = self
            .background_image
            .map(|url| format!("background-image: url('{}')", url.replace('\'', "%27")));

        html! {
            section class=(class) style=[style] {
                @if self.background_image.is_some() {
                    div class="section-overlay" {}
                }
                div class="container section-body" {
                    div class="section-main" {
                        h2 { (self.title) }
                        @if let Some(subtitle) = self.subtitle {
                            p class="section-subtitle" { (subtitle) }
                        }
                        div class="section-content" { (children) }
                    }
                    div class="section-aside" {}
                }
            }
        }
    }
}
