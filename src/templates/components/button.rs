use maud::{html, Markup, Render};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A call-to-action. Renders as a link when it has one, otherwise as a `<button>`.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    pub text: &'a str,
    pub link: Option<&'a str>,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
    pub button_type: &'a str,
}

impl<'a> Button<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            link: None,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            full_width: false,
            button_type: "button",
        }
    }

    pub fn link(mut self, href: &'a str) -> Self {
        self.link = Some(href);
        self
    }

    pub fn secondary(mut self) -> Self {
        self.variant = ButtonVariant::Secondary;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn submit(mut self) -> Self {
        self.button_type = "submit";
        self
    }

    fn class(&self) -> String {
        let variant = match self.variant {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        };
        let size = match self.size {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
        };
        let mut class = format!("btn {variant} {size}");
        if self.full_width {
            class.push_str(" btn-block");
        }
        class
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let class = self.class();
        match self.link {
            Some(href) if href.starts_with("http") => html! {
                a href=(href) class=(class) target="_blank" rel="noopener noreferrer" { (self.text) }
            },
            Some(href) => html! {
                a href=(href) class=(class) { (self.text) }
            },
            None => html! {
                button type=(self.button_type) class=(class) { (self.text) }
            },
        }
    }
}
