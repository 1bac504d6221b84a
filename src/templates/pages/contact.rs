// templates/pages/contact.rs

use crate::domain::CompanyInfo;
use crate::services::{ContactForm, ContactMessage, FieldErrors, SUBJECTS};
use crate::templates::{components::Button, site_layout, NavStyle};
use maud::{html, Markup};

pub enum ContactVm<'a> {
    /// Blank form, or the visitor's input with what was wrong with it.
    Editing {
        form: &'a ContactForm,
        errors: &'a FieldErrors,
    },
    Sent(&'a ContactMessage),
}

pub fn contact_page(company: &CompanyInfo, vm: &ContactVm) -> Markup {
    site_layout(
        "Contact",
        company,
        NavStyle::Solid,
        Some("/contact"),
        html! {
            div class="container page" {
                header class="page-header" {
                    h1 { "Contact Us" }
                    p class="lead" {
                        "Have questions or need assistance? We're here to help. Reach out to our team and we'll get back to you as soon as possible."
                    }
                }

                div class="grid grid-2" {
                    div class="card" {
                        h2 { "Send Us a Message" }
                        @match vm {
                            ContactVm::Editing { form, errors } => (contact_form(form, errors)),
                            ContactVm::Sent(message) => (sent_panel(message)),
                        }
                    }
                    (office_details())
                }
            }
        },
    )
}

fn sent_panel(message: &ContactMessage) -> Markup {
    html! {
        div class="alert alert-success" role="status" {
            p { "Thank you! Your message has been sent successfully. We will get back to you soon." }
            p class="muted" { "Reference: " code { (message.reference) } }
        }
    }
}

fn contact_form(form: &ContactForm, errors: &FieldErrors) -> Markup {
    html! {
        form method="post" action="/contact" novalidate {
            @if !errors.is_empty() {
                div class="alert alert-error" role="alert" { "Please correct the highlighted fields." }
            }

            div class="grid grid-2" {
                (text_field("name", "Your Name *", "text", &form.name, true, errors))
                (text_field("email", "Email Address *", "email", &form.email, true, errors))
                (text_field("phone", "Phone Number", "tel", &form.phone, false, errors))

                div class="field" {
                    label for="subject" { "Subject *" }
                    select id="subject" name="subject" required {
                        option value="" selected[form.subject.is_empty()] { "Select a subject" }
                        @for subject in SUBJECTS {
                            option value=(subject) selected[form.subject == subject] { (subject) }
                        }
                    }
                    (field_error(errors, "subject"))
                }
            }

            div class="field" {
                label for="message" { "Your Message *" }
                textarea id="message" name="message" rows="5" required { (form.message) }
                (field_error(errors, "message"))
            }

            (Button::new("Send Message").submit().full_width())
        }
    }
}

fn text_field(
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    required: bool,
    errors: &FieldErrors,
) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type=(input_type) id=(name) name=(name) value=(value) required[required]
                aria-invalid=[errors.contains_key(name).then_some("true")];
            (field_error(errors, name))
        }
    }
}

fn field_error(errors: &FieldErrors, name: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(name) {
            p class="field-error" { (msg) }
        }
    }
}

fn office_details() -> Markup {
    html! {
        aside class="card contact-info" {
            h2 { "Contact Information" }
            dl {
                dt { "Our Office" }
                dd { "123 Real Estate Avenue" br; "Property City, PC 12345" br; "United States" }
                dt { "Phone" }
                dd { "+1 (123) 456-7890" br; "+1 (987) 654-3210" }
                dt { "Email" }
                dd {
                    a href="mailto:info@propiz.io" { "info@propiz.io" } br;
                    a href="mailto:support@propiz.io" { "support@propiz.io" }
                }
                dt { "Business Hours" }
                dd { "Monday - Friday: 9:00 AM - 6:00 PM" br; "Saturday: 10:00 AM - 4:00 PM" br; "Sunday: Closed" }
            }
        }
    }
}
