// templates/pages/home.rs

use crate::domain::CompanyInfo;
use crate::templates::{
    components::{icons, Button, ButtonSize, Hero, Section, SectionBackground},
    site_layout, NavStyle,
};
use maud::{html, Markup};

const HERO_VIDEO: &str = "/static/hero.mp4";

const PITCH: [(&str, &str); 2] = [
    (
        "Transform Your Business",
        "Our services offer comprehensive solutions for real estate professionals, from lead generation to administrative tasks management, all powered by cutting-edge AI technology.",
    ),
    (
        "Save Time & Money",
        "Automation tools can save real estate agents at least 12 hours per week or 624 hours annually, allowing them to focus more on clients and closing deals.",
    ),
];

const REASONS: [(&str, &str); 4] = [
    (
        "Time Waste Elimination",
        "80% of real estate agents face burnout within 2 years due to poor time management. Our automation tools save you valuable time.",
    ),
    (
        "Increased Revenue",
        "Property management firms could achieve cost savings of up to 25% through effective time management and automation.",
    ),
    (
        "AI-Powered Insights",
        "Real-time market analysis with AI-driven insights helps you make better decisions and optimize your business strategy.",
    ),
    (
        "Automated Communication",
        "Responding within 5 minutes boosts lead contact by 900%. Our system ensures no lead goes unattended.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Initial Setup & Customization",
        "Our team conducts a detailed onboarding session to understand your workflow, existing tools, and pain points. Propiz.io is then configured to integrate with your CRM, email, and property listing platforms.",
    ),
    (
        "Lead Capture & Follow-Up",
        "Automated lead capture from your website and social media, with instant AI-driven responses that qualify leads and schedule visits. Never miss a potential client again.",
    ),
    (
        "AI-Powered Property Match",
        "AI scans available listings and instantly finds the best property matches based on client needs, with smart filters for budget, location, features, and preferences.",
    ),
];

const IMPACT: [(&str, &str); 4] = [
    ("900%", "Increase in Lead Contact"),
    ("25%", "Cost Savings"),
    ("12+", "Hours Saved Weekly"),
    ("85%", "Lead Response Rate"),
];

pub fn home_page(company: &CompanyInfo) -> Markup {
    let hero = Hero {
        subtitle: Some("REVOLUTIONIZE YOUR REAL ESTATE BUSINESS TODAY"),
        cta_text: "Explore Properties",
        cta_link: "/properties",
        secondary_cta: Some(("Join Waitlist", "/contact")),
        ..Hero::new("STAY AHEAD", HERO_VIDEO)
    };

    site_layout(
        "Home",
        company,
        NavStyle::Transparent,
        None,
        html! {
            (hero)

            (Section::new("AI-Powered Real Estate Automation")
                .subtitle("Propiz.io is not just automation, it's a complete transformation. By eliminating inefficiencies, it empowers agents to focus on closing deals and growing their business.")
                .render(html! {
                    div class="grid grid-2" {
                        @for (title, body) in PITCH {
                            div { h3 { (title) } p { (body) } }
                        }
                    }
                }))

            (Section::new("Why Propiz.IO?")
                .subtitle("Our comprehensive AI-powered solutions address the key challenges faced by real estate professionals")
                .background(SectionBackground::Primary)
                .reverse()
                .render(html! {
                    div class="grid grid-2" {
                        @for (title, body) in REASONS {
                            div class="card" { h3 { (title) } p { (body) } }
                        }
                    }
                    div class="grid grid-4 features" {
                        @for feature in &company.features {
                            div class="feature" {
                                (icons::feature(&feature.icon))
                                h4 { (feature.title) }
                                p { (feature.description) }
                            }
                        }
                    }
                }))

            (Section::new("How Propiz.IO Works")
                .subtitle("A Step-by-Step Breakdown of Real Estate Automation")
                .render(html! {
                    ol class="grid grid-3 steps" {
                        @for (i, (title, body)) in STEPS.iter().enumerate() {
                            li class="card step" {
                                span class="step-number" { (i + 1) }
                                h3 { (title) }
                                p { (body) }
                            }
                        }
                    }
                    div class="cta" {
                        (Button::new("Join Our Waitlist").link("/contact").size(ButtonSize::Large))
                        p { "Be among the first agencies to implement this revolutionary technology" }
                    }
                }))

            (Section::new("What Our Clients Say")
                .subtitle("Hear from our satisfied customers")
                .background(SectionBackground::Primary)
                .reverse()
                .render(html! {
                    div class="grid grid-3" {
                        @for t in &company.testimonials {
                            figure class="card testimonial" {
                                figcaption class="testimonial-author" {
                                    img src=(t.avatar) alt=(t.role) class="avatar";
                                    div {
                                        h4 { (t.name) }
                                        p class="muted" { (t.role) }
                                    }
                                }
                                blockquote { "\u{201c}" (t.comment) "\u{201d}" }
                                (icons::rating(t.rating))
                            }
                        }
                    }
                }))

            (Section::new("Our Impact")
                .subtitle("The numbers speak for themselves")
                .compact()
                .render(html! {
                    div class="grid grid-4 stats" {
                        @for (value, label) in IMPACT {
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
