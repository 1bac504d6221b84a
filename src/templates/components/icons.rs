// Inline stroke icons (24x24).
use maud::{html, Markup};

fn stroke_icon(class: &str, paths: &[&str]) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            class=(class)
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            aria-hidden="true"
        {
            @for d in paths {
                path d=(d) {}
            }
        }
    }
}

pub fn location() -> Markup {
    stroke_icon(
        "icon",
        &[
            "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
            "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
        ],
    )
}

pub fn bed() -> Markup {
    stroke_icon(
        "icon",
        &["M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6"],
    )
}

pub fn bath() -> Markup {
    stroke_icon(
        "icon",
        &["M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z"],
    )
}

pub fn area() -> Markup {
    stroke_icon(
        "icon",
        &["M4 8V4m0 0h4M4 4l5 5m11-1V4m0 0h-4m4 0l-5 5M4 16v4m0 0h4m-4 0l5-5m11 5v-4m0 4h-4m4 0l-5-5"],
    )
}

pub fn sad_face() -> Markup {
    stroke_icon(
        "icon icon-lg",
        &["M9.172 16.172a4 4 0 015.656 0M9 10h.01M15 10h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"],
    )
}

pub fn arrow_down() -> Markup {
    stroke_icon("icon bounce", &["M19 14l-7 7m0 0l-7-7m7 7V3"])
}

/// Icon for a company feature, keyed the way the company data names them.
pub fn feature(key: &str) -> Markup {
    let d = match key {
        "search" => "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
        "vr" => "M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z",
        "calculator" => "M9 7h6m0 10v-3m-3 3h.01M9 17h.01M9 14h.01M12 14h.01M15 11h.01M12 11h.01M9 11h.01M7 21h10a2 2 0 002-2V5a2 2 0 00-2-2H7a2 2 0 00-2 2v14a2 2 0 002 2z",
        "shield" => "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
        _ => "M13 10V3L4 14h7v7l9-11h-7z",
    };
    stroke_icon("icon icon-feature", &[d])
}

/// Five stars, the first `filled` of them highlighted.
pub fn rating(filled: u8) -> Markup {
    html! {
        div class="rating" aria-label=(format!("{filled} out of 5 stars")) {
            @for i in 0..5u8 {
                svg
                    xmlns="http://www.w3.org/2000/svg"
                    class=(if i < filled { "star star-on" } else { "star" })
                    fill="currentColor"
                    viewBox="0 0 20 20"
                    aria-hidden="true"
                {
                    path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z" {}
                }
            }
        }
    }
}
