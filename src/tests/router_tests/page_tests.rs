use crate::tests::utils::{body_string, content_type, get, test_state};

#[test]
fn home_page_renders_hero_and_testimonials() {
    let state = test_state();
    let resp = get(&state, "/");

    assert_eq!(resp.status(), 200);
    assert!(content_type(&resp).starts_with("text/html"));

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("STAY AHEAD"));
    assert!(body.contains("navbar-transparent"));
    assert!(body.contains(r#"href="/properties""#));
    assert!(body.contains("Why Propiz.IO?"));
    assert!(body.contains("Smart Property Search"));
    assert!(body.contains("Michael Chen"));
    assert!(body.contains("4 out of 5 stars"));
}

#[test]
fn about_page_uses_company_info() {
    let state = test_state();
    let resp = get(&state, "/about");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("About Propiz"));
    assert!(body.contains("Founded in 2020, Propiz has grown"));
    assert!(body.contains("team of 120 dedicated professionals based in San Francisco, CA"));
    assert!(body.contains("Customer-First"));
    assert!(body.contains("CEO &amp; Founder"));
    assert!(body.contains("15,000+"));
    assert!(body.contains("25,000+"));
    assert!(body.contains("navbar-solid"));
    assert!(body.contains(r#"aria-current="page""#));
    assert!(body.contains("section-overlay"));
    assert!(body.contains("background-image: url('https://images.unsplash.com/photo-1577415124269"));
}

#[test]
fn trailing_slash_is_ignored() {
    let state = test_state();
    assert_eq!(get(&state, "/about/").status(), 200);
}

#[test]
fn property_detail_page() {
    let state = test_state();
    let resp = get(&state, "/properties/2");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Downtown Penthouse"));
    assert!(body.contains("$890,000"));
    assert!(body.contains("3.5 ba"));
    assert!(body.contains("2800 sqft"));
    assert!(body.contains("btn-sm"));
}

#[test]
fn unknown_property_is_404() {
    let state = test_state();
    let resp = get(&state, "/properties/404");

    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn unknown_route_is_404() {
    let state = test_state();
    assert_eq!(get(&state, "/login").status(), 404);
}

#[test]
fn stylesheet_is_served() {
    let state = test_state();
    let resp = get(&state, "/static/main.css");

    assert_eq!(resp.status(), 200);
    assert!(content_type(&resp).starts_with("text/css"));
    assert!(body_string(resp).contains(".property-card"));
}
