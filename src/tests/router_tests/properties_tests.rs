use crate::tests::utils::{body_string, get, test_state};

fn card_count(body: &str) -> usize {
    body.matches(r#"class="property-card""#).count()
}

#[test]
fn lists_everything_by_default() {
    let state = test_state();
    let resp = get(&state, "/properties");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert_eq!(card_count(&body), 6);
    assert!(body.contains("Showing 6 of 6 properties"));
    assert!(body.contains("$1,250,000"));
    assert!(body.contains(r#"value="2000000""#));
}

#[test]
fn search_is_case_insensitive() {
    let state = test_state();
    let body = body_string(get(&state, "/properties?q=MALIBU"));

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Modern Luxury Villa"));
    assert!(body.contains(r#"value="MALIBU""#));
}

#[test]
fn price_range_filters_in_source_order() {
    let state = test_state();
    let body = body_string(get(&state, "/properties?min_price=400000&max_price=700000"));

    assert_eq!(card_count(&body), 3);
    let aspen = body.find("Countryside Retreat").unwrap();
    let miami = body.find("Beachfront Condo").unwrap();
    let chicago = body.find("Urban Loft").unwrap();
    assert!(aspen < miami && miami < chicago);
}

#[test]
fn bedroom_filter_is_exact() {
    let state = test_state();
    let body = body_string(get(&state, "/properties?bedrooms=3"));

    assert_eq!(card_count(&body), 2);
    assert!(body.contains("Downtown Penthouse"));
    assert!(body.contains("Mountain Cabin"));
    assert!(body.contains("chip chip-selected"));
}

#[test]
fn no_match_shows_empty_state() {
    let state = test_state();
    let body = body_string(get(&state, "/properties?q=xyz-nonexistent"));

    assert_eq!(card_count(&body), 0);
    assert!(body.contains("No properties found"));
    assert!(body.contains("Try adjusting your search filters"));
}

#[test]
fn inverted_range_is_empty_with_notice() {
    let state = test_state();
    let body = body_string(get(&state, "/properties?min_price=700000&max_price=400000"));

    assert_eq!(card_count(&body), 0);
    assert!(body.contains("minimum price is higher than the maximum price"));
}

#[test]
fn bad_number_is_400() {
    let state = test_state();
    let resp = get(&state, "/properties?max_price=lots");

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("max_price must be a number"));
}

#[test]
fn search_term_keeps_trailing_space() {
    let state = test_state();
    let body = body_string(get(&state, "/properties?q=ny+"));

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Beachfront Condo"));
    assert!(!body.contains("Downtown Penthouse"));
    assert!(body.contains(r#"value="ny ""#));
}
