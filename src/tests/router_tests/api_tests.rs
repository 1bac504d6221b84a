use crate::domain::{CompanyInfo, Property};
use crate::tests::utils::{body_string, content_type, get, test_state};

fn ids(body: &str) -> Vec<String> {
    let props: Vec<Property> = serde_json::from_str(body).expect("property list json");
    props.into_iter().map(|p| p.id).collect()
}

#[test]
fn api_lists_all_properties_unbounded() {
    let state = test_state();
    let resp = get(&state, "/api/properties");

    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "application/json");
    assert_eq!(ids(&body_string(resp)), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn api_applies_the_same_filters() {
    let state = test_state();

    let body = body_string(get(&state, "/api/properties?bedrooms=3"));
    assert_eq!(ids(&body), vec!["2", "6"]);

    let body = body_string(get(&state, "/api/properties?min_price=2000000&max_price=3000000"));
    assert!(ids(&body).is_empty());
}

#[test]
fn api_uses_camel_case_fields() {
    let state = test_state();
    let body = body_string(get(&state, "/api/properties/4"));

    assert!(body.contains(r#""imageUrl""#));
    let p: Property = serde_json::from_str(&body).unwrap();
    assert_eq!(p.title, "Beachfront Condo");
}

#[test]
fn api_missing_property_is_json_404() {
    let state = test_state();
    let resp = get(&state, "/api/properties/nope");

    assert_eq!(resp.status(), 404);
    assert_eq!(content_type(&resp), "application/json");
    let v: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(v["error"], "Not Found");
}

#[test]
fn api_bad_filter_is_json_400() {
    let state = test_state();
    let resp = get(&state, "/api/properties?bedrooms=many");

    assert_eq!(resp.status(), 400);
    assert_eq!(content_type(&resp), "application/json");
}

#[test]
fn api_company_info() {
    let state = test_state();
    let body = body_string(get(&state, "/api/company"));

    assert!(body.contains(r#""propertiesSold":15000"#));
    let info: CompanyInfo = serde_json::from_str(&body).unwrap();
    assert_eq!(info.headquarters, "San Francisco, CA");
}

#[test]
fn api_search_is_text_only() {
    let state = test_state();
    let body = body_string(get(&state, "/api/search?q=Ocean"));
    assert_eq!(ids(&body), vec!["1", "4"]);

    let body = body_string(get(&state, "/api/search"));
    assert_eq!(ids(&body).len(), 6);
}
