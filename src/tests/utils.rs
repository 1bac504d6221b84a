use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Fresh state from the bundled seed data, with an empty inbox.
pub fn test_state() -> AppState {
    AppState::from_seed().unwrap_or_else(|e| panic!("seed data failed to load: {e}"))
}

pub fn get(state: &AppState, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    handle(req, state).unwrap_or_else(crate::responses::error_to_response)
}

pub fn post_form(state: &AppState, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();

    handle(req, state).unwrap_or_else(crate::responses::error_to_response)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn content_type(resp: &Response) -> &str {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
