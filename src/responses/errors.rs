use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, DOCTYPE};
use serde_json::json;
use tracing::{error, warn};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML error page
pub fn error_to_response(err: ServerError) -> Response {
    log_error(&err);
    html_error_response(err.status(), &err.public_message())
}

/// Same as `error_to_response`, for the `/api` routes.
pub fn json_error_response(err: ServerError) -> Response {
    log_error(&err);
    let body = json!({ "error": err.public_message() }).to_string();

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("{\"error\":\"Internal Server Error\"}")))
}

fn log_error(err: &ServerError) {
    match err {
        ServerError::Internal(_) => error!(error = %err, "request failed"),
        _ => warn!(error = %err, "request rejected"),
    }
}

/// Build a basic HTML error page
fn html_error_response(status: u16, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
