use crate::domain::{filter_properties, Criteria};
use crate::errors::ServerError;
use crate::responses::{
    css_response, html_response, html_response_with_status, json_error_response, json_response,
    ResultResp,
};
use crate::services::{ContactForm, FieldErrors};
use crate::state::AppState;
use crate::templates::{self, pages::ContactVm};
use astra::Request;
use chrono::Utc;
use std::collections::HashMap;
use std::io::Read;

const STYLESHEET: &str = include_str!("../static/main.css");

/// Contact form bodies are small; anything bigger is refused.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().trim_end_matches('/').to_owned();
    let query = parse_query(&req);

    if let Some(rest) = path
        .strip_prefix("/api")
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
    {
        return Ok(match handle_api(&method, rest, &query, state) {
            Ok(resp) => resp,
            Err(err) => json_error_response(err),
        });
    }

    let company = state.company.get_company_info();

    match (method.as_str(), path.as_str()) {
        ("GET", "") => html_response(templates::pages::home_page(company)),
        ("GET", "/about") => html_response(templates::pages::about_page(company)),

        ("GET", "/properties") => {
            let criteria = Criteria::from_query(&query, &Criteria::default())
                .map_err(|e| ServerError::BadRequest(e.to_string()))?;
            let all = state.properties.get_properties();
            let results = filter_properties(all, &criteria);

            html_response(templates::pages::properties_page(
                company,
                &templates::pages::PropertiesVm {
                    criteria: &criteria,
                    results: &results,
                    total: all.len(),
                },
            ))
        }

        ("GET", p) if p.starts_with("/properties/") => {
            let id = &p["/properties/".len()..];
            let property = state
                .properties
                .get_property_by_id(id)
                .ok_or(ServerError::NotFound)?;
            html_response(templates::pages::property_detail_page(company, property))
        }

        ("GET", "/contact") => {
            let form = ContactForm::default();
            let errors = FieldErrors::new();
            html_response(templates::pages::contact_page(
                company,
                &ContactVm::Editing {
                    form: &form,
                    errors: &errors,
                },
            ))
        }

        ("POST", "/contact") => {
            let form = ContactForm::from_pairs(&read_form(req)?);
            match state.inbox.submit(form.clone(), Utc::now()) {
                Ok(message) => html_response(templates::pages::contact_page(
                    company,
                    &ContactVm::Sent(&message),
                )),
                Err(errors) => html_response_with_status(
                    422,
                    templates::pages::contact_page(
                        company,
                        &ContactVm::Editing {
                            form: &form,
                            errors: &errors,
                        },
                    ),
                ),
            }
        }

        ("GET", "/static/main.css") => css_response(STYLESHEET),

        _ => Err(ServerError::NotFound),
    }
}

/// JSON mirror of the data service, mounted under `/api`.
fn handle_api(
    method: &str,
    path: &str,
    query: &HashMap<String, String>,
    state: &AppState,
) -> ResultResp {
    match (method, path) {
        ("GET", "/properties") => {
            let criteria = Criteria::from_query(query, &Criteria::unbounded())
                .map_err(|e| ServerError::BadRequest(e.to_string()))?;
            let results = filter_properties(state.properties.get_properties(), &criteria);
            json_response(200, &results)
        }
        ("GET", p) if p.starts_with("/properties/") => {
            let id = &p["/properties/".len()..];
            let property = state
                .properties
                .get_property_by_id(id)
                .ok_or(ServerError::NotFound)?;
            json_response(200, property)
        }
        ("GET", "/search") => {
            let q = query.get("q").map(String::as_str).unwrap_or("");
            json_response(200, &state.properties.search_properties(q))
        }
        ("GET", "/company") => json_response(200, state.company.get_company_info()),
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = req.into_body();
    let mut raw = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form is too large".into()));
    }

    Ok(url::form_urlencoded::parse(&raw).into_owned().collect())
}
