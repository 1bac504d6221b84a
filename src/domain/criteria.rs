// src/domain/criteria.rs

use std::collections::HashMap;
use thiserror::Error;

/// Upper bound the Properties page starts with.
pub const DEFAULT_MAX_PRICE: f64 = 2_000_000.0;

/// Bedroom counts offered as quick filters.
pub const BEDROOM_CHOICES: [u32; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Error, PartialEq)]
pub enum CriteriaError {
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Inclusive price bounds. The two ends are set independently, so `min > max`
/// is representable; such a range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::new(0.0, f64::INFINITY)
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_MAX_PRICE)
    }
}

/// The visitor's current search constraints. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria {
    pub search_term: String,
    pub price_range: PriceRange,
    pub bedrooms: Option<u32>,
}

impl Criteria {
    pub fn new(search_term: impl Into<String>, price_range: PriceRange, bedrooms: Option<u32>) -> Self {
        Self {
            search_term: search_term.into(),
            price_range,
            bedrooms,
        }
    }

    /// No constraints at all: every property passes.
    pub fn unbounded() -> Self {
        Self::new("", PriceRange::unbounded(), None)
    }

    /// Overlays query parameters `q`, `min_price`, `max_price` and `bedrooms`
    /// on top of `defaults`. Missing or blank values keep the default.
    pub fn from_query(
        params: &HashMap<String, String>,
        defaults: &Criteria,
    ) -> Result<Self, CriteriaError> {
        let search_term = params
            .get("q")
            .cloned()
            .unwrap_or_else(|| defaults.search_term.clone());

        let min = parse_price(params, "min_price")?.unwrap_or(defaults.price_range.min);
        let max = parse_price(params, "max_price")?.unwrap_or(defaults.price_range.max);

        let bedrooms = match non_blank(params, "bedrooms") {
            None => defaults.bedrooms,
            Some("any") => None,
            Some(raw) => Some(raw.parse::<u32>().map_err(|_| CriteriaError::InvalidNumber {
                field: "bedrooms",
                value: raw.to_string(),
            })?),
        };

        Ok(Self::new(search_term, PriceRange::new(min, max), bedrooms))
    }

    pub fn with_bedrooms(&self, bedrooms: Option<u32>) -> Self {
        Self {
            bedrooms,
            ..self.clone()
        }
    }

    /// Query string that reproduces these criteria, e.g. for the bedroom links.
    /// An open-ended max is left out.
    pub fn to_query(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        if !self.search_term.is_empty() {
            ser.append_pair("q", &self.search_term);
        }
        ser.append_pair("min_price", &self.price_range.min.to_string());
        if self.price_range.max.is_finite() {
            ser.append_pair("max_price", &self.price_range.max.to_string());
        }
        match self.bedrooms {
            Some(n) => ser.append_pair("bedrooms", &n.to_string()),
            None => ser.append_pair("bedrooms", "any"),
        };
        ser.finish()
    }
}

fn non_blank<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn parse_price(
    params: &HashMap<String, String>,
    field: &'static str,
) -> Result<Option<f64>, CriteriaError> {
    let Some(raw) = non_blank(params, field) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(Some(v)),
        _ => Err(CriteriaError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}
