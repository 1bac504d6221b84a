// errors.rs
use thiserror::Error;

/// Errors originating from request handling
/// (routing, missing resources, bad input, response building).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Internal(_) => 500,
        }
    }

    /// Message safe to show to the visitor. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::NotFound => "Not Found".to_string(),
            ServerError::BadRequest(msg) => msg.clone(),
            ServerError::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}
