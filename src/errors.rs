use crate::structs::api_response::error_response;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use mongodb::error::ErrorKind;
use std::num::ParseIntError;
use tracing::{error, warn};

/// Everything that can end a request early.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Connecting to or querying MongoDB failed.
    #[error("player store query failed: {0}")]
    Store(#[source] mongodb::error::Error),

    /// The query worked but a returned document lacks `id`, `apparitions`
    /// or an appearance `date`.
    #[error("stored player document could not be read: {0}")]
    MalformedDocument(#[source] mongodb::error::Error),

    #[error("player '{id}' not found")]
    NotFound { id: String },

    /// At least one appearance of the player is flagged anonymous.
    #[error("player '{id}' has anonymous appearances")]
    Unauthorized { id: String },

    #[error("malformed appearance date '{value}': {source}")]
    MalformedDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("player '{id}' has no appearances")]
    EmptyAppearances { id: String },

    /// The latest appearance matches neither score layout.
    #[error("appearance of player '{id}' dated '{date}' has unreadable scores: {source}")]
    MalformedAppearance {
        id: String,
        date: String,
        source: serde_json::Error,
    },
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        if matches!(*err.kind, ErrorKind::BsonDeserialization(_)) {
            ApiError::MalformedDocument(err)
        } else {
            ApiError::Store(err)
        }
    }
}

impl ApiError {
    /// Message sent back to the client. Store failures stay generic.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Store(_) => "Failed to query the player database.".to_string(),
            ApiError::NotFound { .. } => "Player not found.".to_string(),
            ApiError::Unauthorized { .. } => "This player's details are private.".to_string(),
            ApiError::MalformedDocument(_)
            | ApiError::MalformedDate { .. }
            | ApiError::EmptyAppearances { .. }
            | ApiError::MalformedAppearance { .. } => self.to_string(),
        }
    }

    pub fn log(&self) {
        if self.status_code().is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Store(_)
            | ApiError::MalformedDocument(_)
            | ApiError::MalformedDate { .. }
            | ApiError::EmptyAppearances { .. }
            | ApiError::MalformedAppearance { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(error_response(&self.public_message()))
    }
}

/// Startup failures while reading the environment.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    MissingVar(&'static str),

    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}
