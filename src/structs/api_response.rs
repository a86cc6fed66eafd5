use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(message: &str) -> ErrorResponse {
    ErrorResponse {
        error: message.to_string(),
    }
}
