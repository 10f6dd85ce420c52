use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unauthorized - token was rejected")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        // Back off to a char boundary; a fixed byte cut would panic
        // mid-codepoint.
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..end],
            body.len()
        )
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(truncated),
            404 => ApiError::NotFound(truncated),
            500..=599 => ApiError::ServerError(truncated),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }

    /// Whether this failure means the credential was rejected. The
    /// recovery policy branches on this and nothing else.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        let status = |code: u16| reqwest::StatusCode::from_u16(code).unwrap();

        assert!(matches!(
            ApiError::from_status(status(401), ""),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(status(403), "nope"),
            ApiError::AccessDenied(_)
        ));
        assert!(matches!(
            ApiError::from_status(status(404), ""),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(status(500), "boom"),
            ApiError::ServerError(_)
        ));
        assert!(matches!(
            ApiError::from_status(status(418), ""),
            ApiError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_only_401_is_unauthorized() {
        let status = |code: u16| reqwest::StatusCode::from_u16(code).unwrap();
        assert!(ApiError::from_status(status(401), "").is_unauthorized());
        assert!(!ApiError::from_status(status(403), "").is_unauthorized());
        assert!(!ApiError::from_status(status(500), "").is_unauthorized());
    }

    #[test]
    fn test_truncation_respects_multibyte_chars() {
        // 200 euro signs = 600 bytes; byte 500 falls inside a codepoint
        let body = "\u{20ac}".repeat(200);
        let err = ApiError::from_status(reqwest::StatusCode::from_u16(500).unwrap(), &body);
        let message = err.to_string();
        assert!(message.contains("truncated"));
        assert!(message.contains("600 total bytes"));
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(2000);
        let err = ApiError::from_status(reqwest::StatusCode::from_u16(500).unwrap(), &body);
        let message = err.to_string();
        assert!(message.len() < 600);
        assert!(message.contains("truncated"));
    }
}
