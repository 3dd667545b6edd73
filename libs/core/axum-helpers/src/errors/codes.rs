//! Numeric error codes attached to error logs.
//!
//! Codes never appear in response bodies; they exist so log aggregation can
//! group failures without parsing messages.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Payload failed one or more validation rules
    ValidationError,

    /// Body was not JSON or did not match the expected field types
    InvalidJson,

    /// Requested resource id does not resolve
    NotFound,

    /// No route matches the request path
    RouteNotFound,

    // Database errors (2000-2999)
    /// Datastore rejected or failed the operation
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1002,
            Self::NotFound => 1004,
            Self::RouteNotFound => 1010,
            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidJson => "Invalid JSON payload",
            Self::NotFound => "Resource not found",
            Self::RouteNotFound => "The requested resource was not found",
            Self::DatabaseError => "Database operation failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [ErrorCode; 5] = [
        ErrorCode::ValidationError,
        ErrorCode::InvalidJson,
        ErrorCode::NotFound,
        ErrorCode::RouteNotFound,
        ErrorCode::DatabaseError,
    ];

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<i32> = ALL.iter().map(ErrorCode::code).collect();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn test_client_and_database_ranges() {
        for code in ALL {
            let n = code.code();
            match code {
                ErrorCode::DatabaseError => assert!((2000..3000).contains(&n)),
                _ => assert!((1000..2000).contains(&n)),
            }
        }
    }

    #[test]
    fn test_serializes_like_as_str() {
        for code in ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
