//! Errors raised while building HAL representations

use thiserror::Error;

/// Errors that can occur while mapping, linking or enriching resources
#[derive(Debug, Error)]
pub enum HalError {
    #[error("Base URI already set to {current}, refusing to replace it with {attempted}")]
    BaseUriAlreadySet { current: String, attempted: String },

    #[error("Base URI not configured; links cannot be rendered")]
    BaseUriNotConfigured,

    #[error("Invalid base URI: {0}")]
    InvalidBaseUri(String),

    #[error("Enricher {0} declares no target type")]
    MissingTargetType(String),

    #[error("Missing required context of type {0}")]
    MissingContext(&'static str),

    #[error("Ambiguous context: {count} instances of type {type_name}")]
    AmbiguousContext { type_name: &'static str, count: usize },

    #[error("Link {rel} already present with href {existing}")]
    DuplicateLink { rel: String, existing: String },

    #[error("Embedded resource {0} already present")]
    DuplicateEmbedded(String),

    #[error("Invalid representation: {0}")]
    InvalidRepresentation(String),

    #[error("Configuration link {0} collides with a built-in index link")]
    ReservedLink(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for HAL operations
pub type HalResult<T> = Result<T, HalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_context_names_the_type() {
        let err = HalError::MissingContext("scm_hal::domain::Tag");
        assert_eq!(
            err.to_string(),
            "Missing required context of type scm_hal::domain::Tag"
        );
    }

    #[test]
    fn duplicate_link_reports_existing_href() {
        let err = HalError::DuplicateLink {
            rel: "self".to_string(),
            existing: "/v2/users/ich".to_string(),
        };
        assert!(err.to_string().contains("/v2/users/ich"));
    }
}
