//! Error taxonomy.
//!
//! Composer input errors ([`ComposeError`]) and client errors
//! ([`ClientError`]) are kept apart: the former are caller mistakes reported
//! before anything is rendered, the latter are fatal to a single completion
//! call. Nothing in this crate retries.

use thiserror::Error;

/// Caller-input errors raised while composing a prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("invalid role '{0}': expected 'werewolf' or 'villager'")]
    InvalidRole(String),

    #[error("invalid value {value} for '{knob}'")]
    InvalidConfigValue { knob: &'static str, value: String },

    /// Only raised when strict profession checking is enabled.
    #[error("claimed roles with no capability entry: {}", .0.join(", "))]
    UnknownProfession(Vec<String>),
}

/// Failure of the provider round-trip itself.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("malformed completion response: {0}")]
    Malformed(String),
}

/// Errors from [`ChatClient::complete`](crate::client::ChatClient::complete).
#[derive(Debug, Error)]
pub enum ClientError {
    /// `var` names the environment variable; `None` for a key supplied
    /// directly that turned out empty.
    #[error("{}", describe_missing(.var))]
    MissingCredential { var: Option<String> },

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

fn describe_missing(var: &Option<String>) -> String {
    match var {
        Some(var) => format!("{var} is not set in environment"),
        None => "supplied API key is empty".to_string(),
    }
}

/// Errors from scenario document lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read scenario file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("scenario id not found: {0}")]
    NotFound(String),

    #[error("scenario '{id}' is malformed: {source}")]
    Record {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Crate-level error used by the driver.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid overrides: {0}")]
    Overrides(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_value_names_the_knob() {
        let err = ComposeError::InvalidConfigValue {
            knob: "aggression",
            value: "\"extreme\"".into(),
        };
        assert_eq!(err.to_string(), "invalid value \"extreme\" for 'aggression'");
    }

    #[test]
    fn unknown_profession_lists_labels() {
        let err = ComposeError::UnknownProfession(vec!["baker".into(), "tinker".into()]);
        assert!(err.to_string().ends_with("baker, tinker"));
    }

    #[test]
    fn missing_credential_message_depends_on_source() {
        let env = ClientError::MissingCredential {
            var: Some("OPENAI_API_KEY".into()),
        };
        assert_eq!(env.to_string(), "OPENAI_API_KEY is not set in environment");

        let direct = ClientError::MissingCredential { var: None };
        assert_eq!(direct.to_string(), "supplied API key is empty");
    }

    #[test]
    fn completion_errors_convert_into_client_errors() {
        let err: ClientError = CompletionError::Malformed("missing choices".into()).into();
        assert!(matches!(err, ClientError::Completion(CompletionError::Malformed(_))));
        assert_eq!(
            err.to_string(),
            "malformed completion response: missing choices"
        );
    }
}
