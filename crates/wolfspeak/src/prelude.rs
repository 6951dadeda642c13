//! Convenience re-exports for common usage.
//!
//! ```ignore
//! use wolfspeak::prelude::*;
//! ```

// Composition
pub use crate::prompt::{
    Composer, Language, Level, OutputStyle, PersonaTone, PromptConfig, Role, Scenario, compose,
};

// Completion
pub use crate::client::{ChatClient, ClientConfig, CompletionParams, Credential};

// Scenario lookup
pub use crate::catalog::{ScenarioDocument, load_scenario};

// Errors
pub use crate::error::{CatalogError, ClientError, CompletionError, ComposeError, Error};
