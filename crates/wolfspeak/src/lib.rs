//! Speech prompts for LLM agents in a social-deduction survival game.
//!
//! `wolfspeak` turns a snapshot of the game (day, phase, events, cast,
//! deaths, observed inventory, votes, map) plus a handful of behavioral
//! knobs into a single prompt that asks a language model to speak as a
//! werewolf or a villager, then forwards that prompt to a chat completion
//! endpoint and hands back the model's text unmodified.
//!
//! # Getting started
//!
//! ```ignore
//! use wolfspeak::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> wolfspeak::Result<()> {
//!     let scenario = load_scenario("scenario.json", "S6")?;
//!     let config = PromptConfig::default().with_aggression(Level::High);
//!     let prompt = Composer::new(config.language).compose(Role::Werewolf, &scenario, &config)?;
//!
//!     let client = ChatClient::new(ClientConfig::default())?;
//!     let speech = client.complete(&prompt, &CompletionParams::default()).await?;
//!     println!("{speech}");
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`prompt`] | [`Composer`](prompt::Composer), knobs, scenario records, per-locale text banks |
//! | [`client`] | [`ChatClient`](client::ChatClient) single-turn completion call |
//! | [`catalog`] | Scenario documents and lookup by id |
//! | [`error`] | [`ComposeError`](error::ComposeError), [`ClientError`](error::ClientError), [`CatalogError`](error::CatalogError) |
//!
//! Composition is pure and deterministic. The client performs exactly one
//! request per call and never retries; retry policy belongs to the caller.

pub mod catalog;
pub mod client;
pub mod error;
pub mod prelude;
pub mod prompt;

pub use error::{Error, Result};
