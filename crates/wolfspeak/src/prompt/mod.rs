//! Prompt composition: knobs, scenario records, text banks, and assembly.
//!
//! The prompt system has four layers:
//!
//! 1. **[`PromptBuilder`]**: joins labeled blocks with blank lines.
//! 2. **[`TextBank`]**: per-locale static text (labels, rules, strategy
//!    bundles, capability table, knob sentences, examples).
//! 3. **[`PromptConfig`]**: closed-domain knobs merged from flat overrides.
//! 4. **[`Composer`]**: renders a [`Scenario`] for a [`Role`] in fixed
//!    section order.

pub mod builder;
pub mod compose;
pub mod config;
pub mod locale;
pub mod scenario;

pub use builder::PromptBuilder;
pub use compose::{Composer, compose};
pub use config::{Language, Level, OutputStyle, PersonaTone, PromptConfig, Role};
pub use locale::TextBank;
pub use scenario::{CastMember, Death, MapInfo, Phase, Scenario};
