//! Behavioral knobs and the role tag.
//!
//! Every knob is a closed enum. Overrides arrive as a flat JSON object and are
//! merged over [`PromptConfig::default`] one key at a time: known keys must
//! deserialize into their knob's domain or the merge fails with
//! [`ComposeError::InvalidConfigValue`]; unknown keys are ignored.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::ComposeError;

/// Faction the composed prompt speaks for.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Werewolf,
    Villager,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Werewolf => "werewolf",
            Role::Villager => "villager",
        }
    }
}

impl FromStr for Role {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "werewolf" => Ok(Role::Werewolf),
            "villager" => Ok(Role::Villager),
            other => Err(ComposeError::InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locale of the static text bank.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    Zh,
    En,
}

/// How long the generated speech should be.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// One to three sentences.
    #[default]
    Short,
    /// Two to five sentences.
    Normal,
}

/// Three-step intensity shared by `risk_tolerance` and `aggression`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PersonaTone {
    Calm,
    Assertive,
    Apologetic,
    #[default]
    Analytical,
}

/// Resolved knob values for one composition.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PromptConfig {
    /// Default: `ja`.
    pub language: Language,
    /// Default: `short`.
    pub output_style: OutputStyle,
    /// Default: `medium`.
    pub risk_tolerance: Level,
    /// Default: `medium`.
    pub aggression: Level,
    /// Default: `analytical`.
    pub persona_tone: PersonaTone,
    /// Default: `false`.
    pub include_examples: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            language: Language::Ja,
            output_style: OutputStyle::Short,
            risk_tolerance: Level::Medium,
            aggression: Level::Medium,
            persona_tone: PersonaTone::Analytical,
            include_examples: false,
        }
    }
}

impl PromptConfig {
    /// Defaults with `overrides` merged on top.
    pub fn from_overrides(overrides: &Map<String, Value>) -> Result<Self, ComposeError> {
        let mut config = Self::default();
        config.apply(overrides)?;
        Ok(config)
    }

    /// Shallow-merge `overrides` into this config. Override wins.
    ///
    /// On error the config may be partially updated; callers that need
    /// all-or-nothing semantics should merge into a clone.
    pub fn apply(&mut self, overrides: &Map<String, Value>) -> Result<(), ComposeError> {
        for (key, value) in overrides {
            match key.as_str() {
                "language" => self.language = knob("language", value)?,
                "output_style" => self.output_style = knob("output_style", value)?,
                "risk_tolerance" => self.risk_tolerance = knob("risk_tolerance", value)?,
                "aggression" => self.aggression = knob("aggression", value)?,
                "persona_tone" => self.persona_tone = knob("persona_tone", value)?,
                "include_examples" => self.include_examples = knob("include_examples", value)?,
                other => warn!(key = other, "ignoring unknown prompt override"),
            }
        }
        Ok(())
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_aggression(mut self, aggression: Level) -> Self {
        self.aggression = aggression;
        self
    }

    pub fn with_risk_tolerance(mut self, risk: Level) -> Self {
        self.risk_tolerance = risk;
        self
    }

    pub fn with_examples(mut self, include: bool) -> Self {
        self.include_examples = include;
        self
    }
}

fn knob<T: DeserializeOwned>(name: &'static str, value: &Value) -> Result<T, ComposeError> {
    T::deserialize(value).map_err(|_| ComposeError::InvalidConfigValue {
        knob: name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn overrides(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("overrides must be an object"),
        }
    }

    #[test]
    fn defaults_match_reference_behavior() {
        let config = PromptConfig::default();
        assert_eq!(config.language, Language::Ja);
        assert_eq!(config.output_style, OutputStyle::Short);
        assert_eq!(config.risk_tolerance, Level::Medium);
        assert_eq!(config.aggression, Level::Medium);
        assert_eq!(config.persona_tone, PersonaTone::Analytical);
        assert!(!config.include_examples);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let config = PromptConfig::from_overrides(&overrides(json!({
            "aggression": "high",
            "persona_tone": "calm",
            "include_examples": true,
            "language": "zh",
        })))
        .unwrap();
        assert_eq!(config.aggression, Level::High);
        assert_eq!(config.persona_tone, PersonaTone::Calm);
        assert!(config.include_examples);
        assert_eq!(config.language, Language::Zh);
        // Untouched knobs keep their defaults.
        assert_eq!(config.risk_tolerance, Level::Medium);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config =
            PromptConfig::from_overrides(&overrides(json!({"verbosity": "max"}))).unwrap();
        assert_eq!(config, PromptConfig::default());
    }

    #[test]
    fn out_of_domain_value_is_rejected() {
        let err = PromptConfig::from_overrides(&overrides(json!({"aggression": "extreme"})))
            .unwrap_err();
        assert_eq!(
            err,
            ComposeError::InvalidConfigValue {
                knob: "aggression",
                value: "\"extreme\"".into(),
            }
        );
    }

    #[test]
    fn wrong_json_type_is_rejected() {
        let err = PromptConfig::from_overrides(&overrides(json!({"include_examples": "yes"})))
            .unwrap_err();
        assert!(matches!(
            err,
            ComposeError::InvalidConfigValue {
                knob: "include_examples",
                ..
            }
        ));
    }

    #[test]
    fn role_parsing() {
        assert_eq!("werewolf".parse::<Role>().unwrap(), Role::Werewolf);
        assert_eq!("villager".parse::<Role>().unwrap(), Role::Villager);
        assert_eq!(
            "seer".parse::<Role>().unwrap_err(),
            ComposeError::InvalidRole("seer".into())
        );
    }
}
