//! Section assembly.
//!
//! [`Composer`] renders a scenario into one prompt string with the section
//! order fixed:
//!
//! 1. system directives
//! 2. rules summary
//! 3. capabilities of the claimed professions
//! 4. behavior model (role bundle plus knob sentences)
//! 5. context
//! 6. objective
//! 7. output constraint reminder
//! 8. examples, only when `include_examples` is set
//! 9. final directive
//!
//! Composition is pure: no I/O, no caching, and identical inputs yield
//! byte-identical output.

use serde_json::{Map, Value};
use tracing::debug;

use super::builder::{PromptBuilder, bullets, nested_bullets};
use super::config::{Language, PromptConfig, Role};
use super::locale::TextBank;
use super::scenario::{Phase, Scenario, isolate};
use crate::error::ComposeError;

/// Prompt composer bound to one locale's text bank.
#[derive(Debug, Clone, Copy)]
pub struct Composer {
    language: Language,
    bank: &'static TextBank,
    strict_professions: bool,
}

impl Composer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            bank: TextBank::for_language(language),
            strict_professions: false,
        }
    }

    /// Fail with [`ComposeError::UnknownProfession`] when a claimed role has
    /// no capability entry, instead of silently dropping it.
    pub fn strict_professions(mut self, strict: bool) -> Self {
        self.strict_professions = strict;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn bank(&self) -> &'static TextBank {
        self.bank
    }

    /// Render the prompt for `role`.
    ///
    /// The composer's own locale is used; `config.language` only matters to
    /// callers that pick a composer from a config, as [`compose`] does.
    pub fn compose(
        &self,
        role: Role,
        scenario: &Scenario,
        config: &PromptConfig,
    ) -> Result<String, ComposeError> {
        if self.strict_professions {
            let unknown = self.unknown_professions(scenario);
            if !unknown.is_empty() {
                return Err(ComposeError::UnknownProfession(unknown));
            }
        }

        let labels = &self.bank.labels;
        let builder = PromptBuilder::new()
            .section(labels.system, self.system_directives(config))
            .section(labels.rules, self.bank.rules)
            .section(labels.capabilities, self.capabilities(scenario))
            .section(&self.bank.model_label(role), self.behavior_model(role, config))
            .section(labels.context, self.context(scenario))
            .section(labels.objective, bullets(self.bank.objective))
            .section(labels.speech_only, bullets(self.bank.speech_only))
            .section_if(config.include_examples, labels.examples, || {
                bullets(self.bank.role(role).examples)
            })
            .raw(self.final_directive(role, config));

        let sections = builder.len();
        let prompt = builder.build();
        debug!(
            role = role.as_str(),
            language = ?self.language,
            sections,
            bytes = prompt.len(),
            "composed speech prompt"
        );
        Ok(prompt)
    }

    /// Claimed roles with no capability entry, sorted and deduplicated.
    pub fn unknown_professions(&self, scenario: &Scenario) -> Vec<String> {
        scenario
            .claimed_roles()
            .into_iter()
            .filter(|r| self.bank.capability(r).is_none())
            .map(str::to_string)
            .collect()
    }

    fn system_directives(&self, config: &PromptConfig) -> String {
        let framing = self
            .bank
            .task_framing
            .replace("{length}", self.bank.length_hint.get(config.output_style));
        bullets(std::iter::once(framing.as_str()).chain(self.bank.directives.iter().copied()))
    }

    /// One line per capability entry. A profession claimed under both its
    /// label and its id is listed once, under the first claim in sort order.
    fn capabilities(&self, scenario: &Scenario) -> String {
        let mut lines = Vec::new();
        let mut seen = Vec::new();
        for claimed in scenario.claimed_roles() {
            match self.bank.capability(claimed) {
                Some(cap) if seen.contains(&cap.id) => {
                    debug!(claimed, id = cap.id, "capability already listed");
                }
                Some(cap) => {
                    seen.push(cap.id);
                    lines.push(format!(
                        "{}: {}",
                        isolate(claimed),
                        cap.abilities.join(", ")
                    ));
                }
                None => debug!(claimed, "no capability entry for claimed role"),
            }
        }
        bullets(lines)
    }

    fn behavior_model(&self, role: Role, config: &PromptConfig) -> String {
        let bundle = self.bank.role(role);
        let terms = &self.bank.terms;
        [
            format!("- {}: {}", terms.role, bundle.description),
            nested_bullets(terms.core, bundle.core),
            nested_bullets(
                &format!("{}({})", terms.tactics, config.aggression),
                bundle.tactics.get(config.aggression),
            ),
            bullets([
                self.bank.risk.get(config.risk_tolerance),
                self.bank.aggression.get(config.aggression),
                self.bank.tone.get(config.persona_tone),
            ]),
        ]
        .join("\n")
    }

    fn context(&self, scenario: &Scenario) -> String {
        let terms = &self.bank.terms;
        let day = scenario
            .day
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let phase = match scenario.phase {
            Some(Phase::Day) => terms.phase_day,
            Some(Phase::Night) => terms.phase_night,
            None => "-",
        };

        let events = scenario.events.iter().map(|e| isolate(e));
        let deaths = scenario.deaths.iter().map(|d| {
            format!(
                "{}({}) / {}: {}",
                isolate(&d.name),
                isolate(&d.cause_reported),
                terms.found_by,
                isolate(&d.found_by)
            )
        });
        let inventory = scenario.inventory_observed.iter().map(|(name, items)| {
            let items: Vec<_> = items.iter().map(|i| isolate(i)).collect();
            format!("{}: {}", isolate(name), items.join(", "))
        });
        let votes = scenario
            .votes_so_far
            .iter()
            .map(|(name, count)| format!("{}: {count}{}", isolate(name), terms.vote_unit));
        let camp_level = scenario
            .camp_level
            .map_or_else(|| "-".to_string(), |l| l.to_string());

        [
            format!("- {}: {day} / {}: {phase}", terms.day, terms.phase),
            nested_bullets(terms.events, events),
            nested_bullets(terms.deaths, deaths),
            nested_bullets(terms.inventory, inventory),
            nested_bullets(terms.votes, votes),
            format!("- {}: {camp_level}", terms.camp_level),
            format!("- {}: {}", terms.map, self.map_summary(scenario)),
        ]
        .join("\n")
    }

    fn map_summary(&self, scenario: &Scenario) -> String {
        let map = &scenario.map_info;
        let camp = map.camp_tile.as_deref().map_or("-".into(), isolate);
        let hotspots: Vec<_> = map.poison_hotspots.iter().map(|t| isolate(t)).collect();
        let mut summary = format!(
            "camp={camp}, {}={}",
            self.bank.terms.hotspots,
            hotspots.join(", ")
        );
        if let Some(rule) = map.distance_rule.as_deref().filter(|r| !r.is_empty()) {
            summary.push_str(&format!(", {}: {}", self.bank.terms.distance, isolate(rule)));
        }
        summary
    }

    fn final_directive(&self, role: Role, config: &PromptConfig) -> String {
        self.bank
            .final_directive
            .replace("{role}", self.bank.role(role).label)
            .replace("{sentences}", self.bank.sentence_range.get(config.output_style))
    }
}

/// Compose a prompt from a role tag and raw overrides.
///
/// Parses `role`, merges `overrides` over the default config, and renders
/// with the locale named by the merged `language` knob.
pub fn compose(
    role: &str,
    scenario: &Scenario,
    overrides: &Map<String, Value>,
) -> Result<String, ComposeError> {
    let role: Role = role.parse()?;
    let config = PromptConfig::from_overrides(overrides)?;
    Composer::new(config.language).compose(role, scenario, &config)
}
