//! Static text banks, one per supported locale.
//!
//! A [`TextBank`] owns every literal the composer emits: section labels,
//! rules summary, strategy bundles, capability table, knob sentences,
//! boilerplate, examples, and the final directive template. Banks are
//! `'static` data selected once through [`TextBank::for_language`].

mod en;
mod ja;
mod zh;

use super::config::{Language, Level, OutputStyle, PersonaTone, Role};

/// Text bank for one locale.
#[derive(Debug)]
pub struct TextBank {
    pub labels: Labels,
    pub rules: &'static str,
    pub werewolf: RoleBank,
    pub villager: RoleBank,
    pub capabilities: &'static [Capability],
    pub risk: Tiered<&'static str>,
    pub aggression: Tiered<&'static str>,
    pub tone: ToneSentences,
    /// First directive line; `{length}` is replaced by the length hint.
    pub task_framing: &'static str,
    pub length_hint: ByStyle,
    /// Hard constraints following the task framing line.
    pub directives: &'static [&'static str],
    pub objective: &'static [&'static str],
    pub speech_only: &'static [&'static str],
    /// `{role}` and `{sentences}` are substituted.
    pub final_directive: &'static str,
    pub sentence_range: ByStyle,
    pub terms: Terms,
}

/// Section labels, each rendered on its own line.
#[derive(Debug)]
pub struct Labels {
    pub system: &'static str,
    pub rules: &'static str,
    pub capabilities: &'static str,
    pub model: &'static str,
    pub context: &'static str,
    pub objective: &'static str,
    pub speech_only: &'static str,
    pub examples: &'static str,
}

/// Everything the bank knows about one faction.
#[derive(Debug)]
pub struct RoleBank {
    /// Localized role name used in the model label and final directive.
    pub label: &'static str,
    pub description: &'static str,
    pub core: &'static [&'static str],
    pub tactics: Tiered<&'static [&'static str]>,
    pub examples: &'static [&'static str],
}

/// One value per [`Level`].
#[derive(Debug)]
pub struct Tiered<T> {
    pub low: T,
    pub medium: T,
    pub high: T,
}

impl<T: Copy> Tiered<T> {
    pub fn get(&self, level: Level) -> T {
        match level {
            Level::Low => self.low,
            Level::Medium => self.medium,
            Level::High => self.high,
        }
    }
}

#[derive(Debug)]
pub struct ToneSentences {
    pub calm: &'static str,
    pub assertive: &'static str,
    pub apologetic: &'static str,
    pub analytical: &'static str,
}

impl ToneSentences {
    pub fn get(&self, tone: PersonaTone) -> &'static str {
        match tone {
            PersonaTone::Calm => self.calm,
            PersonaTone::Assertive => self.assertive,
            PersonaTone::Apologetic => self.apologetic,
            PersonaTone::Analytical => self.analytical,
        }
    }
}

#[derive(Debug)]
pub struct ByStyle {
    pub short: &'static str,
    pub normal: &'static str,
}

impl ByStyle {
    pub fn get(&self, style: OutputStyle) -> &'static str {
        match style {
            OutputStyle::Short => self.short,
            OutputStyle::Normal => self.normal,
        }
    }
}

/// Ability bullets for one in-game profession.
#[derive(Debug)]
pub struct Capability {
    /// Locale-independent identifier, also accepted as a claimed role.
    pub id: &'static str,
    /// Localized profession label.
    pub label: &'static str,
    pub abilities: &'static [&'static str],
}

/// Inline vocabulary for the context and behavior model sections.
#[derive(Debug)]
pub struct Terms {
    pub day: &'static str,
    pub phase: &'static str,
    pub phase_day: &'static str,
    pub phase_night: &'static str,
    pub events: &'static str,
    pub deaths: &'static str,
    pub inventory: &'static str,
    pub votes: &'static str,
    /// Appended to each vote count.
    pub vote_unit: &'static str,
    pub camp_level: &'static str,
    pub map: &'static str,
    pub hotspots: &'static str,
    pub distance: &'static str,
    pub found_by: &'static str,
    pub role: &'static str,
    pub core: &'static str,
    pub tactics: &'static str,
}

impl TextBank {
    pub fn for_language(language: Language) -> &'static TextBank {
        match language {
            Language::Ja => &ja::BANK,
            Language::Zh => &zh::BANK,
            Language::En => &en::BANK,
        }
    }

    pub fn role(&self, role: Role) -> &RoleBank {
        match role {
            Role::Werewolf => &self.werewolf,
            Role::Villager => &self.villager,
        }
    }

    /// Capability entry whose label or id equals `claimed`.
    pub fn capability(&self, claimed: &str) -> Option<&Capability> {
        self.capabilities
            .iter()
            .find(|c| c.label == claimed || c.id == claimed)
    }

    /// All section labels in render order, with `role` filled into the model label.
    pub fn ordered_labels(&self, role: Role) -> [String; 8] {
        let l = &self.labels;
        [
            l.system.to_string(),
            l.rules.to_string(),
            l.capabilities.to_string(),
            self.model_label(role),
            l.context.to_string(),
            l.objective.to_string(),
            l.speech_only.to_string(),
            l.examples.to_string(),
        ]
    }

    pub fn model_label(&self, role: Role) -> String {
        format!("{} ({})", self.labels.model, self.role(role).label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGUAGES: [Language; 3] = [Language::Ja, Language::Zh, Language::En];

    #[test]
    fn every_bank_has_three_tactic_tiers_per_role() {
        for lang in LANGUAGES {
            let bank = TextBank::for_language(lang);
            for role in [Role::Werewolf, Role::Villager] {
                let rb = bank.role(role);
                assert!(!rb.core.is_empty(), "{lang:?}/{role}: empty core");
                for level in [Level::Low, Level::Medium, Level::High] {
                    assert!(
                        !rb.tactics.get(level).is_empty(),
                        "{lang:?}/{role}/{level}: empty tactics"
                    );
                }
                assert!(rb.examples.len() >= 2, "{lang:?}/{role}: too few examples");
            }
        }
    }

    #[test]
    fn knob_sentences_are_distinct() {
        for lang in LANGUAGES {
            let bank = TextBank::for_language(lang);
            let mut sentences = vec![
                bank.risk.low,
                bank.risk.medium,
                bank.risk.high,
                bank.aggression.low,
                bank.aggression.medium,
                bank.aggression.high,
                bank.tone.calm,
                bank.tone.assertive,
                bank.tone.apologetic,
                bank.tone.analytical,
            ];
            let total = sentences.len();
            sentences.sort_unstable();
            sentences.dedup();
            assert_eq!(sentences.len(), total, "{lang:?}: duplicate knob sentence");
        }
    }

    #[test]
    fn werewolf_examples_differ_from_villager_examples() {
        for lang in LANGUAGES {
            let bank = TextBank::for_language(lang);
            assert_ne!(bank.werewolf.examples, bank.villager.examples);
        }
    }

    #[test]
    fn capability_lookup_accepts_label_or_id() {
        let ja = TextBank::for_language(Language::Ja);
        let by_label = ja.capability("医者").unwrap();
        let by_id = ja.capability("medic").unwrap();
        assert_eq!(by_label.label, by_id.label);
        assert!(ja.capability("unknown_profession").is_none());
    }

    #[test]
    fn labels_are_unique_within_a_bank() {
        for lang in LANGUAGES {
            let bank = TextBank::for_language(lang);
            let mut labels = bank.ordered_labels(Role::Werewolf).to_vec();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), 8, "{lang:?}: duplicate section label");
        }
    }

    #[test]
    fn templates_carry_their_placeholders() {
        for lang in LANGUAGES {
            let bank = TextBank::for_language(lang);
            assert!(bank.task_framing.contains("{length}"));
            assert!(bank.final_directive.contains("{role}"));
            assert!(bank.final_directive.contains("{sentences}"));
        }
    }
}
