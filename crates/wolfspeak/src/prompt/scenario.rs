//! Observable game state supplied by the caller.
//!
//! Every field is optional on the wire. Missing or `null` collections
//! deserialize as empty so the composer can render them as empty sections.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::num::NonZeroU32;

use serde::{Deserialize, Deserializer, Serialize};

/// Point-in-time snapshot of the game as seen by the speaking agent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Scenario {
    /// Lookup key inside a scenario document. Never rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Day counter, starting at 1. Zero is rejected on deserialization.
    pub day: Option<NonZeroU32>,
    pub phase: Option<Phase>,
    /// Narrative order is preserved in the prompt.
    #[serde(deserialize_with = "nullable")]
    pub events: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub cast: Vec<CastMember>,
    #[serde(deserialize_with = "nullable")]
    pub deaths: Vec<Death>,
    #[serde(deserialize_with = "nullable")]
    pub map_info: MapInfo,
    /// Publicly observed items per person, rendered in name order.
    #[serde(deserialize_with = "nullable")]
    pub inventory_observed: BTreeMap<String, Vec<String>>,
    /// Vote counts per person, rendered in name order.
    #[serde(deserialize_with = "nullable")]
    pub votes_so_far: BTreeMap<String, u32>,
    pub camp_level: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Day,
    Night,
}

/// One participant and the profession they publicly claim.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CastMember {
    pub name: String,
    pub claimed_role: Option<String>,
    /// Caller-only ground truth. The composer never reads it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_role: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Death {
    pub name: String,
    pub cause_reported: String,
    pub found_by: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MapInfo {
    pub camp_tile: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub poison_hotspots: Vec<String>,
    pub distance_rule: Option<String>,
}

impl Scenario {
    /// Distinct, non-empty claimed roles in byte order.
    pub fn claimed_roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = self
            .cast
            .iter()
            .filter_map(|c| c.claimed_role.as_deref())
            .filter(|r| !r.is_empty())
            .collect();
        roles.sort_unstable();
        roles.dedup();
        roles
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Keep scenario text on one line and out of the section-label namespace.
///
/// Line breaks become spaces and the label brackets `【` `】` become the
/// full-width square brackets `［` `］`. The content itself is left alone.
pub fn isolate(text: &str) -> Cow<'_, str> {
    let needs_rewrite = text.contains(|c: char| matches!(c, '\n' | '\r' | '【' | '】'));
    if !needs_rewrite {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| match c {
                '\n' | '\r' => ' ',
                '【' => '［',
                '】' => '］',
                other => other,
            })
            .collect(),
    )
}
