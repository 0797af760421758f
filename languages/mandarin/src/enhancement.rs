use std::collections::HashMap;
use std::str::FromStr;

use kamus_core::lookup_key;
use kamus_types::Explanation;
use serde::{Deserialize, Serialize};

use crate::loader::{self, LoadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyCondition {
    /// Replace every text field unconditionally
    Always,
    /// Replace only fields still holding their sentinel
    OnlyIfIncomplete,
}

/// Curated replacement for one concept, reachable from any of its spellings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementRule {
    pub concept: String,
    pub aliases: Vec<String>,
    pub condition: ApplyCondition,
    pub pronunciation: String,
    pub explanation: String,
    pub examples: Vec<String>,
    #[serde(default)]
    pub force_adjective: bool,
}

impl EnhancementRule {
    pub fn apply(&self, explanation: &mut Explanation) {
        match self.condition {
            ApplyCondition::Always => {
                explanation.explanation = self.explanation.clone();
                explanation.examples = self.examples.clone();
                explanation.pronunciation = self.pronunciation.clone();
            }
            ApplyCondition::OnlyIfIncomplete => {
                if !explanation.is_incomplete() {
                    return;
                }

                // Each field is checked on its own
                if explanation.lacks_explanation() {
                    explanation.explanation = self.explanation.clone();
                }
                if explanation.lacks_examples() {
                    explanation.examples = self.examples.clone();
                }
                if explanation.lacks_pronunciation() {
                    explanation.pronunciation = self.pronunciation.clone();
                }
            }
        }

        if self.force_adjective {
            explanation.is_adjective = true;
        }
    }
}

/// Which rule set the generator runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnhancementProfile {
    #[default]
    Enhanced,
    Minimal,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown enhancement profile '{0}' (expected 'enhanced' or 'minimal')")]
pub struct UnknownProfile(pub String);

impl FromStr for EnhancementProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enhanced" => Ok(EnhancementProfile::Enhanced),
            "minimal" => Ok(EnhancementProfile::Minimal),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}

/// Rules keyed by concept, with an alias index over every spelling
#[derive(Debug, Default)]
pub struct EnhancementRules {
    rules: HashMap<String, EnhancementRule>,
    aliases: HashMap<String, String>,
}

impl EnhancementRules {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create with the embedded rules
    pub fn with_defaults() -> Self {
        Self::from_json(loader::ENHANCEMENTS_JSON).unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded enhancement rules: {}", e);
            tracing::warn!("Running without enhancement rules");
            Self::empty()
        })
    }

    pub fn for_profile(profile: EnhancementProfile) -> Self {
        match profile {
            EnhancementProfile::Enhanced => Self::with_defaults(),
            EnhancementProfile::Minimal => Self::empty(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let rules: Vec<EnhancementRule> =
            serde_json::from_str(json).map_err(LoadError::format("enhancements"))?;

        let aliases = loader::last_write_wins(
            "enhancement aliases",
            rules.iter().flat_map(|rule| {
                let concept = lookup_key(&rule.concept);
                let spellings = rule.aliases.iter().map(|alias| lookup_key(alias));
                std::iter::once(concept.clone())
                    .chain(spellings)
                    .map(move |alias| (alias, concept.clone()))
            }),
        );
        let rules = loader::last_write_wins(
            "enhancements",
            rules
                .into_iter()
                .map(|rule| (lookup_key(&rule.concept), rule)),
        );

        tracing::debug!(
            "Enhancement rules: {} concepts, {} spellings",
            rules.len(),
            aliases.len()
        );

        Ok(Self { rules, aliases })
    }

    pub fn rule_for(&self, word: &str) -> Option<&EnhancementRule> {
        self.aliases
            .get(&lookup_key(word))
            .and_then(|concept| self.rules.get(concept))
    }

    /// Apply at most one matching rule
    pub fn apply(&self, word: &str, mut explanation: Explanation) -> Explanation {
        if let Some(rule) = self.rule_for(word) {
            tracing::debug!(
                "Applying {:?} enhancement '{}' to '{}'",
                rule.condition,
                rule.concept,
                word
            );
            rule.apply(&mut explanation);
        }
        explanation
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
