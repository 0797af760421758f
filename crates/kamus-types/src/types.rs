use serde::{Deserialize, Serialize};

pub const NO_EXPLANATION: &str = "No explanation available";
pub const NO_PRONUNCIATION: &str = "No pronunciation available";
pub const NO_EXAMPLES: &str = "No examples available";

/// Target word reported when resolution degraded
pub const TRANSLATION_FAILED: &str = "Translation failed";

/// Source word placeholder used when the input already was Mandarin
pub const MEANING_PLACEHOLDER: &str = "(meaning)";

/// Fully populated bilingual entry returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub source_word: String,
    pub target_word: String,
    pub pronunciation: String,
    pub explanation: String,
    pub examples: Vec<String>,
    pub is_adjective: bool,
    #[serde(default)]
    pub is_curated: bool,
}

impl DictionaryEntry {
    /// Build an entry from a generated explanation
    pub fn from_explanation(
        source_word: impl Into<String>,
        target_word: impl Into<String>,
        explanation: Explanation,
    ) -> Self {
        let explanation = explanation.normalized();

        Self {
            source_word: source_word.into(),
            target_word: target_word.into(),
            pronunciation: explanation.pronunciation,
            explanation: explanation.explanation,
            examples: explanation.examples,
            is_adjective: explanation.is_adjective,
            is_curated: false,
        }
    }

    /// Entry returned when translation or generation failed upstream
    pub fn degraded(source_word: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self {
            source_word: source_word.into(),
            target_word: TRANSLATION_FAILED.to_string(),
            pronunciation: NO_PRONUNCIATION.to_string(),
            explanation: format!("Unable to translate this word. {detail}"),
            examples: vec![NO_EXAMPLES.to_string()],
            is_adjective: false,
            is_curated: false,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.target_word == TRANSLATION_FAILED
    }

    /// Examples rendered as "1. ...", one per line
    pub fn numbered_examples(&self) -> String {
        number_examples(&self.examples)
    }
}

/// Structured output of the explanation stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub explanation: String,
    pub examples: Vec<String>,
    pub pronunciation: String,
    pub is_adjective: bool,
}

impl Default for Explanation {
    fn default() -> Self {
        Self {
            explanation: NO_EXPLANATION.to_string(),
            examples: vec![NO_EXAMPLES.to_string()],
            pronunciation: NO_PRONUNCIATION.to_string(),
            is_adjective: false,
        }
    }
}

impl Explanation {
    /// Replace blank fields with their sentinels
    pub fn normalized(mut self) -> Self {
        if self.explanation.trim().is_empty() {
            self.explanation = NO_EXPLANATION.to_string();
        }
        if self.pronunciation.trim().is_empty() {
            self.pronunciation = NO_PRONUNCIATION.to_string();
        }
        self.examples.retain(|e| !e.trim().is_empty());
        if self.examples.is_empty() {
            self.examples.push(NO_EXAMPLES.to_string());
        }
        self
    }

    pub fn lacks_explanation(&self) -> bool {
        self.explanation.trim() == NO_EXPLANATION
    }

    pub fn lacks_pronunciation(&self) -> bool {
        self.pronunciation.trim() == NO_PRONUNCIATION
    }

    pub fn lacks_examples(&self) -> bool {
        match self.examples.as_slice() {
            [] => true,
            [only] => only.trim() == NO_EXAMPLES,
            _ => false,
        }
    }

    /// True if any text field still holds its sentinel
    pub fn is_incomplete(&self) -> bool {
        self.lacks_explanation() || self.lacks_pronunciation() || self.lacks_examples()
    }
}

pub fn number_examples(examples: &[String]) -> String {
    examples
        .iter()
        .enumerate()
        .map(|(i, example)| format!("{}. {}", i + 1, example.replace('\n', "\n   ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_become_sentinels() {
        let explanation = Explanation {
            explanation: "  ".to_string(),
            examples: vec![String::new()],
            pronunciation: String::new(),
            is_adjective: true,
        }
        .normalized();

        assert_eq!(explanation.explanation, NO_EXPLANATION);
        assert_eq!(explanation.pronunciation, NO_PRONUNCIATION);
        assert_eq!(explanation.examples, vec![NO_EXAMPLES.to_string()]);
        assert!(explanation.is_incomplete());
    }

    #[test]
    fn one_sentinel_makes_explanation_incomplete() {
        let explanation = Explanation {
            explanation: "Bagus".to_string(),
            examples: vec!["好人".to_string()],
            pronunciation: NO_PRONUNCIATION.to_string(),
            is_adjective: false,
        };

        assert!(!explanation.lacks_explanation());
        assert!(!explanation.lacks_examples());
        assert!(explanation.is_incomplete());
    }

    #[test]
    fn degraded_entry_carries_detail() {
        let entry = DictionaryEntry::degraded("sedih-unknown", "HTTP 500");

        assert!(entry.is_degraded());
        assert_eq!(entry.explanation, "Unable to translate this word. HTTP 500");
        assert_eq!(entry.examples, vec![NO_EXAMPLES.to_string()]);
        assert_eq!(entry.pronunciation, NO_PRONUNCIATION);
        assert!(!entry.is_adjective);
    }

    #[test]
    fn numbered_examples_indent_continuation_lines() {
        let rendered = number_examples(&[
            "他跑得很快。\nDia berlari dengan cepat.".to_string(),
            "这种方法比较快。".to_string(),
        ]);

        assert_eq!(
            rendered,
            "1. 他跑得很快。\n   Dia berlari dengan cepat.\n2. 这种方法比较快。"
        );
    }

    #[test]
    fn entry_serializes_camel_case() {
        let entry = DictionaryEntry::degraded("x", "y");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["targetWord"], TRANSLATION_FAILED);
        assert_eq!(json["isAdjective"], false);
        assert_eq!(json["isCurated"], false);
    }
}
