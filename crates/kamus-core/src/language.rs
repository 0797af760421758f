use serde::{Deserialize, Serialize};

/// ISO 639-1 code ("ms", "zh")
pub type LanguageCode = String;

/// Languages covered by the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Malay,
    Mandarin,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Malay => "ms",
            Language::Mandarin => "zh",
        }
    }

    /// Human readable name, passed to the explanation service
    pub fn name(&self) -> &'static str {
        match self {
            Language::Malay => "Malay",
            Language::Mandarin => "Mandarin",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ms" => Some(Language::Malay),
            "zh" => Some(Language::Mandarin),
            _ => None,
        }
    }
}

/// Writing system of an input word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Contains at least one CJK Unified Ideograph
    Cjk,
    Latin,
}

impl Script {
    pub fn classify(text: &str) -> Self {
        if text.chars().any(is_cjk_ideograph) {
            Script::Cjk
        } else {
            Script::Latin
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Script::Cjk => Language::Mandarin,
            Script::Latin => Language::Malay,
        }
    }
}

/// CJK Unified Ideographs block, U+4E00..=U+9FFF
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_detects_ideographs() {
        assert_eq!(Script::classify("枯萎"), Script::Cjk);
        assert_eq!(Script::classify("layu"), Script::Latin);
        assert_eq!(Script::classify("bunga 花"), Script::Cjk);
    }

    #[test]
    fn kana_and_hangul_are_not_cjk_ideographs() {
        assert_eq!(Script::classify("ひらがな"), Script::Latin);
        assert_eq!(Script::classify("한국어"), Script::Latin);
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from_code("MS"), Some(Language::Malay));
        assert_eq!(Language::from_code(Language::Mandarin.code()), Some(Language::Mandarin));
        assert_eq!(Language::from_code("en"), None);
    }
}
