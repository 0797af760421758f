use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default dictionary input preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC), folds full-width Latin into ASCII
        text = text.nfkc().collect();

        // Remove newlines pasted along with the word
        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Key used by every case-insensitive word table
pub fn lookup_key(word: &str) -> String {
    word.trim().to_lowercase()
}
