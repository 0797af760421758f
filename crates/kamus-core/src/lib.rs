pub mod language;
pub mod preprocess;

pub use language::{Language, LanguageCode, Script};
pub use preprocess::{DefaultPreprocessor, Preprocessor, lookup_key};
