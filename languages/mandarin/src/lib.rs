pub mod enhancement;
pub mod entries;
pub mod generator;
pub mod loader;
pub mod mapping;
pub mod pinyin;
pub mod pipeline;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use enhancement::{ApplyCondition, EnhancementProfile, EnhancementRule, EnhancementRules};
pub use entries::{CuratedEntryStore, EntryNotFound, OverrideRule};
pub use generator::ExplanationGenerator;
pub use loader::{LoadError, TableLoader};
pub use mapping::{TranslationPair, TranslationTable};
pub use pinyin::PinyinConverter;
pub use pipeline::{DictionaryPipeline, ResolveError};
pub use resolver::TranslationResolver;
