use std::sync::Arc;

use kamus_explainer::UnavailableExplainer;
use kamus_translator::UnavailableTranslator;
use kamus_types::{
    Explanation, MEANING_PLACEHOLDER, NO_EXAMPLES, NO_PRONUNCIATION, TRANSLATION_FAILED,
};

use super::fakes::{FakeExplainer, FakeTranslator, generated};
use crate::{DictionaryPipeline, EnhancementProfile};

fn pipeline(translator: Arc<FakeTranslator>, explainer: Arc<FakeExplainer>) -> DictionaryPipeline {
    DictionaryPipeline::with_collaborators(translator, explainer)
}

#[tokio::test]
async fn test_curated_word_short_circuits() {
    let translator = FakeTranslator::new(&[]);
    let explainer = FakeExplainer::new();
    let pipeline = pipeline(translator.clone(), explainer.clone());

    let entry = pipeline.resolve("makan").await;

    assert!(entry.is_curated);
    assert_eq!(entry, pipeline.store().get("makan").unwrap());
    assert_eq!(entry.target_word, "吃饭");
    assert_eq!(translator.calls(), 0);
    assert_eq!(explainer.calls(), 0);
}

#[tokio::test]
async fn test_pronunciation_override_beats_generated() {
    let translator = FakeTranslator::new(&[]);
    let explainer = FakeExplainer::with(&[(
        "想念",
        Explanation {
            is_adjective: true,
            ..generated("想念")
        },
    )]);
    let pipeline = pipeline(translator.clone(), explainer);

    let entry = pipeline.resolve("rindu").await;

    assert_eq!(entry.target_word, "想念");
    assert_eq!(entry.pronunciation, "xiǎng niàn");
    assert!(!entry.is_adjective);
    assert!(!entry.is_curated);
    // rindu is a curated word pair
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn test_curated_sentence_keeps_its_casing() {
    let translator = FakeTranslator::new(&[]);
    let explainer = FakeExplainer::new();
    let pipeline = pipeline(translator.clone(), explainer.clone());

    let entry = pipeline.resolve("Kamu sangat bijak").await;

    assert_eq!(entry.source_word, "Kamu sangat bijak");
    assert_eq!(entry.target_word, "你很聪明");
    assert!(!entry.is_degraded());
    assert_eq!(translator.calls(), 0);
    assert_eq!(
        explainer.requests(),
        vec![("你很聪明".to_string(), "Mandarin".to_string())]
    );
}

#[tokio::test]
async fn test_resolution_is_idempotent() {
    let pipeline = pipeline(FakeTranslator::new(&[]), FakeExplainer::new());

    let first = pipeline.resolve("gembira").await;
    let second = pipeline.resolve("gembira").await;

    assert_eq!(first, second);
    assert_eq!(first.target_word, "开心");
}

#[tokio::test]
async fn test_cjk_input_skips_translation() {
    let translator = FakeTranslator::new(&[]);
    let explainer = FakeExplainer::new();
    let pipeline = pipeline(translator.clone(), explainer.clone());

    let entry = pipeline.resolve("枯萎").await;

    assert_eq!(entry.source_word, MEANING_PLACEHOLDER);
    assert_eq!(entry.target_word, "枯萎");
    assert_eq!(entry.pronunciation, "kū wěi");
    assert_eq!(translator.calls(), 0);
    assert_eq!(
        explainer.requests(),
        vec![("枯萎".to_string(), "Mandarin".to_string())]
    );
}

#[tokio::test]
async fn test_malay_input_is_translated_first() {
    let translator = FakeTranslator::new(&[("layu", "枯萎")]);
    let explainer = FakeExplainer::new();
    let pipeline = pipeline(translator.clone(), explainer.clone());

    let entry = pipeline.resolve("layu").await;

    assert_eq!(translator.requests(), vec!["layu".to_string()]);
    assert_eq!(explainer.requests()[0].0, "枯萎");
    assert_eq!(entry.source_word, "layu");
    assert_eq!(entry.target_word, "枯萎");
    assert_eq!(entry.pronunciation, "kū wěi");
    // the enhancement rule leaves the flag alone, the override sets it
    assert!(entry.is_adjective);
}

#[tokio::test]
async fn test_always_rule_replaces_generated_fields() {
    let pipeline = pipeline(FakeTranslator::new(&[]), FakeExplainer::new());

    let entry = pipeline.resolve("cantik").await;

    assert_eq!(entry.target_word, "美丽");
    assert_eq!(entry.pronunciation, "měi lì");
    assert!(entry.explanation.starts_with("美丽 bermaksud cantik"));
    assert_eq!(entry.examples.len(), 3);
    assert!(entry.is_adjective);
}

#[tokio::test]
async fn test_only_if_incomplete_rule_keeps_complete_output() {
    let pipeline = pipeline(FakeTranslator::new(&[]), FakeExplainer::new());

    let entry = pipeline.resolve("快").await;
    let expected = generated("快");

    assert_eq!(entry.explanation, expected.explanation);
    assert_eq!(entry.examples, expected.examples);
    assert_eq!(entry.pronunciation, "generated");
    assert!(!entry.is_adjective);
}

#[tokio::test]
async fn test_only_if_incomplete_rule_patches_missing_fields() {
    let explainer = FakeExplainer::with(&[(
        "快",
        Explanation {
            explanation: "Laju".to_string(),
            examples: vec![],
            pronunciation: String::new(),
            is_adjective: false,
        },
    )]);
    let pipeline = pipeline(FakeTranslator::new(&[]), explainer);

    let entry = pipeline.resolve("快").await;

    assert_eq!(entry.explanation, "Laju");
    assert_eq!(entry.pronunciation, "kuài");
    assert_eq!(entry.examples.len(), 3);
    assert_ne!(entry.examples[0], NO_EXAMPLES);
    assert!(entry.is_adjective);
}

#[tokio::test]
async fn test_missing_pronunciation_is_filled_from_pinyin_table() {
    let explainer = FakeExplainer::with(&[(
        "美丽",
        Explanation {
            pronunciation: String::new(),
            ..generated("美丽")
        },
    )]);
    let pipeline = DictionaryPipeline::with_additional_tables(
        FakeTranslator::new(&[]),
        explainer,
        EnhancementProfile::Minimal,
        &[],
        &[],
    );

    let entry = pipeline.resolve("cantik").await;

    assert_eq!(entry.pronunciation, "měi lì");
    assert_eq!(entry.explanation, generated("美丽").explanation);
    // adjective override for cantik
    assert!(entry.is_adjective);
}

#[tokio::test]
async fn test_unknown_pronunciation_stays_sentinel() {
    let translator = FakeTranslator::new(&[("kucing", "猫咪")]);
    let explainer = FakeExplainer::with(&[(
        "猫咪",
        Explanation {
            pronunciation: "  ".to_string(),
            ..generated("猫咪")
        },
    )]);
    let pipeline = pipeline(translator, explainer);

    let entry = pipeline.resolve("kucing").await;

    assert_eq!(entry.pronunciation, NO_PRONUNCIATION);
}

#[tokio::test]
async fn test_translation_failure_degrades() {
    let pipeline = pipeline(FakeTranslator::new(&[]), FakeExplainer::new());

    let entry = pipeline.resolve("sedih-unknown").await;

    assert_eq!(entry.source_word, "sedih-unknown");
    assert_eq!(entry.target_word, TRANSLATION_FAILED);
    assert_eq!(
        entry.explanation,
        "Unable to translate this word. Translation API error (500): no translation for sedih-unknown"
    );
    assert_eq!(entry.examples, vec![NO_EXAMPLES.to_string()]);
    assert_eq!(entry.pronunciation, NO_PRONUNCIATION);
    assert!(!entry.is_adjective);
    assert!(!entry.is_curated);
}

#[tokio::test]
async fn test_generation_failure_degrades() {
    let pipeline = pipeline(FakeTranslator::new(&[]), FakeExplainer::failing());

    let entry = pipeline.resolve("cantik").await;

    assert!(entry.is_degraded());
    assert!(entry.explanation.contains("503"));
}

#[tokio::test]
async fn test_unconfigured_services_still_serve_curated_entries() {
    let pipeline = DictionaryPipeline::with_collaborators(
        Arc::new(UnavailableTranslator),
        Arc::new(UnavailableExplainer),
    );

    assert!(pipeline.resolve("tidur").await.is_curated);

    let entry = pipeline.resolve("kucing").await;
    assert!(entry.is_degraded());
    assert!(entry.explanation.ends_with("Translation service is not configured"));
}

#[tokio::test]
async fn test_case_insensitive_resolution() {
    let pipeline = pipeline(FakeTranslator::new(&[]), FakeExplainer::new());

    let upper = pipeline.resolve("CANTIK").await;
    let lower = pipeline.resolve("cantik").await;

    assert_eq!(upper, lower);
    assert_eq!(upper.source_word, "cantik");
}

#[tokio::test]
async fn test_input_is_trimmed() {
    let pipeline = pipeline(FakeTranslator::new(&[]), FakeExplainer::new());

    assert!(pipeline.resolve("  Makan\n").await.is_curated);
}

#[tokio::test]
async fn test_empty_input_degrades() {
    let explainer = FakeExplainer::new();
    let pipeline = pipeline(FakeTranslator::new(&[]), explainer.clone());

    let entry = pipeline.resolve("   ").await;

    assert!(entry.is_degraded());
    assert_eq!(entry.source_word, "");
    assert_eq!(explainer.calls(), 0);
}

#[tokio::test]
async fn test_resolve_all_keeps_input_order() {
    let translator = FakeTranslator::new(&[("layu", "枯萎")]);
    let pipeline = pipeline(translator, FakeExplainer::new());

    let entries = pipeline
        .resolve_all(&["tidur", "layu", "sedih-unknown", "美丽"])
        .await;

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].target_word, "睡觉");
    assert_eq!(entries[1].target_word, "枯萎");
    assert!(entries[2].is_degraded());
    assert_eq!(entries[3].source_word, MEANING_PLACEHOLDER);
}
