use kamus_types::Explanation;
use serde::Deserialize;

use crate::ExplainError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExplanation {
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    examples: Option<RawExamples>,
    #[serde(default)]
    pronunciation: Option<String>,
    #[serde(default, alias = "is_adjective")]
    is_adjective: Option<bool>,
}

/// Models return examples either as a list or as one numbered block
#[derive(Deserialize)]
#[serde(untagged)]
enum RawExamples {
    List(Vec<String>),
    Text(String),
}

/// Parse a model reply into an explanation, missing fields become sentinels
pub(crate) fn parse_explanation(content: &str) -> Result<Explanation, ExplainError> {
    let json = strip_code_fence(content);

    let raw: RawExplanation = serde_json::from_str(json)
        .map_err(|e| ExplainError::InvalidResponse(format!("Unparseable explanation: {}", e)))?;

    let examples = match raw.examples {
        Some(RawExamples::List(items)) => items.iter().map(String::as_str).map(clean_item).collect(),
        Some(RawExamples::Text(text)) => split_examples(&text),
        None => vec![],
    };

    let explanation = Explanation {
        explanation: raw.explanation.unwrap_or_default(),
        examples,
        pronunciation: raw.pronunciation.unwrap_or_default(),
        is_adjective: raw.is_adjective.unwrap_or(false),
    };

    Ok(explanation.normalized())
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Split an example block into single examples.
///
/// Numbered blocks ("1. ...") group continuation lines with the example they
/// follow; blocks without numbering yield one example per line.
pub fn split_examples(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if !lines.iter().any(|line| strip_number(line).is_some()) {
        return lines.into_iter().map(str::to_string).collect();
    }

    let mut examples: Vec<String> = Vec::new();
    for line in lines {
        match strip_number(line) {
            Some(rest) => examples.push(rest.to_string()),
            None => match examples.last_mut() {
                Some(current) => {
                    current.push('\n');
                    current.push_str(line);
                }
                None => examples.push(line.to_string()),
            },
        }
    }

    examples
}

/// One list item, possibly spanning lines, without its leading number
fn clean_item(item: &str) -> String {
    item.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| match i {
            0 => strip_number(line).unwrap_or(line),
            _ => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_number(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let rest = &line[digits..];
    let rest = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))?;
    // "1.5倍" is a decimal, not a list marker
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some(rest.trim_start())
}
