//! Linguistic analysis: tokenization, stop-word filtering and counting.

pub mod frequency;
pub mod tokenizer;

pub use frequency::FrequencyTable;

use tracing::debug;

use crate::resources::StopWords;

/// Result of analyzing an essay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub frequencies: FrequencyTable,
    /// Tokens that survived filtering, in text order.
    pub tokens: Vec<String>,
}

/// Lowercase, tokenize, drop non-alphanumeric tokens and stop words, count.
///
/// No stemming or lemmatization: tokens are compared as exact strings.
pub fn analyze(text: &str, stopwords: &StopWords) -> Analysis {
    let lowered = text.to_lowercase();
    let tokens: Vec<String> = tokenizer::tokenize(&lowered)
        .filter(|token| tokenizer::is_alphanumeric(token) && !stopwords.contains(token))
        .map(str::to_string)
        .collect();
    let frequencies: FrequencyTable = tokens.iter().map(String::as_str).collect();

    debug!(
        language = %stopwords.language(),
        tokens = tokens.len(),
        distinct = frequencies.len(),
        "analysis complete"
    );

    Analysis {
        frequencies,
        tokens,
    }
}
