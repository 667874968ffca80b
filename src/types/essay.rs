//! Request and essay values that live for a single run.

use serde::{Deserialize, Serialize};

/// Author, work and the ordered prompts built for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub author: String,
    pub work: String,
    pub prompts: Vec<String>,
}

/// Raised when the generated essay is shorter than requested.
///
/// This never fails a run; it is reported next to the essay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountWarning {
    pub observed: usize,
    pub required: usize,
}

impl std::fmt::Display for WordCountWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "essay has {} words, fewer than the {} requested",
            self.observed, self.required
        )
    }
}

/// Generated essay text, sections joined in prompt order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Essay {
    pub text: String,
    pub word_count: usize,
    pub warning: Option<WordCountWarning>,
}

impl Essay {
    /// Wrap generated text, checking it against `required_words`.
    pub fn new(text: String, required_words: usize) -> Self {
        let word_count = count_words(&text);
        let warning = (word_count < required_words).then_some(WordCountWarning {
            observed: word_count,
            required: required_words,
        });
        Self {
            text,
            word_count,
            warning,
        }
    }

    /// First `max_chars` characters followed by the continuation marker.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut out: String = self.text.chars().take(max_chars).collect();
        out.push_str(CONTINUATION_MARKER);
        out
    }
}

/// Appended to every preview, whether or not the text was cut.
pub const CONTINUATION_MARKER: &str = "... [continúa]";

/// Whitespace-separated word count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
