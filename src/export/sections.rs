//! Fixed-offset slicing of the essay into document sections.

use serde::{Deserialize, Serialize};

use crate::types::EssayVariant;

/// Character offsets used to cut the essay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportLayout {
    /// Leading characters exported as the introduction.
    pub intro_chars: usize,
    /// Trailing characters exported as the conclusion.
    pub conclusion_chars: usize,
}

impl ExportLayout {
    pub const fn new(intro_chars: usize, conclusion_chars: usize) -> Self {
        Self {
            intro_chars,
            conclusion_chars,
        }
    }

    pub fn for_variant(variant: EssayVariant) -> Self {
        match variant {
            EssayVariant::Single => Self::new(1000, 1000),
            EssayVariant::Sectioned => Self::new(10_000, 5_000),
        }
    }

    /// Shortest essay whose intro and conclusion do not overlap.
    pub fn min_chars(&self) -> usize {
        self.intro_chars + self.conclusion_chars
    }
}

/// Introduction, body and conclusion cut from one essay.
///
/// Offsets count characters, not bytes. The three regions are cut
/// independently:
///
/// - introduction: the first `intro_chars` characters (or the whole text)
/// - conclusion: the last `conclusion_chars` characters (or the whole text)
/// - body: what lies strictly between them, empty when nothing does
///
/// For a text shorter than [`ExportLayout::min_chars`] the introduction and
/// conclusion share characters and the regions no longer add up to the
/// essay. [`overlaps`](Self::overlaps) reports that case; nothing is
/// adjusted to hide it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSections {
    pub introduction: String,
    pub body: String,
    pub conclusion: String,
    text_chars: usize,
    layout: ExportLayout,
}

impl ExportSections {
    pub fn slice(text: &str, layout: ExportLayout) -> Self {
        let text_chars = text.chars().count();
        let byte_at = |chars: usize| {
            text.char_indices()
                .nth(chars)
                .map(|(byte, _)| byte)
                .unwrap_or(text.len())
        };

        let intro_end = byte_at(layout.intro_chars.min(text_chars));
        let conclusion_start_chars = text_chars.saturating_sub(layout.conclusion_chars);
        let conclusion_start = byte_at(conclusion_start_chars);
        let body = if layout.intro_chars < conclusion_start_chars {
            &text[intro_end..conclusion_start]
        } else {
            ""
        };

        Self {
            introduction: text[..intro_end].to_string(),
            body: body.to_string(),
            conclusion: text[conclusion_start..].to_string(),
            text_chars,
            layout,
        }
    }

    pub fn layout(&self) -> ExportLayout {
        self.layout
    }

    /// Whether introduction and conclusion share characters.
    pub fn overlaps(&self) -> bool {
        self.text_chars < self.layout.min_chars()
    }

    /// Whether introduction + body + conclusion equals `text`.
    pub fn reconstructs(&self, text: &str) -> bool {
        let joined_len = self.introduction.len() + self.body.len() + self.conclusion.len();
        joined_len == text.len()
            && text.starts_with(&self.introduction)
            && text.ends_with(&self.conclusion)
            && text[self.introduction.len()..].starts_with(&self.body)
    }
}
