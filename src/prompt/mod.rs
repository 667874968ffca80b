//! Prompt templates for the essay request.

use crate::types::{EssayVariant, GenerationRequest};

/// Minimum words requested from the single-call prompt.
pub const SINGLE_TARGET_WORDS: usize = 5000;

/// Minimum words requested per section in the sectioned variant.
pub const SECTION_TARGET_WORDS: [(Section, usize); 3] = [
    (Section::Introduction, 2000),
    (Section::Body, 6000),
    (Section::Conclusion, 2000),
];

/// Part of a sectioned essay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Introduction,
    Body,
    Conclusion,
}

/// Words the essay should reach for a variant.
pub fn required_words(variant: EssayVariant) -> usize {
    match variant {
        EssayVariant::Single => SINGLE_TARGET_WORDS,
        EssayVariant::Sectioned => SECTION_TARGET_WORDS.iter().map(|(_, words)| words).sum(),
    }
}

/// Build the prompt(s) for `author` and `work`.
///
/// Input is interpolated as given; empty strings are not rejected here.
pub fn build_request(author: &str, work: &str, variant: EssayVariant) -> GenerationRequest {
    let prompts = match variant {
        EssayVariant::Single => vec![single_prompt(author, work)],
        EssayVariant::Sectioned => SECTION_TARGET_WORDS
            .iter()
            .map(|(section, words)| section_prompt(*section, *words, author, work))
            .collect(),
    };

    GenerationRequest {
        author: author.to_string(),
        work: work.to_string(),
        prompts,
    }
}

fn single_prompt(author: &str, work: &str) -> String {
    format!(
        "Escribe un ensayo académico de más de {SINGLE_TARGET_WORDS} palabras que combine \
         estudios literarios, históricos y antropológicos para analizar la obra '{work}' de {author}. \
         Incluye una introducción, análisis detallado, conclusiones y citas de fuentes académicas \
         reales en formato APA."
    )
}

fn section_prompt(section: Section, words: usize, author: &str, work: &str) -> String {
    let focus = match section {
        Section::Introduction => {
            "la introducción: presenta al autor, el contexto histórico de la obra y la tesis del ensayo"
        }
        Section::Body => {
            "el cuerpo del análisis: combina estudios literarios, históricos y antropológicos con \
             citas de fuentes académicas en formato APA"
        }
        Section::Conclusion => {
            "las conclusiones: sintetiza los hallazgos y propone líneas de investigación futuras"
        }
    };
    format!(
        "Escribe, con un mínimo de {words} palabras, {focus} de un ensayo académico sobre la obra \
         '{work}' de {author}. Escribe solo esa parte del ensayo."
    )
}
