//! Export of the essay and its statistics to a `.docx` document.

pub mod document;
pub mod sections;

pub use document::{build_document, STATIC_REFERENCE, TOP_TOKENS_IN_DOCUMENT};
pub use sections::{ExportLayout, ExportSections};

/// MIME type of Office Open XML word-processing documents.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Download name for the exported document.
///
/// Author and work are kept as typed, except characters that would change
/// the target directory or are not printable.
pub fn suggested_filename(author: &str, work: &str) -> String {
    format!("Analisis_{}_{}.docx", file_safe(author), file_safe(work))
}

fn file_safe(part: &str) -> String {
    part.chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect()
}
