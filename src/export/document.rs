//! Word-processor document assembly.

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use tracing::{debug, warn};

use super::sections::{ExportLayout, ExportSections};
use crate::analysis::FrequencyTable;
use crate::error::{LectioError, Result};

/// Tokens listed in the linguistic-analysis section.
pub const TOP_TOKENS_IN_DOCUMENT: usize = 10;

/// Illustrative citation; not derived from the generated essay.
pub const STATIC_REFERENCE: &str = "García, J. (2020). Contexto histórico de la literatura \
     latinoamericana. Journal of Latin American Studies, 45(3), 234-256.";

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

/// Build the `.docx` bytes for an essay and its statistics.
pub fn build_document(
    essay: &str,
    author: &str,
    work: &str,
    frequencies: &FrequencyTable,
    layout: ExportLayout,
) -> Result<Vec<u8>> {
    let sections = ExportSections::slice(essay, layout);
    if sections.overlaps() {
        warn!(
            chars = essay.chars().count(),
            min_chars = layout.min_chars(),
            "essay shorter than introduction + conclusion; exported sections overlap"
        );
    }

    let mut docx = Docx::new()
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .size(52)
                .bold(),
        )
        .add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_paragraph(styled(&format!("Análisis de {work} de {author}"), TITLE_STYLE))
        .add_paragraph(styled("Introducción", HEADING_STYLE))
        .add_paragraph(text_paragraph(&sections.introduction))
        .add_paragraph(styled("Análisis Lingüístico", HEADING_STYLE))
        .add_paragraph(text_paragraph(
            "Resultados del análisis computacional del texto:",
        ));
    for (word, count) in frequencies.most_common(TOP_TOKENS_IN_DOCUMENT) {
        docx = docx.add_paragraph(text_paragraph(&format!("{word}: {count} ocurrencias")));
    }
    docx = docx
        .add_paragraph(styled("Análisis Multidisciplinario", HEADING_STYLE))
        .add_paragraph(text_paragraph(&sections.body))
        .add_paragraph(styled("Conclusiones", HEADING_STYLE))
        .add_paragraph(text_paragraph(&sections.conclusion))
        .add_paragraph(styled("Referencias", HEADING_STYLE))
        .add_paragraph(text_paragraph(STATIC_REFERENCE));

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| LectioError::Export(format!("cannot pack document: {e}")))?;
    let bytes = buffer.into_inner();
    debug!(bytes = bytes.len(), "document packed");
    Ok(bytes)
}

fn styled(text: &str, style: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .style(style)
}

/// One paragraph; newlines inside `text` become line breaks.
fn text_paragraph(text: &str) -> Paragraph {
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}
